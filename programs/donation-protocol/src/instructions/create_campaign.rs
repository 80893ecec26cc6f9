use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};
use raydium_amm_v3::states::PoolState;

use crate::{
    constants::{CREATOR_PREFIX, DONATION_PREFIX, HOLDING_PREFIX, HOLDING_WALLET_PREFIX},
    engine::plan_campaign,
    errors::DonationError,
    events::CampaignCreated,
    oracle::resolve_quote,
    states::{
        AuthorizedPool, Campaign, CampaignTerms, CreatorLedger, ProtocolConfig, DISCRIMINATOR_LEN,
    },
};

#[derive(Accounts)]
pub struct CreateCampaign<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,

    pub protocol_config: Box<Account<'info, ProtocolConfig>>,

    #[account(mut,
        seeds = [
            CREATOR_PREFIX.as_bytes(),
            protocol_config.key().as_ref(),
            creator.key().as_ref(),
        ],
        bump = creator_ledger.bump,
        constraint = creator_ledger.protocol_config == protocol_config.key() @ DonationError::Unauthorized,
    )]
    pub creator_ledger: Box<Account<'info, CreatorLedger>>,

    pub donation_mint: Box<Account<'info, Mint>>,

    #[account(
        init,
        payer = creator,
        space = DISCRIMINATOR_LEN + Campaign::INIT_SPACE,
        seeds = [
            DONATION_PREFIX.as_bytes(),
            creator_ledger.key().as_ref(),
            &creator_ledger.donations_created_count.to_le_bytes(),
        ],
        bump,
    )]
    pub campaign: Box<Account<'info, Campaign>>,

    #[account(
        seeds = [HOLDING_PREFIX.as_bytes(), campaign.key().as_ref()],
        bump,
    )]
    /// CHECK: pda account ["holding", campaign], owner of the escrow
    pub holding_wallet_owner: UncheckedAccount<'info>,

    #[account(
        init,
        payer = creator,
        token::mint = donation_mint,
        token::authority = holding_wallet_owner,
        seeds = [HOLDING_WALLET_PREFIX.as_bytes(), campaign.key().as_ref()],
        bump,
    )]
    pub holding_wallet: Box<Account<'info, TokenAccount>>,

    #[account(
        constraint = recipient.owner == creator.key() @ DonationError::Unauthorized,
        constraint = recipient.mint == donation_mint.key() @ DonationError::InvalidDonationMint,
    )]
    pub recipient: Box<Account<'info, TokenAccount>>,

    /// Required when `donation_mint` is not the default donation mint
    pub authorized_pool: Option<Box<Account<'info, AuthorizedPool>>>,
    pub pool_state: Option<AccountLoader<'info, PoolState>>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
    pub rent: Sysvar<'info, Rent>,
}

pub fn handle_create_campaign(
    ctx: Context<CreateCampaign>,
    amount_collecting: u64,
    content_reference: String,
    ending_timestamp: i64,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let protocol_config_key = ctx.accounts.protocol_config.key();
    let donation_mint = ctx.accounts.donation_mint.key();

    let quote = resolve_quote(
        &protocol_config_key,
        &ctx.accounts.protocol_config,
        &donation_mint,
        ctx.accounts.authorized_pool.as_deref(),
        ctx.accounts.pool_state.as_ref(),
    )?;
    let amount_collecting_default = plan_campaign(
        &ctx.accounts.protocol_config,
        &donation_mint,
        amount_collecting,
        &content_reference,
        ending_timestamp,
        now,
        quote.as_ref(),
    )?;

    ctx.accounts
        .creator_ledger
        .record_campaign_created(amount_collecting_default)?;

    let campaign_key = ctx.accounts.campaign.key();
    ctx.accounts.campaign.open(CampaignTerms {
        protocol_config: protocol_config_key,
        creator_ledger: ctx.accounts.creator_ledger.key(),
        donation_mint,
        recipient: ctx.accounts.recipient.key(),
        holding_wallet: ctx.accounts.holding_wallet.key(),
        price_pool: quote.map(|quote| quote.pool).unwrap_or_default(),
        amount_collecting,
        amount_collecting_default,
        ending_timestamp,
        content_reference,
        bump: ctx.bumps.campaign,
        holding_bump: ctx.bumps.holding_wallet_owner,
    });

    msg!(
        "Created campaign {} collecting {} of {} ({} in default mint) until {}",
        campaign_key,
        amount_collecting,
        donation_mint,
        amount_collecting_default,
        ending_timestamp
    );

    emit!(CampaignCreated {
        campaign: campaign_key,
        creator_ledger: ctx.accounts.creator_ledger.key(),
        donation_mint,
        amount_collecting,
        amount_collecting_default,
        ending_timestamp,
        timestamp: now,
    });

    Ok(())
}
