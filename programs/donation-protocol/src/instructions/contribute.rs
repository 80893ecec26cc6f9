use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};
use raydium_amm_v3::states::PoolState;

use crate::{
    constants::{CONTRIBUTOR_PREFIX, TREASURY_PREFIX},
    engine::plan_contribution,
    errors::DonationError,
    events::ContributionReceived,
    oracle::resolve_quote,
    states::{AuthorizedPool, Campaign, ContributorLedger, ProtocolConfig},
};

#[derive(Accounts)]
pub struct Contribute<'info> {
    #[account(mut)]
    pub contributor: Signer<'info>,

    pub protocol_config: Box<Account<'info, ProtocolConfig>>,

    #[account(mut,
        constraint = campaign.protocol_config == protocol_config.key() @ DonationError::Unauthorized,
    )]
    pub campaign: Box<Account<'info, Campaign>>,

    #[account(mut,
        seeds = [
            CONTRIBUTOR_PREFIX.as_bytes(),
            protocol_config.key().as_ref(),
            contributor.key().as_ref(),
        ],
        bump = contributor_ledger.bump,
    )]
    pub contributor_ledger: Box<Account<'info, ContributorLedger>>,

    #[account(mut,
        constraint = contributor_token_wallet.owner == contributor.key() @ DonationError::Unauthorized,
        constraint = contributor_token_wallet.mint == campaign.donation_mint @ DonationError::InvalidDonationMint,
    )]
    pub contributor_token_wallet: Box<Account<'info, TokenAccount>>,

    #[account(mut,
        address = campaign.holding_wallet @ DonationError::Unauthorized,
    )]
    pub holding_wallet: Box<Account<'info, TokenAccount>>,

    #[account(mut,
        constraint = contributor_reward_wallet.owner == contributor.key() @ DonationError::Unauthorized,
        constraint = contributor_reward_wallet.mint == protocol_config.reward_mint @ DonationError::InvalidDonationMint,
    )]
    pub contributor_reward_wallet: Box<Account<'info, TokenAccount>>,

    #[account(mut,
        address = protocol_config.reward_treasury @ DonationError::Unauthorized,
    )]
    pub reward_treasury: Box<Account<'info, TokenAccount>>,

    #[account(
        seeds = [TREASURY_PREFIX.as_bytes(), protocol_config.key().as_ref()],
        bump = protocol_config.treasury_owner_bump,
    )]
    /// CHECK: pda account ["treasury", protocol_config]
    pub treasury_owner: UncheckedAccount<'info>,

    /// Required when the campaign collects a token other than the default donation mint
    pub authorized_pool: Option<Box<Account<'info, AuthorizedPool>>>,
    #[account(address = campaign.price_pool @ DonationError::UnauthorizedPriceSource)]
    pub pool_state: Option<AccountLoader<'info, PoolState>>,

    pub token_program: Program<'info, Token>,
}

pub fn handle_contribute(ctx: Context<Contribute>, amount: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let protocol_config_key = ctx.accounts.protocol_config.key();

    let quote = resolve_quote(
        &protocol_config_key,
        &ctx.accounts.protocol_config,
        &ctx.accounts.campaign.donation_mint,
        ctx.accounts.authorized_pool.as_deref(),
        ctx.accounts.pool_state.as_ref(),
    )?;
    let plan = plan_contribution(
        &ctx.accounts.protocol_config,
        &ctx.accounts.campaign,
        amount,
        ctx.accounts.contributor_token_wallet.amount,
        ctx.accounts.reward_treasury.amount,
        quote.as_ref(),
    )?;

    ctx.accounts
        .campaign
        .accept_contribution(plan.amount, plan.usdc_equivalent)?;
    ctx.accounts
        .contributor_ledger
        .record_contribution(plan.usdc_equivalent, plan.reward)?;

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.contributor_token_wallet.to_account_info(),
                to: ctx.accounts.holding_wallet.to_account_info(),
                authority: ctx.accounts.contributor.to_account_info(),
            },
        ),
        plan.amount,
    )?;

    if plan.reward > 0 {
        let treasury_owner_bump = ctx.accounts.protocol_config.treasury_owner_bump;
        let seeds = &[
            TREASURY_PREFIX.as_bytes(),
            protocol_config_key.as_ref(),
            &[treasury_owner_bump],
        ];
        let signer = &[&seeds[..]];
        token::transfer(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.reward_treasury.to_account_info(),
                    to: ctx.accounts.contributor_reward_wallet.to_account_info(),
                    authority: ctx.accounts.treasury_owner.to_account_info(),
                },
                signer,
            ),
            plan.reward,
        )?;
    }

    let campaign_key = ctx.accounts.campaign.key();
    msg!(
        "Contribution of {} to {} worth {} in default mint, reward {}",
        plan.amount,
        campaign_key,
        plan.usdc_equivalent,
        plan.reward
    );

    emit!(ContributionReceived {
        campaign: campaign_key,
        contributor: ctx.accounts.contributor.key(),
        amount: plan.amount,
        usdc_equivalent: plan.usdc_equivalent,
        reward: plan.reward,
        timestamp: now,
    });

    Ok(())
}
