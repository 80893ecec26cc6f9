use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::{
    constants::{CREATOR_PREFIX, HOLDING_PREFIX},
    engine::plan_withdrawal,
    errors::DonationError,
    events::CampaignClosed,
    states::{Campaign, CreatorLedger, ProtocolConfig},
};

#[derive(Accounts)]
pub struct Withdraw<'info> {
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
    )]
    pub creator_ledger: Box<Account<'info, CreatorLedger>>,

    #[account(mut,
        constraint = campaign.creator_ledger == creator_ledger.key() @ DonationError::Unauthorized,
        constraint = campaign.protocol_config == protocol_config.key() @ DonationError::Unauthorized,
    )]
    pub campaign: Box<Account<'info, Campaign>>,

    #[account(
        seeds = [HOLDING_PREFIX.as_bytes(), campaign.key().as_ref()],
        bump = campaign.holding_bump,
    )]
    /// CHECK: pda account ["holding", campaign]
    pub holding_wallet_owner: UncheckedAccount<'info>,

    #[account(mut,
        address = campaign.holding_wallet @ DonationError::Unauthorized,
    )]
    pub holding_wallet: Box<Account<'info, TokenAccount>>,

    #[account(mut,
        address = campaign.recipient @ DonationError::Unauthorized,
    )]
    pub recipient: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
}

pub fn handle_withdraw(ctx: Context<Withdraw>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let plan = plan_withdrawal(
        &ctx.accounts.protocol_config,
        &ctx.accounts.campaign,
        now,
        ctx.accounts.holding_wallet.amount,
    )?;

    let amount_collecting_default = ctx.accounts.campaign.amount_collecting_default;
    ctx.accounts
        .creator_ledger
        .record_campaign_closed(plan.amount_credited, amount_collecting_default)?;
    Campaign::close(&mut ctx.accounts.campaign)?;

    let campaign_key = ctx.accounts.campaign.key();
    if plan.amount > 0 {
        let holding_bump = ctx.accounts.campaign.holding_bump;
        let seeds = &[
            HOLDING_PREFIX.as_bytes(),
            campaign_key.as_ref(),
            &[holding_bump],
        ];
        let signer = &[&seeds[..]];
        token::transfer(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.holding_wallet.to_account_info(),
                    to: ctx.accounts.recipient.to_account_info(),
                    authority: ctx.accounts.holding_wallet_owner.to_account_info(),
                },
                signer,
            ),
            plan.amount,
        )?;
    }

    msg!(
        "Closed campaign {}: withdrew {} to {}, credited {}",
        campaign_key,
        plan.amount,
        ctx.accounts.recipient.key(),
        plan.amount_credited
    );

    emit!(CampaignClosed {
        campaign: campaign_key,
        recipient: ctx.accounts.recipient.key(),
        amount_withdrawn: plan.amount,
        amount_credited: plan.amount_credited,
        timestamp: now,
    });

    Ok(())
}
