use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::{
    constants::{REWARD_TREASURY_PREFIX, TREASURY_PREFIX},
    events::ProtocolInitialized,
    reward::RewardRate,
    states::{ProtocolConfig, DISCRIMINATOR_LEN},
};

#[derive(Accounts)]
pub struct InitializeProtocol<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(init, payer = authority, space = DISCRIMINATOR_LEN + ProtocolConfig::INIT_SPACE)]
    pub protocol_config: Account<'info, ProtocolConfig>,

    pub default_donation_mint: Box<Account<'info, Mint>>,
    pub reward_mint: Box<Account<'info, Mint>>,

    #[account(
        seeds = [TREASURY_PREFIX.as_bytes(), protocol_config.key().as_ref()],
        bump,
    )]
    /// CHECK: pda account ["treasury", protocol_config], signs reward payouts
    pub treasury_owner: UncheckedAccount<'info>,

    #[account(
        init,
        payer = authority,
        token::mint = reward_mint,
        token::authority = treasury_owner,
        seeds = [REWARD_TREASURY_PREFIX.as_bytes(), protocol_config.key().as_ref()],
        bump,
    )]
    pub reward_treasury: Box<Account<'info, TokenAccount>>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
    pub rent: Sysvar<'info, Rent>,
}

pub fn handle_initialize_protocol(
    ctx: Context<InitializeProtocol>,
    min_amount_to_earn: u64,
    min_amount_to_collect: u64,
    reward_rate_numerator: u64,
    reward_rate_denominator: u64,
) -> Result<()> {
    let reward_rate = RewardRate::new(reward_rate_numerator, reward_rate_denominator)?;

    let protocol_config = &mut ctx.accounts.protocol_config;
    protocol_config.authority = ctx.accounts.authority.key();
    protocol_config.default_donation_mint = ctx.accounts.default_donation_mint.key();
    protocol_config.reward_mint = ctx.accounts.reward_mint.key();
    protocol_config.reward_treasury = ctx.accounts.reward_treasury.key();
    protocol_config.treasury_owner_bump = ctx.bumps.treasury_owner;
    protocol_config.min_amount_to_earn = min_amount_to_earn;
    protocol_config.min_amount_to_collect = min_amount_to_collect;
    protocol_config.reward_rate = reward_rate;

    msg!(
        "Initialized donation protocol {} (default mint {}, reward mint {})",
        protocol_config.key(),
        protocol_config.default_donation_mint,
        protocol_config.reward_mint
    );

    emit!(ProtocolInitialized {
        protocol_config: protocol_config.key(),
        authority: protocol_config.authority,
        default_donation_mint: protocol_config.default_donation_mint,
        reward_mint: protocol_config.reward_mint,
        reward_treasury: protocol_config.reward_treasury,
        min_amount_to_earn,
        min_amount_to_collect,
    });

    Ok(())
}
