use anchor_lang::prelude::*;
use anchor_spl::token::Mint;
use raydium_amm_v3::states::PoolState;

use crate::{
    constants::{AUTHORIZED_CLMM_POOL_PREFIX, AUTHORIZED_CLMM_PREFIX},
    events::PoolAuthorized,
    oracle::load_pool_quote,
    states::{AuthorizedPool, AuthorizedPriceProgram, ProtocolConfig, DISCRIMINATOR_LEN},
};

#[derive(Accounts)]
pub struct AuthorizePool<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    pub protocol_config: Account<'info, ProtocolConfig>,

    #[account(
        seeds = [
            AUTHORIZED_CLMM_PREFIX.as_bytes(),
            protocol_config.key().as_ref(),
            authorized_price_program.program_id.as_ref(),
        ],
        bump = authorized_price_program.bump,
    )]
    pub authorized_price_program: Account<'info, AuthorizedPriceProgram>,

    /// DEX pool state with the current price of `token_mint` against the default donation mint
    pub pool_state: AccountLoader<'info, PoolState>,

    pub token_mint: Box<Account<'info, Mint>>,

    #[account(
        init_if_needed,
        payer = authority,
        space = DISCRIMINATOR_LEN + AuthorizedPool::INIT_SPACE,
        seeds = [
            AUTHORIZED_CLMM_POOL_PREFIX.as_bytes(),
            protocol_config.key().as_ref(),
            pool_state.key().as_ref(),
        ],
        bump,
    )]
    pub authorized_pool: Account<'info, AuthorizedPool>,

    pub system_program: Program<'info, System>,
}

pub fn handle_authorize_pool(ctx: Context<AuthorizePool>) -> Result<()> {
    let protocol_config_key = ctx.accounts.protocol_config.key();
    let token = ctx.accounts.token_mint.key();
    let pool_owner = *ctx.accounts.pool_state.to_account_info().owner;
    let quote = load_pool_quote(&ctx.accounts.pool_state)?;

    ctx.accounts.authorized_pool.authorize(
        protocol_config_key,
        &ctx.accounts.protocol_config,
        &ctx.accounts.authority.key(),
        &ctx.accounts.authorized_price_program,
        &pool_owner,
        &quote,
        token,
        ctx.bumps.authorized_pool,
    )?;

    msg!("Authorized pool {} for mint {}", quote.pool, token);

    emit!(PoolAuthorized {
        protocol_config: protocol_config_key,
        pool: quote.pool,
        program_id: pool_owner,
        token,
    });

    Ok(())
}
