use anchor_lang::prelude::*;

use crate::{
    constants::AUTHORIZED_CLMM_PREFIX,
    events::PriceProgramAuthorized,
    states::{AuthorizedPriceProgram, ProtocolConfig, DISCRIMINATOR_LEN},
};

#[derive(Accounts)]
#[instruction(program_id: Pubkey)]
pub struct AuthorizePriceProgram<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    pub protocol_config: Account<'info, ProtocolConfig>,

    #[account(
        init_if_needed,
        payer = authority,
        space = DISCRIMINATOR_LEN + AuthorizedPriceProgram::INIT_SPACE,
        seeds = [
            AUTHORIZED_CLMM_PREFIX.as_bytes(),
            protocol_config.key().as_ref(),
            program_id.as_ref(),
        ],
        bump,
    )]
    pub authorized_price_program: Account<'info, AuthorizedPriceProgram>,

    pub system_program: Program<'info, System>,
}

pub fn handle_authorize_price_program(
    ctx: Context<AuthorizePriceProgram>,
    program_id: Pubkey,
) -> Result<()> {
    let protocol_config_key = ctx.accounts.protocol_config.key();

    ctx.accounts.authorized_price_program.authorize(
        protocol_config_key,
        &ctx.accounts.protocol_config,
        &ctx.accounts.authority.key(),
        program_id,
        ctx.bumps.authorized_price_program,
    )?;

    msg!("Authorized price program {}", program_id);

    emit!(PriceProgramAuthorized {
        protocol_config: protocol_config_key,
        program_id,
    });

    Ok(())
}
