use anchor_lang::prelude::*;

use crate::{
    constants::CREATOR_PREFIX,
    events::CreatorRegistered,
    states::{CreatorLedger, ProtocolConfig, DISCRIMINATOR_LEN},
};

#[derive(Accounts)]
pub struct RegisterCreator<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    pub protocol_config: Account<'info, ProtocolConfig>,

    /// CHECK: identity the ledger is registered for
    pub creator: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = payer,
        space = DISCRIMINATOR_LEN + CreatorLedger::INIT_SPACE,
        seeds = [
            CREATOR_PREFIX.as_bytes(),
            protocol_config.key().as_ref(),
            creator.key().as_ref(),
        ],
        bump,
    )]
    pub creator_ledger: Account<'info, CreatorLedger>,

    pub system_program: Program<'info, System>,
}

pub fn handle_register_creator(ctx: Context<RegisterCreator>) -> Result<()> {
    let protocol_config = ctx.accounts.protocol_config.key();
    let creator = ctx.accounts.creator.key();
    let creator_ledger = &mut ctx.accounts.creator_ledger;

    creator_ledger.register(protocol_config, creator, ctx.bumps.creator_ledger)?;

    emit!(CreatorRegistered {
        protocol_config,
        creator,
        creator_ledger: creator_ledger.key(),
    });

    Ok(())
}
