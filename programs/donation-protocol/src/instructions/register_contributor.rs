use anchor_lang::prelude::*;

use crate::{
    constants::CONTRIBUTOR_PREFIX,
    events::ContributorRegistered,
    states::{ContributorLedger, ProtocolConfig, DISCRIMINATOR_LEN},
};

#[derive(Accounts)]
pub struct RegisterContributor<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    pub protocol_config: Account<'info, ProtocolConfig>,

    /// CHECK: identity the ledger is registered for
    pub contributor: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = payer,
        space = DISCRIMINATOR_LEN + ContributorLedger::INIT_SPACE,
        seeds = [
            CONTRIBUTOR_PREFIX.as_bytes(),
            protocol_config.key().as_ref(),
            contributor.key().as_ref(),
        ],
        bump,
    )]
    pub contributor_ledger: Account<'info, ContributorLedger>,

    pub system_program: Program<'info, System>,
}

pub fn handle_register_contributor(ctx: Context<RegisterContributor>) -> Result<()> {
    let protocol_config = ctx.accounts.protocol_config.key();
    let contributor = ctx.accounts.contributor.key();
    let contributor_ledger = &mut ctx.accounts.contributor_ledger;

    contributor_ledger.register(protocol_config, contributor, ctx.bumps.contributor_ledger)?;

    emit!(ContributorRegistered {
        protocol_config,
        contributor,
        contributor_ledger: contributor_ledger.key(),
    });

    Ok(())
}
