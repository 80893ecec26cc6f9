use anchor_lang::prelude::*;

use crate::{errors::DonationError, reward::RewardRate};

/// Protocol-wide parameters. Written once by `initialize_protocol`.
#[account]
#[derive(Default, InitSpace)]
pub struct ProtocolConfig {
    /// Only key allowed to authorize price programs and pools.
    pub authority: Pubkey,
    /// Token every contribution is accounted in.
    pub default_donation_mint: Pubkey,
    pub reward_mint: Pubkey,
    /// Token account holding rewards, owned by the `["treasury", config]` PDA.
    pub reward_treasury: Pubkey,
    pub treasury_owner_bump: u8,
    pub min_amount_to_earn: u64,
    pub min_amount_to_collect: u64,
    pub reward_rate: RewardRate,
}

impl ProtocolConfig {
    pub fn assert_authority(&self, signer: &Pubkey) -> Result<()> {
        require_keys_eq!(self.authority, *signer, DonationError::Unauthorized);
        Ok(())
    }

    pub fn is_default_mint(&self, mint: &Pubkey) -> bool {
        self.default_donation_mint == *mint
    }
}
