use anchor_lang::prelude::*;

use crate::errors::DonationError;

/// Running totals of one contributor. Seeds: `["contributor", config, contributor]`.
/// Every field only ever grows.
#[account]
#[derive(Default, InitSpace)]
pub struct ContributorLedger {
    pub protocol_config: Pubkey,
    pub contributor: Pubkey,
    /// Default donation token equivalent of everything donated.
    pub total_amount_donated: u64,
    /// Reward tokens received from the treasury.
    pub total_amount_earned: u64,
    pub donations_count: u64,
    pub bump: u8,
}

impl ContributorLedger {
    pub fn is_initialized(&self) -> bool {
        self.protocol_config != Pubkey::default()
    }

    pub fn register(
        &mut self,
        protocol_config: Pubkey,
        contributor: Pubkey,
        bump: u8,
    ) -> Result<()> {
        require!(!self.is_initialized(), DonationError::DuplicateRecord);

        self.protocol_config = protocol_config;
        self.contributor = contributor;
        self.total_amount_donated = 0;
        self.total_amount_earned = 0;
        self.donations_count = 0;
        self.bump = bump;

        Ok(())
    }

    pub fn record_contribution(&mut self, usdc_equivalent: u64, reward: u64) -> Result<()> {
        let total_amount_donated = self
            .total_amount_donated
            .checked_add(usdc_equivalent)
            .ok_or(DonationError::NumericOverflow)?;
        let total_amount_earned = self
            .total_amount_earned
            .checked_add(reward)
            .ok_or(DonationError::NumericOverflow)?;
        let donations_count = self
            .donations_count
            .checked_add(1)
            .ok_or(DonationError::NumericOverflow)?;

        self.total_amount_donated = total_amount_donated;
        self.total_amount_earned = total_amount_earned;
        self.donations_count = donations_count;

        Ok(())
    }
}
