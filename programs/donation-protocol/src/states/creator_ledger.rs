use anchor_lang::prelude::*;

use crate::errors::DonationError;

/// Running totals of one creator. Seeds: `["creator", config, creator]`.
///
/// Amounts are in default donation token units.
#[account]
#[derive(Default, InitSpace)]
pub struct CreatorLedger {
    pub protocol_config: Pubkey,
    pub creator: Pubkey,
    /// Paid out to the creator over all closed campaigns.
    pub total_amount_received: u64,
    /// Sum of the targets of campaigns that are still open.
    pub total_amount_collecting: u64,
    pub donations_created_count: u64,
    pub donations_closed_count: u64,
    pub bump: u8,
}

impl CreatorLedger {
    pub fn is_initialized(&self) -> bool {
        self.protocol_config != Pubkey::default()
    }

    pub fn register(&mut self, protocol_config: Pubkey, creator: Pubkey, bump: u8) -> Result<()> {
        require!(!self.is_initialized(), DonationError::DuplicateRecord);

        self.protocol_config = protocol_config;
        self.creator = creator;
        self.total_amount_received = 0;
        self.total_amount_collecting = 0;
        self.donations_created_count = 0;
        self.donations_closed_count = 0;
        self.bump = bump;

        Ok(())
    }

    pub fn record_campaign_created(&mut self, amount_collecting: u64) -> Result<()> {
        let total_amount_collecting = self
            .total_amount_collecting
            .checked_add(amount_collecting)
            .ok_or(DonationError::NumericOverflow)?;
        let donations_created_count = self
            .donations_created_count
            .checked_add(1)
            .ok_or(DonationError::NumericOverflow)?;

        self.total_amount_collecting = total_amount_collecting;
        self.donations_created_count = donations_created_count;

        Ok(())
    }

    /// Releases the campaign's target from the collecting total and credits what was paid out.
    pub fn record_campaign_closed(
        &mut self,
        amount_received: u64,
        amount_collecting: u64,
    ) -> Result<()> {
        require!(
            self.donations_closed_count < self.donations_created_count,
            DonationError::DonationClosed
        );
        let total_amount_received = self
            .total_amount_received
            .checked_add(amount_received)
            .ok_or(DonationError::NumericOverflow)?;
        let total_amount_collecting = self
            .total_amount_collecting
            .checked_sub(amount_collecting)
            .ok_or(DonationError::NumericOverflow)?;

        self.total_amount_received = total_amount_received;
        self.total_amount_collecting = total_amount_collecting;
        self.donations_closed_count += 1;

        Ok(())
    }
}
