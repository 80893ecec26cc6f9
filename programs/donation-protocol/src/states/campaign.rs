use anchor_lang::prelude::*;

use crate::{constants::MAX_CONTENT_REFERENCE_LEN, errors::DonationError};

/// One fundraising campaign. Seeds: `["donation", creator_ledger, index]`.
///
/// Contributions sit in `holding_wallet`, a token account owned by the
/// `["holding", campaign]` PDA, until the creator withdraws them.
#[account]
#[derive(Default, Debug, InitSpace)]
pub struct Campaign {
    pub protocol_config: Pubkey,
    pub creator_ledger: Pubkey,
    pub donation_mint: Pubkey,
    pub recipient: Pubkey,
    pub holding_wallet: Pubkey,
    /// Pool that prices `donation_mint`, default for the default donation mint.
    pub price_pool: Pubkey,
    /// Target in `donation_mint` units.
    pub amount_collecting: u64,
    /// Target in default donation token units, as priced at creation.
    pub amount_collecting_default: u64,
    /// Accepted contributions in default donation token units.
    pub total_amount_received: u64,
    /// Accepted contributions in `donation_mint` units.
    pub total_tokens_received: u64,
    pub ending_timestamp: i64,
    pub is_closed: bool,
    pub bump: u8,
    pub holding_bump: u8,
    #[max_len(MAX_CONTENT_REFERENCE_LEN)]
    pub content_reference: String,
}

/// Everything fixed when a campaign is opened.
pub struct CampaignTerms {
    pub protocol_config: Pubkey,
    pub creator_ledger: Pubkey,
    pub donation_mint: Pubkey,
    pub recipient: Pubkey,
    pub holding_wallet: Pubkey,
    pub price_pool: Pubkey,
    pub amount_collecting: u64,
    pub amount_collecting_default: u64,
    pub ending_timestamp: i64,
    pub content_reference: String,
    pub bump: u8,
    pub holding_bump: u8,
}

impl Campaign {
    pub fn open(&mut self, terms: CampaignTerms) {
        self.protocol_config = terms.protocol_config;
        self.creator_ledger = terms.creator_ledger;
        self.donation_mint = terms.donation_mint;
        self.recipient = terms.recipient;
        self.holding_wallet = terms.holding_wallet;
        self.price_pool = terms.price_pool;
        self.amount_collecting = terms.amount_collecting;
        self.amount_collecting_default = terms.amount_collecting_default;
        self.total_amount_received = 0;
        self.total_tokens_received = 0;
        self.ending_timestamp = terms.ending_timestamp;
        self.is_closed = false;
        self.bump = terms.bump;
        self.holding_bump = terms.holding_bump;
        self.content_reference = terms.content_reference;
    }

    pub fn ensure_open(&self) -> Result<()> {
        require!(!self.is_closed, DonationError::DonationClosed);
        Ok(())
    }

    pub fn is_target_reached(&self) -> bool {
        self.total_tokens_received >= self.amount_collecting
    }

    pub fn has_ended(&self, now: i64) -> bool {
        now >= self.ending_timestamp
    }

    pub fn can_withdraw(&self, now: i64) -> bool {
        !self.is_closed && (self.is_target_reached() || self.has_ended(now))
    }

    pub fn accept_contribution(&mut self, amount: u64, usdc_equivalent: u64) -> Result<()> {
        self.ensure_open()?;
        let total_tokens_received = self
            .total_tokens_received
            .checked_add(amount)
            .ok_or(DonationError::NumericOverflow)?;
        let total_amount_received = self
            .total_amount_received
            .checked_add(usdc_equivalent)
            .ok_or(DonationError::NumericOverflow)?;

        self.total_tokens_received = total_tokens_received;
        self.total_amount_received = total_amount_received;

        Ok(())
    }

    pub fn close(&mut self) -> Result<()> {
        self.ensure_open()?;
        self.is_closed = true;
        Ok(())
    }
}
