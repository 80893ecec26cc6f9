//! Campaign state machine: `Open` until a single withdrawal moves it to `Closed`.
//!
//! Each planner validates an operation against the current records and
//! computes every amount it will move, so a handler can fail before it
//! transfers tokens or writes a record.

use anchor_lang::prelude::*;

use crate::{
    constants::MAX_CONTENT_REFERENCE_LEN,
    errors::DonationError,
    oracle::PoolQuote,
    reward::reward_for_contribution,
    states::{Campaign, ProtocolConfig},
};

/// Default donation token equivalent of `amount` of `donation_mint`.
pub fn default_equivalent(
    protocol_config: &ProtocolConfig,
    donation_mint: &Pubkey,
    amount: u64,
    quote: Option<&PoolQuote>,
) -> Result<u64> {
    if protocol_config.is_default_mint(donation_mint) {
        return Ok(amount);
    }
    let quote = quote.ok_or(DonationError::UnauthorizedPriceSource)?;
    quote.to_default_amount(amount, &protocol_config.default_donation_mint, donation_mint)
}

/// Validates the terms of a new campaign and returns its target in default token units.
pub fn plan_campaign(
    protocol_config: &ProtocolConfig,
    donation_mint: &Pubkey,
    amount_collecting: u64,
    content_reference: &str,
    ending_timestamp: i64,
    now: i64,
    quote: Option<&PoolQuote>,
) -> Result<u64> {
    require!(ending_timestamp > now, DonationError::InvalidDeadline);
    require!(
        content_reference.len() <= MAX_CONTENT_REFERENCE_LEN,
        DonationError::InvalidReference
    );
    require!(amount_collecting > 0, DonationError::DonationAmountZero);

    let amount_collecting_default =
        default_equivalent(protocol_config, donation_mint, amount_collecting, quote)?;
    require!(
        amount_collecting_default >= protocol_config.min_amount_to_collect,
        DonationError::DonationAmountTooLow
    );

    Ok(amount_collecting_default)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContributionPlan {
    pub amount: u64,
    pub usdc_equivalent: u64,
    /// Reward tokens owed from the treasury, zero when the reward is skipped.
    pub reward: u64,
}

pub fn plan_contribution(
    protocol_config: &ProtocolConfig,
    campaign: &Campaign,
    amount: u64,
    contributor_balance: u64,
    treasury_balance: u64,
    quote: Option<&PoolQuote>,
) -> Result<ContributionPlan> {
    campaign.ensure_open()?;
    require!(amount > 0, DonationError::DonationAmountZero);
    require!(
        contributor_balance >= amount,
        DonationError::InsufficientFunds
    );
    if let Some(quote) = quote {
        require_keys_eq!(
            quote.pool,
            campaign.price_pool,
            DonationError::UnauthorizedPriceSource
        );
    }

    let usdc_equivalent =
        default_equivalent(protocol_config, &campaign.donation_mint, amount, quote)?;
    let reward = reward_for_contribution(
        &protocol_config.reward_rate,
        usdc_equivalent,
        protocol_config.min_amount_to_earn,
        treasury_balance,
    )?;

    Ok(ContributionPlan {
        amount,
        usdc_equivalent,
        reward,
    })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WithdrawalPlan {
    /// Escrow balance moved to the recipient.
    pub amount: u64,
    /// Default token units credited to the creator ledger.
    pub amount_credited: u64,
}

pub fn plan_withdrawal(
    protocol_config: &ProtocolConfig,
    campaign: &Campaign,
    now: i64,
    holding_balance: u64,
) -> Result<WithdrawalPlan> {
    campaign.ensure_open()?;
    require!(
        campaign.can_withdraw(now),
        DonationError::WithdrawalRequirementsNotMet
    );

    let amount_credited = if protocol_config.is_default_mint(&campaign.donation_mint) {
        holding_balance
    } else {
        campaign.total_amount_received
    };

    Ok(WithdrawalPlan {
        amount: holding_balance,
        amount_credited,
    })
}
