//! Contributor rewards paid from the protocol treasury.

use anchor_lang::prelude::*;

use crate::errors::DonationError;

/// Maps a contribution's default-token equivalent to a reward-token amount.
pub trait RewardSchedule {
    fn reward_for(&self, usdc_equivalent: u64) -> Result<u64>;
}

/// Linear reward: `usdc_equivalent * numerator / denominator`, truncated.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, InitSpace)]
pub struct RewardRate {
    pub numerator: u64,
    pub denominator: u64,
}

impl RewardRate {
    pub fn new(numerator: u64, denominator: u64) -> Result<Self> {
        require!(denominator > 0, DonationError::InvalidRewardRate);
        Ok(Self {
            numerator,
            denominator,
        })
    }
}

impl RewardSchedule for RewardRate {
    fn reward_for(&self, usdc_equivalent: u64) -> Result<u64> {
        require!(self.denominator > 0, DonationError::InvalidRewardRate);
        let reward = (usdc_equivalent as u128)
            .checked_mul(self.numerator as u128)
            .and_then(|scaled| scaled.checked_div(self.denominator as u128))
            .ok_or(DonationError::NumericOverflow)?;
        u64::try_from(reward).map_err(|_| error!(DonationError::NumericOverflow))
    }
}

/// Reward owed for one contribution. Zero when the contribution is under the
/// earning threshold or the treasury can not cover the full reward; the
/// contribution itself is accepted either way.
pub fn reward_for_contribution<S: RewardSchedule>(
    schedule: &S,
    usdc_equivalent: u64,
    min_amount_to_earn: u64,
    treasury_balance: u64,
) -> Result<u64> {
    if usdc_equivalent < min_amount_to_earn {
        return Ok(0);
    }
    let reward = schedule.reward_for(usdc_equivalent)?;
    if reward > treasury_balance {
        return Ok(0);
    }
    Ok(reward)
}
