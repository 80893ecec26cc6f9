//! Fixed point helpers for converting between a CLMM pool's two tokens.
//!
//! A pool quotes `sqrt_price_x64 = sqrt(token1 base units per token0 base unit) * 2^64`.
//! Because the quote is in base units it already carries the
//! `10^(decimals_1 - decimals_0)` factor, so converting base units through it
//! normalizes for both tokens' decimals without any further scaling.
//! All conversions truncate toward zero exactly once.

use anchor_lang::prelude::*;
use ethnum::U256;

use crate::errors::DonationError;

pub const Q64: u128 = (u64::MAX as u128) + 1; // 2^64

/// `sqrt_price_x64^2`, i.e. the token1-per-token0 price as a Q128.128 number.
pub fn price_x128(sqrt_price_x64: u128) -> Result<U256> {
    require!(sqrt_price_x64 > 0, DonationError::InvalidPoolPrice);
    let sqrt_price = U256::new(sqrt_price_x64);
    sqrt_price
        .checked_mul(sqrt_price)
        .ok_or_else(|| error!(DonationError::NumericOverflow))
}

fn to_u64(value: U256) -> Result<u64> {
    let (high, low) = value.into_words();
    if high != 0 || low > u64::MAX as u128 {
        return err!(DonationError::NumericOverflow);
    }
    Ok(low as u64)
}

/// Converts `amount` of the pool's non-default token into default-token base units.
pub fn convert_to_default_amount(
    amount: u64,
    sqrt_price_x64: u128,
    is_default_token_mint_0: bool,
) -> Result<u64> {
    let price = price_x128(sqrt_price_x64)?;

    if is_default_token_mint_0 {
        // default = amount / price
        let numerator = U256::from_words(amount as u128, 0);
        let converted = numerator
            .checked_div(price)
            .ok_or_else(|| error!(DonationError::InvalidPoolPrice))?;
        return to_u64(converted);
    }

    // default = amount * price
    let product = U256::new(amount as u128)
        .checked_mul(price)
        .ok_or_else(|| error!(DonationError::NumericOverflow))?;
    let (integer_part, _fraction) = product.into_words();
    to_u64(U256::new(integer_part))
}
