//! Price oracle adapter over Raydium CLMM pools. Read only.
//!
//! Amounts are priced in base units straight through the pool's
//! `sqrt_price_x64`, which already folds in both mints' decimals. For a
//! USDC (6 decimals) / BONK (5 decimals) pool at 25_000 BONK per USDC,
//! 3_500_000_000 BONK base units (35_000 BONK) price to 1_400_000 USDC base
//! units (1.4 USDC). Mint decimals are never applied a second time.

use anchor_lang::prelude::*;
use raydium_amm_v3::states::PoolState;

use crate::{
    errors::DonationError,
    states::{AuthorizedPool, ProtocolConfig},
    utils::convert_to_default_amount,
};

/// Snapshot of a pool's pair and current price.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PoolQuote {
    pub pool: Pubkey,
    pub mint_0: Pubkey,
    pub mint_1: Pubkey,
    pub sqrt_price_x64: u128,
}

impl PoolQuote {
    pub fn from_pool_state(pool: Pubkey, state: &PoolState) -> Self {
        Self {
            pool,
            mint_0: state.token_mint_0,
            mint_1: state.token_mint_1,
            sqrt_price_x64: state.sqrt_price_x64,
        }
    }

    /// True if the pool trades exactly `default_mint` against `token`, in either order.
    pub fn quotes_pair(&self, default_mint: &Pubkey, token: &Pubkey) -> bool {
        (self.mint_0 == *default_mint && self.mint_1 == *token)
            || (self.mint_1 == *default_mint && self.mint_0 == *token)
    }

    /// Prices `amount` of `token` in `default_mint` units, truncating toward zero.
    pub fn to_default_amount(
        &self,
        amount: u64,
        default_mint: &Pubkey,
        token: &Pubkey,
    ) -> Result<u64> {
        require!(
            self.quotes_pair(default_mint, token),
            DonationError::PoolTokenMismatch
        );
        convert_to_default_amount(amount, self.sqrt_price_x64, self.mint_0 == *default_mint)
    }
}

pub fn load_pool_quote(pool_state: &AccountLoader<PoolState>) -> Result<PoolQuote> {
    let state = pool_state.load()?;
    Ok(PoolQuote::from_pool_state(pool_state.key(), &state))
}

/// Quote used to price a campaign token. `None` for the default donation mint,
/// which needs no price source; any other mint requires its authorized pool.
pub fn resolve_quote(
    protocol_config_key: &Pubkey,
    protocol_config: &ProtocolConfig,
    donation_mint: &Pubkey,
    authorized_pool: Option<&Account<AuthorizedPool>>,
    pool_state: Option<&AccountLoader<PoolState>>,
) -> Result<Option<PoolQuote>> {
    if protocol_config.is_default_mint(donation_mint) {
        return Ok(None);
    }

    let authorized_pool = authorized_pool.ok_or(DonationError::UnauthorizedPriceSource)?;
    let pool_state = pool_state.ok_or(DonationError::UnauthorizedPriceSource)?;

    authorized_pool.ensure_prices(protocol_config_key, &pool_state.key(), donation_mint)?;
    require_keys_eq!(
        *pool_state.to_account_info().owner,
        authorized_pool.program_id,
        DonationError::UnauthorizedPriceSource
    );

    let quote = load_pool_quote(pool_state)?;
    require!(
        quote.quotes_pair(&protocol_config.default_donation_mint, donation_mint),
        DonationError::PoolTokenMismatch
    );
    msg!(
        "Pool {} quotes {} / {} at sqrt price {}",
        quote.pool,
        quote.mint_0,
        quote.mint_1,
        quote.sqrt_price_x64
    );

    Ok(Some(quote))
}
