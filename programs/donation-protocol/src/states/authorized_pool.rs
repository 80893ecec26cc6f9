use anchor_lang::prelude::*;

use crate::{errors::DonationError, oracle::PoolQuote};

use super::{AuthorizedPriceProgram, ProtocolConfig};

/// A pool trusted to price `token` against the default donation mint.
/// Seeds: `["authorized_clmm_pool", config, pool]`.
#[account]
#[derive(Default, InitSpace)]
pub struct AuthorizedPool {
    pub pool: Pubkey,
    pub program_id: Pubkey,
    pub token: Pubkey,
    pub protocol_config: Pubkey,
    pub bump: u8,
}

impl AuthorizedPool {
    pub fn is_initialized(&self) -> bool {
        self.protocol_config != Pubkey::default()
    }

    /// Records `quote.pool` as a price source for `token`. The pool must be owned by an
    /// authorized price program of this protocol and must trade `token` against the
    /// default donation mint.
    #[allow(clippy::too_many_arguments)]
    pub fn authorize(
        &mut self,
        protocol_config_key: Pubkey,
        protocol_config: &ProtocolConfig,
        signer: &Pubkey,
        price_program: &AuthorizedPriceProgram,
        pool_owner: &Pubkey,
        quote: &PoolQuote,
        token: Pubkey,
        bump: u8,
    ) -> Result<()> {
        protocol_config.assert_authority(signer)?;
        require!(!self.is_initialized(), DonationError::DuplicateRecord);

        require!(
            price_program.is_initialized()
                && price_program.protocol_config == protocol_config_key,
            DonationError::UnauthorizedPriceSource
        );
        require_keys_eq!(
            *pool_owner,
            price_program.program_id,
            DonationError::UnauthorizedPriceSource
        );
        require!(
            !protocol_config.is_default_mint(&token),
            DonationError::InvalidDonationMint
        );
        require!(
            quote.quotes_pair(&protocol_config.default_donation_mint, &token),
            DonationError::PoolTokenMismatch
        );

        self.pool = quote.pool;
        self.program_id = price_program.program_id;
        self.token = token;
        self.protocol_config = protocol_config_key;
        self.bump = bump;

        Ok(())
    }

    /// Checks this record authorizes `pool` to price `token` for `protocol_config`.
    pub fn ensure_prices(
        &self,
        protocol_config: &Pubkey,
        pool: &Pubkey,
        token: &Pubkey,
    ) -> Result<()> {
        require!(
            self.is_initialized()
                && self.protocol_config == *protocol_config
                && self.pool == *pool
                && self.token == *token,
            DonationError::UnauthorizedPriceSource
        );
        Ok(())
    }
}
