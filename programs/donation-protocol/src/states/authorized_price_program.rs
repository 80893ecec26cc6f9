use anchor_lang::prelude::*;

use crate::errors::DonationError;

use super::ProtocolConfig;

/// A CLMM program trusted as a price source. Seeds: `["authorized_clmm", config, program_id]`.
#[account]
#[derive(Default, InitSpace)]
pub struct AuthorizedPriceProgram {
    pub program_id: Pubkey,
    pub protocol_config: Pubkey,
    pub bump: u8,
}

impl AuthorizedPriceProgram {
    pub fn is_initialized(&self) -> bool {
        self.protocol_config != Pubkey::default()
    }

    /// Records `program_id` as trusted. Fails for anyone but the protocol authority
    /// and for a program that is already recorded.
    pub fn authorize(
        &mut self,
        protocol_config_key: Pubkey,
        protocol_config: &ProtocolConfig,
        signer: &Pubkey,
        program_id: Pubkey,
        bump: u8,
    ) -> Result<()> {
        protocol_config.assert_authority(signer)?;
        require!(!self.is_initialized(), DonationError::DuplicateRecord);

        self.program_id = program_id;
        self.protocol_config = protocol_config_key;
        self.bump = bump;

        Ok(())
    }
}
