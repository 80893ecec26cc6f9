//! Deterministic addresses of every record the protocol owns.

use anchor_lang::prelude::*;

use crate::{
    constants::{
        AUTHORIZED_CLMM_POOL_PREFIX, AUTHORIZED_CLMM_PREFIX, CONTRIBUTOR_PREFIX, CREATOR_PREFIX,
        DONATION_PREFIX, HOLDING_PREFIX, HOLDING_WALLET_PREFIX, REWARD_TREASURY_PREFIX,
        TREASURY_PREFIX,
    },
    ID as DONATION_PROGRAM_ID,
};

pub fn find_treasury_owner_address(protocol_config: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[TREASURY_PREFIX.as_bytes(), protocol_config.as_ref()],
        &DONATION_PROGRAM_ID,
    )
}

pub fn find_reward_treasury_address(protocol_config: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[REWARD_TREASURY_PREFIX.as_bytes(), protocol_config.as_ref()],
        &DONATION_PROGRAM_ID,
    )
}

pub fn find_creator_ledger_address(protocol_config: &Pubkey, creator: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            CREATOR_PREFIX.as_bytes(),
            protocol_config.as_ref(),
            creator.as_ref(),
        ],
        &DONATION_PROGRAM_ID,
    )
}

pub fn find_contributor_ledger_address(
    protocol_config: &Pubkey,
    contributor: &Pubkey,
) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            CONTRIBUTOR_PREFIX.as_bytes(),
            protocol_config.as_ref(),
            contributor.as_ref(),
        ],
        &DONATION_PROGRAM_ID,
    )
}

/// A creator's n-th campaign, where n is the creator ledger's created count at creation time.
pub fn find_campaign_address(creator_ledger: &Pubkey, campaign_index: u64) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            DONATION_PREFIX.as_bytes(),
            creator_ledger.as_ref(),
            &campaign_index.to_le_bytes(),
        ],
        &DONATION_PROGRAM_ID,
    )
}

pub fn find_holding_owner_address(campaign: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[HOLDING_PREFIX.as_bytes(), campaign.as_ref()],
        &DONATION_PROGRAM_ID,
    )
}

pub fn find_holding_wallet_address(campaign: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[HOLDING_WALLET_PREFIX.as_bytes(), campaign.as_ref()],
        &DONATION_PROGRAM_ID,
    )
}

pub fn find_authorized_price_program_address(
    protocol_config: &Pubkey,
    program_id: &Pubkey,
) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            AUTHORIZED_CLMM_PREFIX.as_bytes(),
            protocol_config.as_ref(),
            program_id.as_ref(),
        ],
        &DONATION_PROGRAM_ID,
    )
}

pub fn find_authorized_pool_address(protocol_config: &Pubkey, pool: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            AUTHORIZED_CLMM_POOL_PREFIX.as_bytes(),
            protocol_config.as_ref(),
            pool.as_ref(),
        ],
        &DONATION_PROGRAM_ID,
    )
}
