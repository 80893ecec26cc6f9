//! Events emitted by the donation protocol.

use anchor_lang::prelude::*;

#[event]
pub struct ProtocolInitialized {
    pub protocol_config: Pubkey,
    pub authority: Pubkey,
    pub default_donation_mint: Pubkey,
    pub reward_mint: Pubkey,
    pub reward_treasury: Pubkey,
    pub min_amount_to_earn: u64,
    pub min_amount_to_collect: u64,
}

#[event]
pub struct PriceProgramAuthorized {
    pub protocol_config: Pubkey,
    pub program_id: Pubkey,
}

#[event]
pub struct PoolAuthorized {
    pub protocol_config: Pubkey,
    pub pool: Pubkey,
    pub program_id: Pubkey,
    pub token: Pubkey,
}

#[event]
pub struct CreatorRegistered {
    pub protocol_config: Pubkey,
    pub creator: Pubkey,
    pub creator_ledger: Pubkey,
}

#[event]
pub struct ContributorRegistered {
    pub protocol_config: Pubkey,
    pub contributor: Pubkey,
    pub contributor_ledger: Pubkey,
}

/// Emitted when a creator opens a new campaign.
#[event]
pub struct CampaignCreated {
    #[index]
    pub campaign: Pubkey,
    pub creator_ledger: Pubkey,
    pub donation_mint: Pubkey,
    pub amount_collecting: u64,
    pub amount_collecting_default: u64,
    pub ending_timestamp: i64,
    pub timestamp: i64,
}

/// Emitted for every accepted contribution, including the reward paid (possibly zero).
#[event]
pub struct ContributionReceived {
    #[index]
    pub campaign: Pubkey,
    pub contributor: Pubkey,
    pub amount: u64,
    pub usdc_equivalent: u64,
    pub reward: u64,
    pub timestamp: i64,
}

#[event]
pub struct CampaignClosed {
    #[index]
    pub campaign: Pubkey,
    pub recipient: Pubkey,
    pub amount_withdrawn: u64,
    pub amount_credited: u64,
    pub timestamp: i64,
}
