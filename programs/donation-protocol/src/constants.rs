pub const TREASURY_PREFIX: &str = "treasury";
pub const REWARD_TREASURY_PREFIX: &str = "reward_treasury";
pub const CREATOR_PREFIX: &str = "creator";
pub const CONTRIBUTOR_PREFIX: &str = "contributor";
pub const DONATION_PREFIX: &str = "donation";
pub const HOLDING_PREFIX: &str = "holding";
pub const HOLDING_WALLET_PREFIX: &str = "holding_wallet";
pub const AUTHORIZED_CLMM_PREFIX: &str = "authorized_clmm";
pub const AUTHORIZED_CLMM_POOL_PREFIX: &str = "authorized_clmm_pool";

/// Upper bound for the content reference (an IPFS hash) stored on a campaign.
pub const MAX_CONTENT_REFERENCE_LEN: usize = 64;
