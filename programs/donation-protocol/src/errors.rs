use anchor_lang::prelude::*;

#[error_code]
pub enum DonationError {
    #[msg("Signer is not allowed to perform this action")]
    Unauthorized,
    #[msg("Invalid ending timestamp")]
    InvalidDeadline,
    #[msg("Donation ending requirements not met")]
    WithdrawalRequirementsNotMet,
    #[msg("Record already exists")]
    DuplicateRecord,
    #[msg("Insufficient funds")]
    InsufficientFunds,
    #[msg("Price source is not authorized")]
    UnauthorizedPriceSource,
    #[msg("Content reference too long")]
    InvalidReference,
    #[msg("Donation is closed")]
    DonationClosed,
    #[msg("Donation amount can not be zero")]
    DonationAmountZero,
    #[msg("Donation amount is below the protocol minimum")]
    DonationAmountTooLow,
    #[msg("Token account does not match the donation mint")]
    InvalidDonationMint,
    #[msg("Pool does not quote the donation mint against the default mint")]
    PoolTokenMismatch,
    #[msg("Pool price is zero")]
    InvalidPoolPrice,
    #[msg("Reward rate denominator can not be zero")]
    InvalidRewardRate,
    #[msg("Numeric overflow")]
    NumericOverflow,
}
