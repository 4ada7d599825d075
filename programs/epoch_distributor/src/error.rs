use anchor_lang::prelude::*;

#[error_code]
pub enum EpochDistributorError {
    // Access control errors
    #[msg("Ownable: caller is not the owner")]
    OnlyOwner,
    #[msg("Only the distributor proxy can distribute")]
    NotAuthorized,
    #[msg("Invalid distributor proxy")]
    InvalidDistributorProxy,

    // Epoch timing errors
    #[msg("epoch still running")]
    EpochStillRunning,
    #[msg("Epoch duration must be longer than the initial distribution delay")]
    InvalidEpochDuration,

    // Amount validation errors
    #[msg("amount too high")]
    AmountTooHigh,
    #[msg("Invalid amount")]
    InvalidAmount,
    #[msg("Insufficient vault balance")]
    InsufficientVaultBalance,
    #[msg("Recipient token account must belong to the owner")]
    InvalidRecipient,

    // Ownership transfer errors
    #[msg("Ownable: new owner is the zero address")]
    InvalidOwner,
    #[msg("Ownership transfer mode does not allow this action")]
    WrongOwnershipMode,
    #[msg("No pending owner to apply")]
    NoPendingOwner,

    // System level errors
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
    #[msg("Token mint does not match distributor's token mint")]
    TokenMintMismatch,
    #[msg("Token vault does not match distributor's token vault")]
    TokenVaultMismatch,
}
