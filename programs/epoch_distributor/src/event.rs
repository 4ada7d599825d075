use anchor_lang::prelude::*;

use crate::state::OwnershipMode;

/// Event emitted when a new distributor is initialized
#[event]
pub struct DistributorInitialized {
    /// The distributor account public key
    pub distributor: Pubkey,
    /// Initial owner of the distributor
    pub owner: Pubkey,
    /// Token mint address
    pub token_mint: Pubkey,
    /// Token vault address
    pub token_vault: Pubkey,
    /// Configured epoch length in seconds
    pub epoch_duration: i64,
    /// Start time of the pre-distribution epoch
    pub start_epoch_time: i64,
    /// Rate committed at the first rollover
    pub initial_rate: u64,
    /// Ownership transfer protocol in force
    pub ownership_mode: OwnershipMode,
}

/// Event emitted when tokens are deposited into the vault
#[event]
pub struct TokensDeposited {
    pub distributor: Pubkey,
    pub depositor: Pubkey,
    pub amount: u64,
}

/// Event emitted on every rollover
#[event]
pub struct EpochRolledOver {
    /// The distributor account public key
    pub distributor: Pubkey,
    /// Number of rollovers executed so far
    pub epoch_number: u64,
    /// Start time of the new epoch
    pub start_epoch_time: i64,
    /// Rate in force for the new epoch
    pub rate: u64,
    /// Distributed snapshot taken at the rollover
    pub epoch_starting_distributed: u64,
}

/// Event emitted when the owner stages a new rate
#[event]
pub struct PendingRateSet {
    pub distributor: Pubkey,
    pub pending_rate: u64,
}

/// Event emitted when the owner designates the distributor proxy
#[event]
pub struct DistributorProxySet {
    pub distributor: Pubkey,
    pub distributor_proxy: Pubkey,
}

/// Event emitted when the proxy draws down the accrual cap
#[event]
pub struct TokensDistributed {
    /// The distributor account public key
    pub distributor: Pubkey,
    /// Token account credited
    pub recipient: Pubkey,
    /// Amount transferred in this transaction
    pub amount: u64,
    /// Running total distributed after this transaction
    pub distributed: u64,
}

/// Event emitted when the owner pulls funds out of the vault
#[event]
pub struct EmergencyWithdrawn {
    pub distributor: Pubkey,
    /// Token account credited
    pub recipient: Pubkey,
    pub amount: u64,
}

/// Event emitted when a two-step ownership transfer is staged
#[event]
pub struct OwnershipTransferCommitted {
    pub distributor: Pubkey,
    pub owner: Pubkey,
    pub future_owner: Pubkey,
}

/// Event emitted when ownership changes hands
#[event]
pub struct OwnershipTransferred {
    pub distributor: Pubkey,
    pub previous_owner: Pubkey,
    pub new_owner: Pubkey,
}
