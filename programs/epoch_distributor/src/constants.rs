use anchor_lang::prelude::*;

/**
 * Program Constants
 *
 * Timing values and PDA seeds used by the epoch distributor.
 * Epoch length itself is chosen per deployment (see `InitializeDistributorParams`);
 * the profiles below are the durations observed in deployed variants.
 */

#[constant]
/// ===== TIMING CONSTANTS =====

/// Delay between deployment and the first possible rollover (1 day)
/// - start_epoch_time is initialised to now + INITIAL_DISTRIBUTION_DELAY - epoch_duration
pub const INITIAL_DISTRIBUTION_DELAY: i64 = 24 * 60 * 60;

/// Weekly epochs (7 days = 604,800 seconds)
pub const WEEK_EPOCH_DURATION: i64 = 7 * 24 * 60 * 60;

/// Fifteen day epochs (1,296,000 seconds)
pub const FIFTEEN_DAYS_EPOCH_DURATION: i64 = 15 * 24 * 60 * 60;

/// Six month epochs (26 weeks = 15,724,800 seconds)
pub const SIX_MONTHS_EPOCH_DURATION: i64 = 26 * WEEK_EPOCH_DURATION;

/// ===== PDA SEED CONSTANTS =====

/// Seed for distributor PDA derivation
/// - Used in: ["epoch_distributor", token_mint, creator]
/// - The creator is stored on the account so the PDA stays derivable after ownership changes
pub const DISTRIBUTOR_SEED: &str = "epoch_distributor";

/// Seed for token vault PDA derivation
/// - Used in: ["vault", distributor_key]
/// - The vault authority is the distributor PDA
pub const VAULT_SEED: &str = "vault";
