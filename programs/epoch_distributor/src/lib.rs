use anchor_lang::prelude::*;

declare_id!("EE7rTfVSd1w8Rbt84SJLhobNwohEW9KRsSoMhTdGVJcd");

pub mod constants;
pub mod error;
pub mod event;
pub mod instructions;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test;

use instructions::*;

/**
 * Epoch Distributor Program
 *
 * Releases a token supply at an owner-controlled rate, in fixed-length epochs.
 * A single distributor proxy (typically a gauge controller front-end) draws
 * tokens out of the vault, bounded by the linear accrual cap
 *
 *   epoch_starting_distributed + rate * (now - start_epoch_time)
 *
 * Key Features:
 * - Permissionless epoch rollover; owner-only rate changes, effective at the next rollover
 * - Partial distributions within an epoch, as long as the cumulative total stays under the cap
 * - Configurable epoch length per deployment (weekly, fifteen days, six months)
 * - Single-step or two-step ownership transfer, chosen at initialization
 * - Owner emergency withdrawal that bypasses the accrual cap
 * - Cross-program call event emission for composability
 * - Support for both SPL Token and Token 2022
 *
 * Architecture:
 * - Distributor PDA: epoch accounting state
 * - Token Vault PDA: holds the supply being emitted
 *
 * Workflow:
 * 1. Creator initializes the distributor; anyone funds the vault
 * 2. After INITIAL_DISTRIBUTION_DELAY anyone rolls over into the first epoch
 * 3. Owner designates the distributor proxy and stages rate changes
 * 4. The proxy distributes accrued tokens to recipients
 */
#[program]
pub mod epoch_distributor {
    use super::*;

    /**
     * Creates a new epoch distributor and its token vault
     *
     * @param params - owner, epoch duration, initial rate, ownership mode and optional proxy
     *
     * Access Control: anyone (the signer pays and becomes part of the PDA seeds)
     */
    pub fn initialize_distributor(
        ctx: Context<InitializeDistributor>,
        params: InitializeDistributorParams,
    ) -> Result<()> {
        handle_initialize_distributor(ctx, params)
    }

    /**
     * Transfers tokens from the depositor into the vault
     *
     * Access Control: anyone
     */
    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        handle_deposit(ctx, amount)
    }

    /**
     * Returns the start of the current epoch without rolling over
     */
    pub fn start_epoch_time(ctx: Context<ReadDistributor>) -> Result<i64> {
        handle_start_epoch_time(ctx)
    }

    /**
     * Returns the start of the current epoch, rolling over first if it has ended
     *
     * Access Control: anyone
     * Note: repeated calls within the same epoch do not change state
     */
    pub fn start_epoch_time_write(ctx: Context<AdvanceEpoch>) -> Result<i64> {
        handle_start_epoch_time_write(ctx)
    }

    /**
     * Rolls over into the next epoch and commits the pending rate
     *
     * Access Control: anyone
     * Fails with EpochStillRunning if the current epoch has not ended
     */
    pub fn update_distribution_parameters(ctx: Context<AdvanceEpoch>) -> Result<()> {
        handle_update_distribution_parameters(ctx)
    }

    /**
     * Stages the rate for the next epoch
     *
     * Access Control: Owner only
     */
    pub fn set_pending_rate(ctx: Context<OwnerSettings>, pending_rate: u64) -> Result<()> {
        handle_set_pending_rate(ctx, pending_rate)
    }

    /**
     * Returns the accrual cap at the current time
     *
     * Note: this is the cumulative cap, not the remaining amount;
     * subtract `distributed` to get what can still be drawn
     */
    pub fn available_to_distribute(ctx: Context<ReadDistributor>) -> Result<u64> {
        handle_available_to_distribute(ctx)
    }

    /**
     * Transfers `amount` from the vault to the recipient token account
     *
     * Access Control: Distributor proxy only
     */
    pub fn distribute(ctx: Context<Distribute>, amount: u64) -> Result<()> {
        handle_distribute(ctx, amount)
    }

    /**
     * Designates the account allowed to call distribute
     *
     * Access Control: Owner only
     */
    pub fn set_distributor_proxy(
        ctx: Context<OwnerSettings>,
        distributor_proxy: Pubkey,
    ) -> Result<()> {
        handle_set_distributor_proxy(ctx, distributor_proxy)
    }

    /**
     * Withdraws `amount` from the vault to the owner's token account,
     * ignoring the accrual cap
     *
     * Access Control: Owner only
     */
    pub fn emergency_withdraw(ctx: Context<EmergencyWithdraw>, amount: u64) -> Result<()> {
        handle_emergency_withdraw(ctx, amount)
    }

    /**
     * Withdraws `amount` from the vault to any token account of the distributed mint
     *
     * Access Control: Owner only
     */
    pub fn emergency_withdraw_to(ctx: Context<EmergencyWithdraw>, amount: u64) -> Result<()> {
        handle_emergency_withdraw_to(ctx, amount)
    }

    /**
     * Hands ownership over immediately
     *
     * Access Control: Owner only, SingleStep distributors
     */
    pub fn transfer_ownership(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
        handle_transfer_ownership(ctx, new_owner)
    }

    /**
     * Stages a new owner
     *
     * Access Control: Owner only, TwoStep distributors
     */
    pub fn commit_transfer_ownership(
        ctx: Context<TransferOwnership>,
        future_owner: Pubkey,
    ) -> Result<()> {
        handle_commit_transfer_ownership(ctx, future_owner)
    }

    /**
     * Makes the staged owner the owner
     *
     * Access Control: Owner only, TwoStep distributors
     */
    pub fn apply_transfer_ownership(ctx: Context<TransferOwnership>) -> Result<()> {
        handle_apply_transfer_ownership(ctx)
    }
}
