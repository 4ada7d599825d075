use anchor_lang::prelude::*;
use crate::constants::*;
use crate::error::*;
use crate::instructions::InitializeDistributorParams;

/// How ownership of a distributor changes hands
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OwnershipMode {
    /// `transfer_ownership` hands over immediately
    #[default]
    SingleStep,
    /// `commit_transfer_ownership` stages, `apply_transfer_ownership` finalizes
    TwoStep,
}

/**
 * Epoch distributor state account
 *
 * Meters a token supply out of the vault at an owner-controlled rate.
 * Time is split into fixed-length epochs; the rate can only change at a
 * rollover, and the distributor proxy can never draw more than the
 * linear accrual cap:
 *
 *   cap(now) = epoch_starting_distributed + rate * (now - start_epoch_time)
 *
 * Derivation: ["epoch_distributor", token_mint, creator]
 *
 * Lifecycle:
 * 1. Created by initialize_distributor with rate = 0 and the first rollover
 *    reachable INITIAL_DISTRIBUTION_DELAY seconds later
 * 2. Rolled over (permissionless) once per elapsed epoch
 * 3. Drawn down by the distributor proxy through distribute
 * 4. Never closed; the owner may drain the vault with emergency_withdraw
 *
 * Every method takes the current unix timestamp and the caller explicitly
 * and performs all checks before the first write, so a failed call leaves
 * the account untouched.
 */
#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct EpochDistributor {
    /// Bump seed for PDA derivation
    /// - Saved for vault signing during distribute and emergency_withdraw
    pub bump: u8,

    /// Account that created the distributor
    /// - Part of the PDA seeds, unaffected by ownership transfers
    pub creator: Pubkey,

    /// Privileged account
    /// - Sets the pending rate and the distributor proxy
    /// - Can withdraw vault funds at any time
    pub owner: Pubkey,

    /// Owner staged by commit_transfer_ownership
    /// - Pubkey::default() when nothing is staged
    pub future_owner: Pubkey,

    /// Ownership transfer protocol in force for this deployment
    pub ownership_mode: OwnershipMode,

    /// Sole account allowed to call distribute
    /// - Pubkey::default() until the owner designates one
    pub distributor_proxy: Pubkey,

    /// Token mint address
    pub token_mint: Pubkey,

    /// Token vault account address
    /// - Derived from: ["vault", distributor_key]
    pub token_vault: Pubkey,

    /// Length of an epoch in seconds
    pub epoch_duration: i64,

    /// Start of the current epoch (Unix timestamp)
    /// - Only ever advances by epoch_duration, through a rollover
    pub start_epoch_time: i64,

    /// Tokens released per second during the current epoch
    pub rate: u64,

    /// Rate committed at the next rollover
    pub pending_rate: u64,

    /// Value of `distributed` when the current epoch started
    pub epoch_starting_distributed: u64,

    /// Total amount distributed through the proxy, ever
    pub distributed: u64,

    /// Number of rollovers executed
    pub epoch_number: u64,
}

impl EpochDistributor {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<EpochDistributor>();

    pub fn initialize(
        &mut self,
        bump: u8,
        creator: Pubkey,
        token_mint: Pubkey,
        token_vault: Pubkey,
        params: &InitializeDistributorParams,
        now: i64,
    ) -> Result<()> {
        require!(
            params.epoch_duration > INITIAL_DISTRIBUTION_DELAY,
            EpochDistributorError::InvalidEpochDuration
        );
        require!(params.owner != Pubkey::default(), EpochDistributorError::InvalidOwner);

        let distributor_proxy = match params.distributor_proxy {
            Some(proxy) => {
                require!(
                    proxy != Pubkey::default(),
                    EpochDistributorError::InvalidDistributorProxy
                );
                proxy
            }
            None => Pubkey::default(),
        };

        // First rollover becomes possible exactly INITIAL_DISTRIBUTION_DELAY from now
        let start_epoch_time = now
            .checked_add(INITIAL_DISTRIBUTION_DELAY)
            .and_then(|t| t.checked_sub(params.epoch_duration))
            .ok_or(EpochDistributorError::ArithmeticOverflow)?;

        *self = Self {
            bump,
            creator,
            owner: params.owner,
            future_owner: Pubkey::default(),
            ownership_mode: params.ownership_mode,
            distributor_proxy,
            token_mint,
            token_vault,
            epoch_duration: params.epoch_duration,
            start_epoch_time,
            rate: 0,
            pending_rate: params.initial_rate,
            epoch_starting_distributed: 0,
            distributed: 0,
            epoch_number: 0,
        };

        Ok(())
    }

    /// PDA signer seeds for vault transfers
    pub fn signer_seeds(&self) -> [&[u8]; 4] {
        [
            DISTRIBUTOR_SEED.as_bytes(),
            self.token_mint.as_ref(),
            self.creator.as_ref(),
            std::slice::from_ref(&self.bump),
        ]
    }

    pub fn assert_owner(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.owner, EpochDistributorError::OnlyOwner);
        Ok(())
    }

    // ===== EPOCH ACCOUNTING =====

    /// Start of the current epoch, without rolling over
    pub fn start_epoch_time_read(&self) -> i64 {
        self.start_epoch_time
    }

    /// Timestamp at which the current epoch may be rolled over
    pub fn epoch_end(&self) -> Result<i64> {
        Ok(self
            .start_epoch_time
            .checked_add(self.epoch_duration)
            .ok_or(EpochDistributorError::ArithmeticOverflow)?)
    }

    pub fn epoch_ended(&self, now: i64) -> Result<bool> {
        Ok(now >= self.epoch_end()?)
    }

    /// Rolls over if the current epoch has ended and returns the (possibly new) start time.
    /// Calling it again within the same epoch is a no-op.
    pub fn start_epoch_time_write(&mut self, now: i64) -> Result<i64> {
        if self.epoch_ended(now)? {
            self.rollover()?;
        }
        Ok(self.start_epoch_time)
    }

    /// Rolls over into the next epoch, failing if the current one is still running
    pub fn update_distribution_parameters(&mut self, now: i64) -> Result<()> {
        require!(self.epoch_ended(now)?, EpochDistributorError::EpochStillRunning);
        self.rollover()
    }

    fn rollover(&mut self) -> Result<()> {
        let start_epoch_time = self.epoch_end()?;
        let epoch_number = self
            .epoch_number
            .checked_add(1)
            .ok_or(EpochDistributorError::ArithmeticOverflow)?;

        self.start_epoch_time = start_epoch_time;
        self.epoch_starting_distributed = self.distributed;
        self.rate = self.pending_rate;
        self.epoch_number = epoch_number;
        Ok(())
    }

    /// Accrual cap at `now`: the cumulative amount the proxy may have distributed.
    /// This is not the remaining amount; subtract `distributed` for that.
    pub fn available_to_distribute(&self, now: i64) -> Result<u64> {
        let elapsed = u64::try_from(now.saturating_sub(self.start_epoch_time)).unwrap_or(0);
        Ok(self
            .rate
            .checked_mul(elapsed)
            .and_then(|accrued| accrued.checked_add(self.epoch_starting_distributed))
            .ok_or(EpochDistributorError::ArithmeticOverflow)?)
    }

    // ===== OWNER SETTINGS =====

    pub fn set_pending_rate(&mut self, caller: &Pubkey, pending_rate: u64) -> Result<()> {
        self.assert_owner(caller)?;
        self.pending_rate = pending_rate;
        Ok(())
    }

    pub fn set_distributor_proxy(&mut self, caller: &Pubkey, distributor_proxy: Pubkey) -> Result<()> {
        self.assert_owner(caller)?;
        require!(
            distributor_proxy != Pubkey::default(),
            EpochDistributorError::InvalidDistributorProxy
        );
        self.distributor_proxy = distributor_proxy;
        Ok(())
    }

    // ===== DISTRIBUTION =====

    /// Records a draw of `amount` by the proxy and returns the new running total.
    /// The caller moves the tokens once this succeeds.
    pub fn distribute(
        &mut self,
        caller: &Pubkey,
        amount: u64,
        vault_balance: u64,
        now: i64,
    ) -> Result<u64> {
        require!(
            self.distributor_proxy != Pubkey::default() && *caller == self.distributor_proxy,
            EpochDistributorError::NotAuthorized
        );

        let distributed = self
            .distributed
            .checked_add(amount)
            .ok_or(EpochDistributorError::AmountTooHigh)?;
        require!(
            distributed <= self.available_to_distribute(now)?,
            EpochDistributorError::AmountTooHigh
        );
        require!(vault_balance >= amount, EpochDistributorError::InsufficientVaultBalance);

        self.distributed = distributed;
        Ok(distributed)
    }

    /// Owner escape hatch; ignores the accrual cap and leaves `distributed` alone
    pub fn check_emergency_withdraw(&self, caller: &Pubkey, amount: u64, vault_balance: u64) -> Result<()> {
        self.assert_owner(caller)?;
        require!(amount > 0, EpochDistributorError::InvalidAmount);
        require!(vault_balance >= amount, EpochDistributorError::InsufficientVaultBalance);
        Ok(())
    }

    // ===== OWNERSHIP =====

    /// Single-step handover; returns the previous owner
    pub fn transfer_ownership(&mut self, caller: &Pubkey, new_owner: Pubkey) -> Result<Pubkey> {
        self.assert_owner(caller)?;
        require!(
            self.ownership_mode == OwnershipMode::SingleStep,
            EpochDistributorError::WrongOwnershipMode
        );
        require!(new_owner != Pubkey::default(), EpochDistributorError::InvalidOwner);

        Ok(std::mem::replace(&mut self.owner, new_owner))
    }

    pub fn commit_transfer_ownership(&mut self, caller: &Pubkey, future_owner: Pubkey) -> Result<()> {
        self.assert_owner(caller)?;
        require!(
            self.ownership_mode == OwnershipMode::TwoStep,
            EpochDistributorError::WrongOwnershipMode
        );
        require!(future_owner != Pubkey::default(), EpochDistributorError::InvalidOwner);

        self.future_owner = future_owner;
        Ok(())
    }

    /// Finalizes a staged transfer; returns the previous owner
    pub fn apply_transfer_ownership(&mut self, caller: &Pubkey) -> Result<Pubkey> {
        self.assert_owner(caller)?;
        require!(
            self.ownership_mode == OwnershipMode::TwoStep,
            EpochDistributorError::WrongOwnershipMode
        );
        require!(
            self.future_owner != Pubkey::default(),
            EpochDistributorError::NoPendingOwner
        );

        let new_owner = std::mem::take(&mut self.future_owner);
        Ok(std::mem::replace(&mut self.owner, new_owner))
    }
}
