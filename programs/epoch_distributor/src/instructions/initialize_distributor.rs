use crate::constants::*;
use crate::event::*;
use crate::state::*;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/// Per-deployment configuration supplied at initialization
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct InitializeDistributorParams {
    /// Initial owner (may differ from the creator paying for the accounts)
    pub owner: Pubkey,
    /// Epoch length in seconds, must exceed INITIAL_DISTRIBUTION_DELAY
    pub epoch_duration: i64,
    /// Rate committed at the first rollover
    pub initial_rate: u64,
    /// Ownership transfer protocol for this deployment
    pub ownership_mode: OwnershipMode,
    /// Distributor proxy to designate up front, if already known
    pub distributor_proxy: Option<Pubkey>,
}

/**
 * Account context for initializing an epoch distributor
 *
 * - Creates the distributor PDA holding the epoch accounting state
 * - Creates the token vault PDA whose authority is the distributor
 * - Starts the pre-distribution epoch so that the first rollover is
 *   reachable INITIAL_DISTRIBUTION_DELAY seconds after deployment
 *
 * Funding is done separately through deposit (or a plain token transfer
 * into the vault).
 */
#[event_cpi]
#[derive(Accounts)]
pub struct InitializeDistributor<'info> {
    /// The distributor account (PDA)
    /// - Derived from: ["epoch_distributor", token_mint, creator]
    #[account(
        init,
        payer = creator,
        space = EpochDistributor::LEN,
        seeds = [
            DISTRIBUTOR_SEED.as_bytes(),
            token_mint.key().as_ref(),
            creator.key().as_ref(),
        ],
        bump
    )]
    pub distributor: Account<'info, EpochDistributor>,

    /// Token vault account (PDA) that holds the distributable supply
    /// - Derived from: ["vault", distributor_key]
    #[account(
        init,
        token::mint = token_mint,
        token::authority = distributor,
        token::token_program = token_program,
        seeds = [VAULT_SEED.as_bytes(), distributor.key().as_ref()],
        bump,
        payer = creator,
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// The token being emitted
    #[account(
        token::token_program = token_program,
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// Pays for account creation, fixed into the PDA seeds
    #[account(mut)]
    pub creator: Signer<'info>,

    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,

    pub rent: Sysvar<'info, Rent>,
}

pub fn handle_initialize_distributor(
    ctx: Context<InitializeDistributor>,
    params: InitializeDistributorParams,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let distributor = &mut ctx.accounts.distributor;

    distributor.initialize(
        ctx.bumps.distributor,
        ctx.accounts.creator.key(),
        ctx.accounts.token_mint.key(),
        ctx.accounts.token_vault.key(),
        &params,
        now,
    )?;

    emit_cpi!(DistributorInitialized {
        distributor: distributor.key(),
        owner: distributor.owner,
        token_mint: distributor.token_mint,
        token_vault: distributor.token_vault,
        epoch_duration: distributor.epoch_duration,
        start_epoch_time: distributor.start_epoch_time,
        initial_rate: distributor.pending_rate,
        ownership_mode: distributor.ownership_mode,
    });

    Ok(())
}
