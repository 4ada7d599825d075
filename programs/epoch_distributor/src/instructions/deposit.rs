use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::transfer_token;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/**
 * Account context for funding the vault
 *
 * Anyone may top up the vault; deposits do not touch the epoch accounting,
 * they only determine how much of the accrual cap can actually be paid out.
 */
#[event_cpi]
#[derive(Accounts)]
pub struct Deposit<'info> {
    #[account(
        has_one = token_vault @ EpochDistributorError::TokenVaultMismatch,
        has_one = token_mint @ EpochDistributorError::TokenMintMismatch,
    )]
    pub distributor: Account<'info, EpochDistributor>,

    /// Derived from: ["vault", distributor_key]
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), distributor.key().as_ref()],
        bump
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    #[account(token::token_program = token_program)]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// Source of the deposited tokens, owned by the depositor
    #[account(
        mut,
        token::mint = token_mint,
        token::authority = depositor,
        token::token_program = token_program,
    )]
    pub depositor_token_account: InterfaceAccount<'info, TokenAccount>,

    pub depositor: Signer<'info>,

    pub token_program: Interface<'info, TokenInterface>,
}

pub fn handle_deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
    require!(amount > 0, EpochDistributorError::InvalidAmount);

    transfer_token(
        ctx.accounts.depositor.to_account_info(),
        ctx.accounts.depositor_token_account.to_account_info(),
        ctx.accounts.token_vault.to_account_info(),
        ctx.accounts.token_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        amount,
        ctx.accounts.token_mint.decimals,
        None, // Depositor signs the transfer
    )?;

    emit_cpi!(TokensDeposited {
        distributor: ctx.accounts.distributor.key(),
        depositor: ctx.accounts.depositor.key(),
        amount,
    });

    Ok(())
}
