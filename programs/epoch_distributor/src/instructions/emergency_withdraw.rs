use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::transfer_token;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/**
 * Account context for the emergency withdrawal escape hatch
 *
 * Lets the owner move any amount out of the vault regardless of epoch
 * state. The accrual accounting (`distributed`) is not affected.
 *
 * Access Control: Owner only
 *
 * Used by two entry points:
 * - emergency_withdraw: recipient token account must belong to the owner
 * - emergency_withdraw_to: any recipient token account of the right mint
 */
#[event_cpi]
#[derive(Accounts)]
pub struct EmergencyWithdraw<'info> {
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

    #[account(
        mut,
        token::mint = token_mint,
        token::token_program = token_program,
    )]
    pub recipient_token_account: InterfaceAccount<'info, TokenAccount>,

    #[account(token::token_program = token_program)]
    pub token_mint: InterfaceAccount<'info, Mint>,

    pub owner: Signer<'info>,

    pub token_program: Interface<'info, TokenInterface>,
}

/// Withdraws to a token account owned by the owner
pub fn handle_emergency_withdraw(ctx: Context<EmergencyWithdraw>, amount: u64) -> Result<()> {
    require_keys_eq!(
        ctx.accounts.recipient_token_account.owner,
        ctx.accounts.owner.key(),
        EpochDistributorError::InvalidRecipient
    );
    withdraw_from_vault(ctx, amount)
}

/// Withdraws to an arbitrary token account
pub fn handle_emergency_withdraw_to(ctx: Context<EmergencyWithdraw>, amount: u64) -> Result<()> {
    withdraw_from_vault(ctx, amount)
}

fn withdraw_from_vault(ctx: Context<EmergencyWithdraw>, amount: u64) -> Result<()> {
    let distributor = &ctx.accounts.distributor;

    distributor.check_emergency_withdraw(
        ctx.accounts.owner.key,
        amount,
        ctx.accounts.token_vault.amount,
    )?;

    let seeds = distributor.signer_seeds();
    let signer = &[&seeds[..]];
    transfer_token(
        distributor.to_account_info(),
        ctx.accounts.token_vault.to_account_info(),
        ctx.accounts.recipient_token_account.to_account_info(),
        ctx.accounts.token_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        amount,
        ctx.accounts.token_mint.decimals,
        Some(signer),  // PDA signing for vault transfer
    )?;

    emit_cpi!(EmergencyWithdrawn {
        distributor: distributor.key(),
        recipient: ctx.accounts.recipient_token_account.key(),
        amount,
    });

    Ok(())
}
