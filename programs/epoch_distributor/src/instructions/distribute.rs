use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::transfer_token;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/**
 * Account context for distributing tokens
 *
 * The distributor proxy draws from the vault on behalf of whoever its own
 * allocation logic decides should be paid. The distributor does not know
 * about gauges or votes; it only bounds the cumulative amount by the
 * accrual cap and checks the caller is the designated proxy.
 *
 * Access Control: distributor proxy only
 */
#[event_cpi]
#[derive(Accounts)]
pub struct Distribute<'info> {
    #[account(
        mut,
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

    /// Token account credited with the distribution
    #[account(
        mut,
        token::mint = token_mint,
        token::token_program = token_program,
    )]
    pub recipient_token_account: InterfaceAccount<'info, TokenAccount>,

    #[account(token::token_program = token_program)]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// Must match distributor.distributor_proxy
    pub distributor_proxy: Signer<'info>,

    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Transfers `amount` from the vault to the recipient
 *
 * Validation Rules:
 * - Signer must be the distributor proxy
 * - distributed + amount must not exceed available_to_distribute()
 * - Vault must hold at least `amount`
 */
pub fn handle_distribute(ctx: Context<Distribute>, amount: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let vault_balance = ctx.accounts.token_vault.amount;

    // ===== EFFECTS PHASE =====
    let distributed = ctx.accounts.distributor.distribute(
        ctx.accounts.distributor_proxy.key,
        amount,
        vault_balance,
        now,
    )?;

    // ===== INTERACTIONS PHASE =====
    let distributor = &ctx.accounts.distributor;
    if amount > 0 {
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
    }

    emit_cpi!(TokensDistributed {
        distributor: distributor.key(),
        recipient: ctx.accounts.recipient_token_account.key(),
        amount,
        distributed,
    });

    Ok(())
}
