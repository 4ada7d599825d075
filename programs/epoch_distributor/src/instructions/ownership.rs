use crate::event::*;
use crate::state::*;
use anchor_lang::prelude::*;

/**
 * Account context for ownership changes
 *
 * Which entry points are usable depends on distributor.ownership_mode:
 * - SingleStep: transfer_ownership
 * - TwoStep: commit_transfer_ownership, then apply_transfer_ownership
 *
 * Access Control: current owner only (both steps of the two-step flow)
 */
#[event_cpi]
#[derive(Accounts)]
pub struct TransferOwnership<'info> {
    #[account(mut)]
    pub distributor: Account<'info, EpochDistributor>,

    pub owner: Signer<'info>,
}

pub fn handle_transfer_ownership(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
    let distributor = &mut ctx.accounts.distributor;
    let previous_owner = distributor.transfer_ownership(ctx.accounts.owner.key, new_owner)?;

    emit_cpi!(OwnershipTransferred {
        distributor: distributor.key(),
        previous_owner,
        new_owner,
    });

    Ok(())
}

pub fn handle_commit_transfer_ownership(
    ctx: Context<TransferOwnership>,
    future_owner: Pubkey,
) -> Result<()> {
    let distributor = &mut ctx.accounts.distributor;
    distributor.commit_transfer_ownership(ctx.accounts.owner.key, future_owner)?;

    emit_cpi!(OwnershipTransferCommitted {
        distributor: distributor.key(),
        owner: distributor.owner,
        future_owner,
    });

    Ok(())
}

pub fn handle_apply_transfer_ownership(ctx: Context<TransferOwnership>) -> Result<()> {
    let distributor = &mut ctx.accounts.distributor;
    let previous_owner = distributor.apply_transfer_ownership(ctx.accounts.owner.key)?;

    emit_cpi!(OwnershipTransferred {
        distributor: distributor.key(),
        previous_owner,
        new_owner: distributor.owner,
    });

    Ok(())
}
