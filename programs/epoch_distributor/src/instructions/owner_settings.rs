use crate::event::*;
use crate::state::*;
use anchor_lang::prelude::*;

/**
 * Account context for owner-only configuration
 *
 * Used by set_pending_rate and set_distributor_proxy. The owner check is
 * performed by the distributor state against the signer's key.
 */
#[event_cpi]
#[derive(Accounts)]
pub struct OwnerSettings<'info> {
    #[account(mut)]
    pub distributor: Account<'info, EpochDistributor>,

    pub owner: Signer<'info>,
}

/**
 * Stages the rate for the next epoch
 *
 * The current rate is untouched until the next rollover.
 */
pub fn handle_set_pending_rate(ctx: Context<OwnerSettings>, pending_rate: u64) -> Result<()> {
    let distributor = &mut ctx.accounts.distributor;
    distributor.set_pending_rate(ctx.accounts.owner.key, pending_rate)?;

    emit_cpi!(PendingRateSet {
        distributor: distributor.key(),
        pending_rate,
    });

    Ok(())
}

pub fn handle_set_distributor_proxy(
    ctx: Context<OwnerSettings>,
    distributor_proxy: Pubkey,
) -> Result<()> {
    let distributor = &mut ctx.accounts.distributor;
    distributor.set_distributor_proxy(ctx.accounts.owner.key, distributor_proxy)?;

    emit_cpi!(DistributorProxySet {
        distributor: distributor.key(),
        distributor_proxy,
    });

    Ok(())
}
