use crate::event::*;
use crate::state::*;
use anchor_lang::prelude::*;

/**
 * Account context for read-only epoch queries
 *
 * Values are returned through program return data.
 */
#[derive(Accounts)]
pub struct ReadDistributor<'info> {
    pub distributor: Account<'info, EpochDistributor>,
}

/**
 * Account context for advancing the epoch
 *
 * Access Control: none. Rolling over only moves time-indexed accounting
 * forward and commits the rate the owner already staged; it never moves tokens.
 */
#[event_cpi]
#[derive(Accounts)]
pub struct AdvanceEpoch<'info> {
    #[account(mut)]
    pub distributor: Account<'info, EpochDistributor>,
}

pub fn handle_start_epoch_time(ctx: Context<ReadDistributor>) -> Result<i64> {
    Ok(ctx.accounts.distributor.start_epoch_time_read())
}

pub fn handle_available_to_distribute(ctx: Context<ReadDistributor>) -> Result<u64> {
    let now = Clock::get()?.unix_timestamp;
    ctx.accounts.distributor.available_to_distribute(now)
}

pub fn handle_start_epoch_time_write(ctx: Context<AdvanceEpoch>) -> Result<i64> {
    let now = Clock::get()?.unix_timestamp;
    let distributor = &mut ctx.accounts.distributor;

    let epoch_number = distributor.epoch_number;
    let start_epoch_time = distributor.start_epoch_time_write(now)?;

    if distributor.epoch_number != epoch_number {
        msg!(
            "epoch {} started at {}, rate {}",
            distributor.epoch_number,
            start_epoch_time,
            distributor.rate
        );
        emit_cpi!(EpochRolledOver {
            distributor: distributor.key(),
            epoch_number: distributor.epoch_number,
            start_epoch_time,
            rate: distributor.rate,
            epoch_starting_distributed: distributor.epoch_starting_distributed,
        });
    }

    Ok(start_epoch_time)
}

pub fn handle_update_distribution_parameters(ctx: Context<AdvanceEpoch>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let distributor = &mut ctx.accounts.distributor;

    distributor.update_distribution_parameters(now)?;

    msg!(
        "epoch {} started at {}, rate {}",
        distributor.epoch_number,
        distributor.start_epoch_time,
        distributor.rate
    );
    emit_cpi!(EpochRolledOver {
        distributor: distributor.key(),
        epoch_number: distributor.epoch_number,
        start_epoch_time: distributor.start_epoch_time,
        rate: distributor.rate,
        epoch_starting_distributed: distributor.epoch_starting_distributed,
    });

    Ok(())
}
