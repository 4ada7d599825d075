use anchor_lang::prelude::*;

use super::harness::*;
use crate::constants::*;
use crate::error::EpochDistributorError;
use crate::instructions::InitializeDistributorParams;

#[test]
fn test_start_epoch_time_write() {
    let mut deployment = Deployment::new();
    let creation_time = deployment.distributor.start_epoch_time_read();
    deployment.chain.sleep(WEEK);

    // the read-only accessor does not roll over
    assert_eq!(deployment.distributor.start_epoch_time_read(), creation_time);

    // the writing accessor does, and reports the new value
    assert_eq!(deployment.start_epoch_time_write().unwrap(), creation_time + WEEK);

    assert_eq!(deployment.distributor.start_epoch_time_read(), creation_time + WEEK);
}

#[test]
fn test_start_epoch_time_write_same_epoch() {
    let mut deployment = Deployment::new();
    let before = deployment.distributor.clone();

    let first = deployment.start_epoch_time_write().unwrap();
    let second = deployment.start_epoch_time_write().unwrap();

    assert_eq!(first, second);
    assert_eq!(deployment.distributor, before);
}

#[test]
fn test_start_epoch_time_write_is_idempotent_after_rollover() {
    let mut deployment = Deployment::new();
    deployment.chain.sleep(DAY + 1);

    let first = deployment.start_epoch_time_write().unwrap();
    let after_first = deployment.distributor.clone();
    let second = deployment.start_epoch_time_write().unwrap();

    assert_eq!(first, second);
    assert_eq!(deployment.distributor, after_first);
    assert_eq!(deployment.distributor.epoch_number, 1);
}

#[test]
fn test_start_epoch_time_write_matches_update_distribution_parameters() {
    let mut via_write = Deployment::new();
    via_write.chain.sleep(DAY + 1);
    let mut via_update = via_write.clone();

    via_write.start_epoch_time_write().unwrap();
    via_update.update_distribution_parameters().unwrap();

    assert_eq!(via_write.distributor, via_update.distributor);
}

#[test]
fn test_update_distribution_parameters() {
    let mut deployment = Deployment::new();
    let creation_time = deployment.distributor.start_epoch_time_read();
    let new_epoch = creation_time + WEEK - deployment.now();
    deployment.chain.sleep(new_epoch);

    deployment.update_distribution_parameters().unwrap();
    assert_eq!(deployment.distributor.start_epoch_time, creation_time + WEEK);
}

#[test]
fn test_update_distribution_parameters_same_epoch() {
    let mut deployment = Deployment::new();
    let creation_time = deployment.distributor.start_epoch_time_read();
    let new_epoch = creation_time + WEEK - deployment.now();
    deployment.chain.sleep(new_epoch - 3);

    let before = deployment.distributor.clone();
    assert_anchor_error(
        deployment.update_distribution_parameters(),
        EpochDistributorError::EpochStillRunning,
    );
    assert_eq!(deployment.distributor, before);
}

#[test]
fn test_update_distribution_parameters_advances_one_epoch_at_a_time() {
    let mut deployment = Deployment::new();
    let creation_time = deployment.distributor.start_epoch_time;
    deployment.chain.sleep(3 * WEEK);

    deployment.update_distribution_parameters().unwrap();
    assert_eq!(deployment.distributor.start_epoch_time, creation_time + WEEK);
    deployment.update_distribution_parameters().unwrap();
    deployment.update_distribution_parameters().unwrap();
    assert_eq!(deployment.distributor.start_epoch_time, creation_time + 3 * WEEK);
    assert_eq!(deployment.distributor.epoch_number, 3);

    // caught up: now - start < WEEK
    assert_anchor_error(
        deployment.update_distribution_parameters(),
        EpochDistributorError::EpochStillRunning,
    );
}

#[test]
fn test_set_distributor_proxy_only_owner() {
    let mut deployment = Deployment::new();
    let stranger = Pubkey::new_unique();

    assert_anchor_error(
        deployment
            .distributor
            .set_distributor_proxy(&stranger, Pubkey::new_unique()),
        EpochDistributorError::OnlyOwner,
    );
}

#[test]
fn test_set_distributor_proxy_rejects_default_key() {
    let mut deployment = Deployment::new();
    let owner = deployment.owner;

    assert_anchor_error(
        deployment
            .distributor
            .set_distributor_proxy(&owner, Pubkey::default()),
        EpochDistributorError::InvalidDistributorProxy,
    );
}

#[test]
fn test_set_distributor_proxy_is_repeatable() {
    let mut deployment = Deployment::new();
    let owner = deployment.owner;
    let (first, second) = (Pubkey::new_unique(), Pubkey::new_unique());

    deployment.distributor.set_distributor_proxy(&owner, first).unwrap();
    deployment.distributor.set_distributor_proxy(&owner, second).unwrap();

    assert_eq!(deployment.distributor.distributor_proxy, second);
}

#[test]
fn test_set_pending_rate_only_admin() {
    let mut deployment = Deployment::new();
    let stranger = Pubkey::new_unique();

    assert_anchor_error(
        deployment.distributor.set_pending_rate(&stranger, 1),
        EpochDistributorError::OnlyOwner,
    );
    assert_eq!(deployment.distributor.pending_rate, INITIAL_RATE);
}

#[test]
fn test_rate() {
    let mut deployment = Deployment::new();
    assert_eq!(deployment.distributor.rate, 0);

    deployment.chain.sleep(DAY + 1);
    deployment.update_distribution_parameters().unwrap();

    assert!(deployment.distributor.rate > 0);
}

#[test]
fn test_start_epoch_time() {
    let mut deployment = Deployment::new();
    let creation_time = deployment.distributor.start_epoch_time_read();
    assert_eq!(creation_time, deployment.deployed_at + DAY - WEEK);

    deployment.chain.sleep(DAY + 1);
    deployment.update_distribution_parameters().unwrap();

    assert_eq!(deployment.distributor.start_epoch_time_read(), creation_time + WEEK);
}

#[test]
fn test_first_rollover_reachable_after_initial_delay_for_every_profile() {
    for epoch_duration in [
        WEEK_EPOCH_DURATION,
        FIFTEEN_DAYS_EPOCH_DURATION,
        SIX_MONTHS_EPOCH_DURATION,
    ] {
        let mut deployment = Deployment::with_params(|params| InitializeDistributorParams {
            epoch_duration,
            ..params
        });

        deployment.chain.sleep(DAY - 1);
        assert_anchor_error(
            deployment.update_distribution_parameters(),
            EpochDistributorError::EpochStillRunning,
        );

        deployment.chain.sleep(1);
        deployment.update_distribution_parameters().unwrap();
        assert_eq!(deployment.distributor.start_epoch_time, deployment.deployed_at + DAY);
    }
}

#[test]
fn test_epoch_duration_must_exceed_initial_delay() {
    let result = Deployment::try_with_params(|params| InitializeDistributorParams {
        epoch_duration: DAY,
        ..params
    });
    assert_anchor_error(result.map(|_| ()), EpochDistributorError::InvalidEpochDuration);
}

#[test]
fn test_initialize_with_distributor_proxy() {
    let proxy = Pubkey::new_unique();
    let deployment = Deployment::with_params(|params| InitializeDistributorParams {
        distributor_proxy: Some(proxy),
        ..params
    });
    assert_eq!(deployment.distributor.distributor_proxy, proxy);

    let result = Deployment::try_with_params(|params| InitializeDistributorParams {
        distributor_proxy: Some(Pubkey::default()),
        ..params
    });
    assert_anchor_error(result.map(|_| ()), EpochDistributorError::InvalidDistributorProxy);
}

#[test]
fn test_available_to_distribute() {
    let mut deployment = Deployment::new();
    assert_eq!(deployment.available_to_distribute(), 0);

    deployment.chain.sleep(DAY + 1);
    deployment.update_distribution_parameters().unwrap();
    deployment.chain.mine(WEEK);

    assert!(deployment.available_to_distribute() > 0);
    assert_eq!(deployment.distributor.epoch_starting_distributed, 0);
}

#[test]
fn test_available_to_distribute_is_linear_in_elapsed_time() {
    let mut deployment = Deployment::new();
    deployment.chain.sleep(DAY);
    deployment.update_distribution_parameters().unwrap();

    // rollover happened exactly at the epoch start
    assert_eq!(deployment.available_to_distribute(), 0);

    deployment.chain.sleep(1_000);
    assert_eq!(deployment.available_to_distribute(), INITIAL_RATE * 1_000);

    deployment.chain.sleep(1_000);
    assert_eq!(deployment.available_to_distribute(), INITIAL_RATE * 2_000);
}

#[test]
fn test_available_to_distribute_keeps_accruing_without_rollover() {
    let mut deployment = Deployment::new();
    deployment.chain.sleep(DAY);
    deployment.update_distribution_parameters().unwrap();
    let start = deployment.distributor.start_epoch_time;

    deployment.chain.sleep(3 * WEEK);

    assert_eq!(deployment.distributor.start_epoch_time, start);
    assert_eq!(
        deployment.available_to_distribute(),
        INITIAL_RATE * (3 * WEEK) as u64
    );
}

#[test]
fn test_pending_rate() {
    let mut deployment = Deployment::new();
    let owner = deployment.owner;
    deployment.chain.sleep(DAY + 1);
    deployment.update_distribution_parameters().unwrap();
    deployment.distributor.set_pending_rate(&owner, 100).unwrap();

    // staged only
    assert_eq!(deployment.distributor.rate, INITIAL_RATE);

    deployment.chain.mine(WEEK);
    deployment.update_distribution_parameters().unwrap();
    assert_eq!(deployment.distributor.rate, 100);
}

#[test]
fn test_rate_to_zero() {
    let mut deployment = Deployment::new();
    let owner = deployment.owner;
    deployment.chain.sleep(DAY + 1);
    deployment.update_distribution_parameters().unwrap();
    deployment.distributor.set_pending_rate(&owner, 0).unwrap();

    assert!(deployment.distributor.rate > 0);

    deployment.chain.mine(WEEK);
    deployment.update_distribution_parameters().unwrap();
    assert_eq!(deployment.distributor.rate, 0);
}

#[test]
fn test_rate_unchanged_without_pending_rate() {
    let mut deployment = Deployment::new();
    deployment.chain.sleep(DAY + 1);
    deployment.update_distribution_parameters().unwrap();

    deployment.chain.mine(WEEK);
    deployment.update_distribution_parameters().unwrap();

    assert_eq!(deployment.distributor.rate, INITIAL_RATE);
    assert_eq!(deployment.distributor.epoch_number, 2);
}

#[test]
fn test_rollover_snapshots_distributed() {
    let mut deployment = Deployment::new().with_owner_as_proxy();
    let owner = deployment.owner;
    let recipient = Pubkey::new_unique();

    deployment.chain.sleep(WEEK / 2);
    let amount = deployment.available_to_distribute() - deployment.distributor.distributed;
    deployment.distribute(owner, recipient, amount).unwrap();

    deployment.chain.sleep(WEEK);
    deployment.update_distribution_parameters().unwrap();

    assert_eq!(deployment.distributor.epoch_starting_distributed, amount);
    assert_eq!(deployment.distributor.distributed, amount);
    assert_eq!(deployment.distributor.epoch_number, 2);
}
