use soroban_sdk::testutils::{Address as _, Ledger};
use soroban_sdk::Address;

use super::setup_wallet;
use crate::{BackupOwner, TakeoverStatus, WalletError};

#[test]
fn test_set_backup_owner() {
    let (env, client, owner) = setup_wallet();
    let backup = Address::generate(&env);

    client.set_backup_owner(&owner, &backup, &3600);

    assert_eq!(
        client.get_backup_owner(),
        Some(BackupOwner {
            address: backup,
            delay: 3600,
        })
    );
}

#[test]
fn test_set_backup_owner_rejects_wallet_address() {
    let (_env, client, owner) = setup_wallet();

    assert_eq!(
        client.try_set_backup_owner(&owner, &client.address, &0),
        Err(Ok(WalletError::InvalidAddress))
    );
}

#[test]
fn test_set_backup_owner_owner_only() {
    let (env, client, _owner) = setup_wallet();
    let stranger = Address::generate(&env);
    let backup = Address::generate(&env);

    assert_eq!(
        client.try_set_backup_owner(&stranger, &backup, &0),
        Err(Ok(WalletError::Unauthorized))
    );
}

#[test]
fn test_timelocked_takeover() {
    let (env, client, owner) = setup_wallet();
    let backup = Address::generate(&env);
    let not_backup = Address::generate(&env);

    client.set_backup_owner(&owner, &backup, &3600);

    // Backup owner cannot skip a non-zero delay.
    assert_eq!(
        client.try_instant_takeover(&backup),
        Err(Ok(WalletError::TakeoverIsNotReady))
    );
    // Nothing requested yet.
    assert_eq!(
        client.try_confirm_takeover(&backup),
        Err(Ok(WalletError::InvalidTakeoverStatus))
    );
    assert_eq!(
        client.try_request_takeover(&not_backup),
        Err(Ok(WalletError::Unauthorized))
    );

    client.request_takeover(&backup);
    assert_eq!(client.get_takeover_request().status, TakeoverStatus::Pending);
    assert_eq!(
        client.try_confirm_takeover(&backup),
        Err(Ok(WalletError::TakeoverIsNotReady))
    );
    assert_eq!(
        client.try_request_takeover(&backup),
        Err(Ok(WalletError::InvalidTakeoverStatus))
    );

    env.ledger().with_mut(|li| li.timestamp += 3599);
    assert_eq!(
        client.try_confirm_takeover(&backup),
        Err(Ok(WalletError::TakeoverIsNotReady))
    );

    env.ledger().with_mut(|li| li.timestamp += 1);
    assert_eq!(client.get_takeover_request().status, TakeoverStatus::Ready);
    client.confirm_takeover(&backup);

    assert_eq!(client.get_owner(), backup);
    assert_eq!(client.get_backup_owner(), None);
    assert_eq!(client.get_takeover_request().status, TakeoverStatus::None);

    // The previous owner lost every owner right.
    let admin = Address::generate(&env);
    assert_eq!(
        client.try_add_admin(&owner, &admin),
        Err(Ok(WalletError::Unauthorized))
    );
}

#[test]
fn test_instant_takeover_by_backup_with_zero_delay() {
    let (env, client, owner) = setup_wallet();
    let backup = Address::generate(&env);

    client.set_backup_owner(&owner, &backup, &3600);
    env.ledger().with_mut(|li| li.timestamp += 3600);
    client.request_takeover(&backup);
    env.ledger().with_mut(|li| li.timestamp += 3600);
    client.confirm_takeover(&backup);
    assert_eq!(client.get_owner(), backup);

    // Hand back: the old owner becomes backup with no delay.
    client.set_backup_owner(&backup, &owner, &0);
    client.instant_takeover(&owner);

    assert_eq!(client.get_owner(), owner);
}

#[test]
fn test_instant_takeover_by_owner() {
    let (env, client, owner) = setup_wallet();
    let backup = Address::generate(&env);

    client.set_backup_owner(&owner, &backup, &86_400);
    client.instant_takeover(&owner);

    assert_eq!(client.get_owner(), backup);
}

#[test]
fn test_instant_takeover_needs_backup_owner() {
    let (env, client, owner) = setup_wallet();
    let stranger = Address::generate(&env);

    assert_eq!(
        client.try_instant_takeover(&owner),
        Err(Ok(WalletError::InvalidTakeoverStatus))
    );

    let backup = Address::generate(&env);
    client.set_backup_owner(&owner, &backup, &0);
    assert_eq!(
        client.try_instant_takeover(&stranger),
        Err(Ok(WalletError::Unauthorized))
    );
}

#[test]
fn test_request_takeover_without_backup_owner() {
    let (env, client, _owner) = setup_wallet();
    let caller = Address::generate(&env);

    assert_eq!(
        client.try_request_takeover(&caller),
        Err(Ok(WalletError::Unauthorized))
    );
}

#[test]
fn test_owner_cancels_takeover() {
    let (env, client, owner) = setup_wallet();
    let backup = Address::generate(&env);

    client.set_backup_owner(&owner, &backup, &3600);
    client.request_takeover(&backup);

    assert_eq!(
        client.try_cancel_takeover(&backup),
        Err(Ok(WalletError::Unauthorized))
    );
    client.cancel_takeover(&owner);
    assert_eq!(
        client.try_cancel_takeover(&owner),
        Err(Ok(WalletError::InvalidTakeoverStatus))
    );

    env.ledger().with_mut(|li| li.timestamp += 7200);
    assert_eq!(
        client.try_confirm_takeover(&backup),
        Err(Ok(WalletError::InvalidTakeoverStatus))
    );
    assert_eq!(client.get_owner(), owner);
}

#[test]
fn test_resetting_backup_owner_clears_request() {
    let (env, client, owner) = setup_wallet();
    let backup = Address::generate(&env);

    client.set_backup_owner(&owner, &backup, &3600);
    client.request_takeover(&backup);
    client.set_backup_owner(&owner, &backup, &3600);

    env.ledger().with_mut(|li| li.timestamp += 3600);
    assert_eq!(
        client.try_confirm_takeover(&backup),
        Err(Ok(WalletError::InvalidTakeoverStatus))
    );
}

#[test]
fn test_transfer_ownership() {
    let (env, client, owner) = setup_wallet();
    let new_owner = Address::generate(&env);

    assert_eq!(
        client.try_transfer_ownership(&owner, &owner),
        Err(Ok(WalletError::InvalidAddress))
    );
    assert_eq!(
        client.try_transfer_ownership(&owner, &client.address),
        Err(Ok(WalletError::InvalidAddress))
    );
    assert_eq!(
        client.try_transfer_ownership(&new_owner, &new_owner),
        Err(Ok(WalletError::Unauthorized))
    );

    client.transfer_ownership(&owner, &new_owner);
    assert_eq!(client.get_owner(), new_owner);
}

#[test]
fn test_transfer_ownership_clears_takeover_request() {
    let (env, client, owner) = setup_wallet();
    let backup = Address::generate(&env);
    let new_owner = Address::generate(&env);

    client.set_backup_owner(&owner, &backup, &3600);
    client.request_takeover(&backup);
    client.transfer_ownership(&owner, &new_owner);

    assert_eq!(client.get_takeover_request().status, TakeoverStatus::None);
    env.ledger().with_mut(|li| li.timestamp += 3600);
    assert_eq!(
        client.try_confirm_takeover(&backup),
        Err(Ok(WalletError::InvalidTakeoverStatus))
    );
    assert_eq!(client.get_owner(), new_owner);
}

#[test]
fn test_admins() {
    let (env, client, owner) = setup_wallet();
    let admin1 = Address::generate(&env);
    let admin2 = Address::generate(&env);

    client.add_admin(&owner, &admin1);
    assert_eq!(client.get_admins().get(0), Some(admin1.clone()));

    assert_eq!(
        client.try_add_admin(&admin1, &admin2),
        Err(Ok(WalletError::Unauthorized))
    );
    assert_eq!(
        client.try_add_admin(&owner, &admin1),
        Err(Ok(WalletError::AddressAlreadyExist))
    );

    assert!(!client.is_admin(&admin2));
    client.add_admin(&owner, &admin2);
    assert!(client.is_admin(&admin2));

    assert_eq!(
        client.try_remove_admin(&admin1, &admin2),
        Err(Ok(WalletError::Unauthorized))
    );

    client.remove_admin(&owner, &admin2);
    assert_eq!(client.get_admins().len(), 1);
    assert_eq!(
        client.try_remove_admin(&owner, &admin2),
        Err(Ok(WalletError::AddressNotExist))
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #2)")]
fn test_wallet_cannot_be_admin() {
    let (_env, client, owner) = setup_wallet();
    client.add_admin(&owner, &client.address);
}
