//! Owner, backup owner and admin bookkeeping.
//!
//! Everything here lives in instance storage. Callers are expected to have
//! authenticated the acting address already; these helpers only check and
//! mutate the role state.

use soroban_sdk::{log, Address, Env, Vec};

use crate::errors::WalletError;
use crate::types::{BackupOwner, DataKey, TakeoverRequest, TakeoverStatus};

pub(crate) fn owner(env: &Env) -> Result<Address, WalletError> {
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(WalletError::NotInitialized)
}

pub(crate) fn is_owner(env: &Env, address: &Address) -> bool {
    match owner(env) {
        Ok(owner) => owner == *address,
        Err(_) => false,
    }
}

pub(crate) fn is_admin(env: &Env, address: &Address) -> bool {
    admins(env).contains(address)
}

pub(crate) fn admins(env: &Env) -> Vec<Address> {
    env.storage()
        .instance()
        .get(&DataKey::Admins)
        .unwrap_or(Vec::new(env))
}

/// Rejects the wallet's own address where a separate principal is required.
pub(crate) fn require_distinct_principal(
    env: &Env,
    address: &Address,
) -> Result<(), WalletError> {
    if *address == env.current_contract_address() {
        return Err(WalletError::InvalidAddress);
    }
    Ok(())
}

pub(crate) fn set_owner(env: &Env, new_owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, new_owner);
}

pub(crate) fn transfer_ownership(env: &Env, new_owner: &Address) -> Result<(), WalletError> {
    require_distinct_principal(env, new_owner)?;
    if is_owner(env, new_owner) {
        return Err(WalletError::InvalidAddress);
    }

    set_owner(env, new_owner);
    env.storage().instance().remove(&DataKey::Takeover);
    log!(env, "Ownership transferred to {}", new_owner.clone());
    Ok(())
}

pub(crate) fn add_admin(env: &Env, admin: &Address) -> Result<(), WalletError> {
    require_distinct_principal(env, admin)?;

    let mut admins = admins(env);
    if admins.contains(admin) {
        return Err(WalletError::AddressAlreadyExist);
    }

    admins.push_back(admin.clone());
    env.storage().instance().set(&DataKey::Admins, &admins);
    log!(env, "Admin added: {}", admin.clone());
    Ok(())
}

pub(crate) fn remove_admin(env: &Env, admin: &Address) -> Result<(), WalletError> {
    let mut admins = admins(env);
    let index = admins
        .first_index_of(admin)
        .ok_or(WalletError::AddressNotExist)?;

    admins.remove(index);
    env.storage().instance().set(&DataKey::Admins, &admins);
    log!(env, "Admin removed: {}", admin.clone());
    Ok(())
}

pub(crate) fn backup_owner(env: &Env) -> Option<BackupOwner> {
    env.storage().instance().get(&DataKey::BackupOwner)
}

pub(crate) fn set_backup_owner(
    env: &Env,
    address: &Address,
    delay: u64,
) -> Result<(), WalletError> {
    require_distinct_principal(env, address)?;

    let backup = BackupOwner {
        address: address.clone(),
        delay,
    };
    env.storage().instance().set(&DataKey::BackupOwner, &backup);
    // A new successor never inherits the previous one's clock.
    env.storage().instance().remove(&DataKey::Takeover);
    log!(env, "Backup owner set to {} with delay {}", address.clone(), delay);
    Ok(())
}

fn stored_takeover(env: &Env) -> TakeoverRequest {
    env.storage()
        .instance()
        .get(&DataKey::Takeover)
        .unwrap_or(TakeoverRequest {
            requested_at: 0,
            status: TakeoverStatus::None,
        })
}

/// Takeover request as seen at the current ledger time. A pending request
/// whose delay has elapsed reads as `Ready`.
pub(crate) fn takeover_request(env: &Env) -> TakeoverRequest {
    let mut request = stored_takeover(env);
    if request.status == TakeoverStatus::Pending {
        if let Some(backup) = backup_owner(env) {
            if delay_elapsed(env, request.requested_at, backup.delay) {
                request.status = TakeoverStatus::Ready;
            }
        }
    }
    request
}

fn delay_elapsed(env: &Env, requested_at: u64, delay: u64) -> bool {
    env.ledger().timestamp() >= requested_at.saturating_add(delay)
}

fn require_backup_owner(env: &Env, caller: &Address) -> Result<BackupOwner, WalletError> {
    match backup_owner(env) {
        Some(backup) if backup.address == *caller => Ok(backup),
        _ => Err(WalletError::Unauthorized),
    }
}

pub(crate) fn request_takeover(env: &Env, caller: &Address) -> Result<(), WalletError> {
    require_backup_owner(env, caller)?;

    if stored_takeover(env).status != TakeoverStatus::None {
        return Err(WalletError::InvalidTakeoverStatus);
    }

    let request = TakeoverRequest {
        requested_at: env.ledger().timestamp(),
        status: TakeoverStatus::Pending,
    };
    env.storage().instance().set(&DataKey::Takeover, &request);
    log!(env, "Takeover requested at {}", request.requested_at);
    Ok(())
}

pub(crate) fn confirm_takeover(env: &Env, caller: &Address) -> Result<(), WalletError> {
    let backup = require_backup_owner(env, caller)?;

    let request = stored_takeover(env);
    if request.status != TakeoverStatus::Pending {
        return Err(WalletError::InvalidTakeoverStatus);
    }
    if !delay_elapsed(env, request.requested_at, backup.delay) {
        return Err(WalletError::TakeoverIsNotReady);
    }

    complete_takeover(env, &backup.address);
    Ok(())
}

pub(crate) fn instant_takeover(env: &Env, caller: &Address) -> Result<(), WalletError> {
    let backup = backup_owner(env).ok_or(WalletError::InvalidTakeoverStatus)?;

    if is_owner(env, caller) {
        complete_takeover(env, &backup.address);
        return Ok(());
    }

    if backup.address != *caller {
        return Err(WalletError::Unauthorized);
    }
    if backup.delay != 0 {
        return Err(WalletError::TakeoverIsNotReady);
    }

    complete_takeover(env, &backup.address);
    Ok(())
}

pub(crate) fn cancel_takeover(env: &Env) -> Result<(), WalletError> {
    if stored_takeover(env).status != TakeoverStatus::Pending {
        return Err(WalletError::InvalidTakeoverStatus);
    }
    env.storage().instance().remove(&DataKey::Takeover);
    log!(env, "Takeover cancelled");
    Ok(())
}

fn complete_takeover(env: &Env, new_owner: &Address) {
    set_owner(env, new_owner);
    env.storage().instance().remove(&DataKey::BackupOwner);
    env.storage().instance().remove(&DataKey::Takeover);
    log!(env, "Takeover completed, new owner {}", new_owner.clone());
}
