//! Policy groups: trader sets addressed by a never-reused id.
//!
//! Group `0` is the global group. Its traders act as traders of every active
//! group, and it can never be deactivated.

use soroban_sdk::{log, Address, Env, Vec};

use crate::errors::WalletError;
use crate::roles;
use crate::storage;
use crate::types::{DataKey, PolicyGroup};

pub(crate) const GLOBAL_POLICY_ID: u32 = 0;

pub(crate) fn get(env: &Env, policy_id: u32) -> Option<PolicyGroup> {
    storage::get_persistent(env, &DataKey::Policy(policy_id))
}

/// Active group by id. The entry's TTL is extended on every hit, so groups
/// that keep authorizing calls do not expire.
pub(crate) fn get_active(env: &Env, policy_id: u32) -> Result<PolicyGroup, WalletError> {
    let group: Option<PolicyGroup> =
        storage::get_persistent_bumped(env, &DataKey::Policy(policy_id));
    match group {
        Some(group) if group.active => Ok(group),
        _ => Err(WalletError::PolicyNotExist),
    }
}

pub(crate) fn is_active(env: &Env, policy_id: u32) -> bool {
    active_ids(env).contains(policy_id)
}

pub(crate) fn active_ids(env: &Env) -> Vec<u32> {
    env.storage()
        .instance()
        .get(&DataKey::ActivePolicies)
        .unwrap_or(Vec::new(env))
}

fn set_active_ids(env: &Env, ids: &Vec<u32>) {
    env.storage().instance().set(&DataKey::ActivePolicies, ids);
}

fn save(env: &Env, group: &PolicyGroup) {
    storage::set_persistent(env, &DataKey::Policy(group.id), group);
}

/// Allocates the next id and stores an empty active group under it.
pub(crate) fn create(env: &Env) -> u32 {
    let policy_id = storage::next_policy_id(env);
    env.storage()
        .instance()
        .set(&DataKey::NextPolicyId, &(policy_id + 1));

    save(
        env,
        &PolicyGroup {
            id: policy_id,
            active: true,
            traders: Vec::new(env),
        },
    );
    let mut ids = active_ids(env);
    ids.push_back(policy_id);
    set_active_ids(env, &ids);
    log!(env, "Policy {} created", policy_id);
    policy_id
}

pub(crate) fn deactivate(env: &Env, policy_id: u32) -> Result<(), WalletError> {
    if policy_id == GLOBAL_POLICY_ID {
        return Err(WalletError::InvalidOperation);
    }

    let mut group = get_active(env, policy_id)?;
    group.active = false;
    save(env, &group);

    let mut ids = active_ids(env);
    if let Some(index) = ids.first_index_of(policy_id) {
        ids.remove(index);
    }
    set_active_ids(env, &ids);
    log!(env, "Policy {} deactivated", policy_id);
    Ok(())
}

pub(crate) fn traders(env: &Env, policy_id: u32) -> Vec<Address> {
    get(env, policy_id)
        .map(|group| group.traders)
        .unwrap_or(Vec::new(env))
}

pub(crate) fn add_trader(
    env: &Env,
    policy_id: u32,
    trader: &Address,
) -> Result<(), WalletError> {
    roles::require_distinct_principal(env, trader)?;

    let mut group = get_active(env, policy_id)?;
    if group.traders.contains(trader) {
        return Err(WalletError::AddressAlreadyExist);
    }

    group.traders.push_back(trader.clone());
    save(env, &group);
    log!(env, "Trader {} added to policy {}", trader.clone(), policy_id);
    Ok(())
}

pub(crate) fn remove_trader(
    env: &Env,
    policy_id: u32,
    trader: &Address,
) -> Result<(), WalletError> {
    let mut group = get_active(env, policy_id)?;
    let index = group
        .traders
        .first_index_of(trader)
        .ok_or(WalletError::AddressNotExist)?;

    group.traders.remove(index);
    save(env, &group);
    log!(env, "Trader {} removed from policy {}", trader.clone(), policy_id);
    Ok(())
}

/// Membership in `policy_id` with the global override. Inactive or unknown
/// groups have no traders.
pub(crate) fn is_trader(env: &Env, policy_id: u32, address: &Address) -> bool {
    let group = match get_active(env, policy_id) {
        Ok(group) => group,
        Err(_) => return false,
    };
    if group.traders.contains(address) {
        return true;
    }

    policy_id != GLOBAL_POLICY_ID
        && get_active(env, GLOBAL_POLICY_ID)
            .map(|global| global.traders.contains(address))
            .unwrap_or(false)
}
