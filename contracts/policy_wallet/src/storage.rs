use soroban_sdk::{Env, IntoVal, TryFromVal, Val};

use crate::errors::WalletError;
use crate::types::DataKey;

// Ledgers are ~5s apart: thresholds of one day, bumps of thirty days.
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = 17_280;
pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 518_400;

pub(crate) const PERSISTENT_LIFETIME_THRESHOLD: u32 = 17_280;
pub(crate) const PERSISTENT_BUMP_AMOUNT: u32 = 518_400;

pub(crate) fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub(crate) fn require_initialized(env: &Env) -> Result<(), WalletError> {
    if !env.storage().instance().has(&DataKey::Owner) {
        return Err(WalletError::NotInitialized);
    }
    Ok(())
}

pub(crate) fn get_persistent<V>(env: &Env, key: &DataKey) -> Option<V>
where
    V: TryFromVal<Env, Val>,
{
    env.storage().persistent().get(key)
}

/// Reads a persistent entry and, when present, pushes its expiry out.
pub(crate) fn get_persistent_bumped<V>(env: &Env, key: &DataKey) -> Option<V>
where
    V: TryFromVal<Env, Val>,
{
    let value = get_persistent(env, key);
    if value.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
    }
    value
}

pub(crate) fn set_persistent<V>(env: &Env, key: &DataKey, value: &V)
where
    V: IntoVal<Env, Val>,
{
    env.storage().persistent().set(key, value);
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub(crate) fn next_policy_id(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::NextPolicyId)
        .unwrap_or(0u32)
}

pub(crate) fn next_request_id(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::NextRequestId)
        .unwrap_or(0u64)
}
