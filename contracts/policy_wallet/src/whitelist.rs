//! Per-group destination whitelists and the analyser seam.

use soroban_sdk::{contractclient, log, Address, Bytes, Env, Map, Vec};

use crate::errors::WalletError;
use crate::policy::GLOBAL_POLICY_ID;
use crate::storage;
use crate::types::{AnalyserRef, DataKey};

/// Interface an external validator exposes to the wallet.
#[contractclient(name = "AnalyserClient")]
pub trait Analyser {
    /// Capability check made when the analyser is attached to a whitelist.
    fn is_analyser(env: Env) -> bool;

    fn validate(env: Env, caller: Address, target: Address, value: i128, payload: Bytes) -> bool;
}

pub(crate) fn entries(env: &Env, policy_id: u32) -> Map<Address, AnalyserRef> {
    storage::get_persistent(env, &DataKey::Whitelist(policy_id)).unwrap_or(Map::new(env))
}

pub(crate) fn destinations(env: &Env, policy_id: u32) -> Vec<Address> {
    entries(env, policy_id).keys()
}

pub(crate) fn analyser_of(
    env: &Env,
    policy_id: u32,
    destination: &Address,
) -> Option<AnalyserRef> {
    entries(env, policy_id).get(destination.clone())
}

pub(crate) fn contains(env: &Env, policy_id: u32, destination: &Address) -> bool {
    entries(env, policy_id).contains_key(destination.clone())
}

pub(crate) fn update(
    env: &Env,
    policy_id: u32,
    destination: &Address,
    analyser: &AnalyserRef,
) -> Result<(), WalletError> {
    if let AnalyserRef::Analyser(contract) = analyser {
        require_analyser(env, contract)?;
    }

    let mut entries = entries(env, policy_id);
    entries.set(destination.clone(), analyser.clone());
    storage::set_persistent(env, &DataKey::Whitelist(policy_id), &entries);
    log!(env, "Whitelist of policy {} updated for {}", policy_id, destination.clone());
    Ok(())
}

pub(crate) fn remove(env: &Env, policy_id: u32, destination: &Address) -> Result<(), WalletError> {
    let mut entries = entries(env, policy_id);
    if entries.remove(destination.clone()).is_none() {
        return Err(WalletError::AddressNotExist);
    }

    storage::set_persistent(env, &DataKey::Whitelist(policy_id), &entries);
    log!(env, "Whitelist of policy {} dropped {}", policy_id, destination.clone());
    Ok(())
}

fn require_analyser(env: &Env, contract: &Address) -> Result<(), WalletError> {
    if *contract == env.current_contract_address() {
        return Err(WalletError::InvalidAddress);
    }

    let client = AnalyserClient::new(env, contract);
    match client.try_is_analyser() {
        Ok(Ok(true)) => Ok(()),
        _ => Err(WalletError::AddressIsNotAnalyser),
    }
}

/// Whether `caller` may send (`value`, `payload`) to `target` under the
/// whitelist of `policy_id`, or of the global group when `use_global` is set.
pub(crate) fn is_whitelisted(
    env: &Env,
    policy_id: u32,
    use_global: bool,
    caller: &Address,
    target: &Address,
    value: i128,
    payload: &Bytes,
) -> bool {
    let scope = if use_global { GLOBAL_POLICY_ID } else { policy_id };
    let entries: Map<Address, AnalyserRef> =
        storage::get_persistent_bumped(env, &DataKey::Whitelist(scope)).unwrap_or(Map::new(env));

    match entries.get(target.clone()) {
        None => false,
        Some(AnalyserRef::None) | Some(AnalyserRef::Unset) => true,
        Some(AnalyserRef::Analyser(contract)) => {
            let client = AnalyserClient::new(env, &contract);
            // A trapping analyser counts as a refusal.
            matches!(
                client.try_validate(caller, target, &value, payload),
                Ok(Ok(true))
            )
        }
    }
}
