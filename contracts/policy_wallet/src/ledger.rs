//! Deferred call requests and their settlement.
//!
//! A request is created `Pending` and leaves that state exactly once. The
//! group that settles a request does not have to be the group it was raised
//! under: the settling caller is checked against the group it names, and the
//! destination against that group's whitelist (or the global one).

use soroban_sdk::{log, Address, Bytes, Env};

use crate::access::{self, Capability};
use crate::dispatch;
use crate::errors::WalletError;
use crate::storage;
use crate::types::{DataKey, TransactionRequest, TransactionStatus};
use crate::whitelist;

pub(crate) fn get(env: &Env, request_id: u64) -> Result<TransactionRequest, WalletError> {
    storage::get_persistent(env, &DataKey::Request(request_id))
        .ok_or(WalletError::TransactionNotExist)
}

fn save(env: &Env, request: &TransactionRequest) {
    storage::set_persistent(env, &DataKey::Request(request.id), request);
}

fn get_pending(env: &Env, request_id: u64) -> Result<TransactionRequest, WalletError> {
    let request = get(env, request_id)?;
    if request.status != TransactionStatus::Pending {
        return Err(WalletError::InvalidTransactionStatus);
    }
    Ok(request)
}

fn require_value(value: i128) -> Result<(), WalletError> {
    if value < 0 {
        return Err(WalletError::InvalidValue);
    }
    Ok(())
}

/// Checks that `caller` trades for `policy_id` and that the chosen whitelist
/// approves the call.
fn authorize_settlement(
    env: &Env,
    caller: &Address,
    policy_id: u32,
    use_global: bool,
    target: &Address,
    value: i128,
    payload: &Bytes,
) -> Result<(), WalletError> {
    access::require(env, caller, Capability::Trade(policy_id))?;
    if !whitelist::is_whitelisted(env, policy_id, use_global, caller, target, value, payload) {
        return Err(WalletError::AddressNotInWhitelist);
    }
    Ok(())
}

pub(crate) fn request(
    env: &Env,
    caller: &Address,
    policy_id: u32,
    target: &Address,
    value: i128,
    payload: &Bytes,
) -> Result<u64, WalletError> {
    access::require(env, caller, Capability::Trade(policy_id))?;
    require_value(value)?;

    let request_id = storage::next_request_id(env);
    env.storage()
        .instance()
        .set(&DataKey::NextRequestId, &(request_id + 1));

    save(
        env,
        &TransactionRequest {
            id: request_id,
            requester: caller.clone(),
            policy_id,
            target: target.clone(),
            value,
            payload: payload.clone(),
            status: TransactionStatus::Pending,
            created_at: env.ledger().timestamp(),
        },
    );
    log!(env, "Request {} raised under policy {}", request_id, policy_id);
    Ok(request_id)
}

pub(crate) fn execute(
    env: &Env,
    caller: &Address,
    policy_id: u32,
    use_global: bool,
    request_id: u64,
) -> Result<(), WalletError> {
    let mut request = get_pending(env, request_id)?;
    authorize_settlement(
        env,
        caller,
        policy_id,
        use_global,
        &request.target,
        request.value,
        &request.payload,
    )?;

    // Completed only once the call went through.
    dispatch::dispatch(env, &request.target, request.value, &request.payload)?;

    request.status = TransactionStatus::Completed;
    save(env, &request);
    log!(env, "Request {} executed under policy {}", request_id, policy_id);
    Ok(())
}

pub(crate) fn reject(
    env: &Env,
    caller: &Address,
    policy_id: u32,
    use_global: bool,
    request_id: u64,
) -> Result<(), WalletError> {
    let mut request = get_pending(env, request_id)?;
    authorize_settlement(
        env,
        caller,
        policy_id,
        use_global,
        &request.target,
        request.value,
        &request.payload,
    )?;

    request.status = TransactionStatus::Rejected;
    save(env, &request);
    log!(env, "Request {} rejected under policy {}", request_id, policy_id);
    Ok(())
}

pub(crate) fn cancel(
    env: &Env,
    caller: &Address,
    policy_id: u32,
    request_id: u64,
) -> Result<(), WalletError> {
    caller.require_auth();

    let mut request = get_pending(env, request_id)?;
    if request.requester != *caller || request.policy_id != policy_id {
        return Err(WalletError::InvalidOperation);
    }

    request.status = TransactionStatus::Cancelled;
    save(env, &request);
    log!(env, "Request {} cancelled", request_id);
    Ok(())
}

/// Settles a call immediately without recording a request.
pub(crate) fn execute_direct(
    env: &Env,
    caller: &Address,
    policy_id: u32,
    use_global: bool,
    target: &Address,
    value: i128,
    payload: &Bytes,
) -> Result<(), WalletError> {
    require_value(value)?;
    authorize_settlement(env, caller, policy_id, use_global, target, value, payload)?;
    dispatch::dispatch(env, target, value, payload)?;
    log!(env, "Direct call to {} under policy {}", target.clone(), policy_id);
    Ok(())
}
