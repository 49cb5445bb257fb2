use soroban_sdk::{contractclient, log, token, Address, Bytes, Env};

use crate::errors::WalletError;
use crate::types::DataKey;

/// Entry point a contract exposes to receive calls carrying a payload.
#[contractclient(name = "CallTargetClient")]
pub trait CallTarget {
    fn on_call(env: Env, wallet: Address, value: i128, payload: Bytes);
}

pub(crate) fn value_asset(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::ValueAsset)
}

pub(crate) fn set_value_asset(env: &Env, asset: &Address) {
    env.storage().instance().set(&DataKey::ValueAsset, asset);
    log!(env, "Value asset set to {}", asset.clone());
}

/// Sends `value` of the value asset to `target`, then hands it `payload`.
/// An empty payload is a plain transfer.
pub(crate) fn dispatch(
    env: &Env,
    target: &Address,
    value: i128,
    payload: &Bytes,
) -> Result<(), WalletError> {
    let wallet = env.current_contract_address();

    if value > 0 {
        let asset = value_asset(env).ok_or(WalletError::ValueAssetNotSet)?;
        let token_client = token::Client::new(env, &asset);
        if !matches!(token_client.try_transfer(&wallet, target, &value), Ok(Ok(()))) {
            return Err(WalletError::DispatchFailed);
        }
    }

    if !payload.is_empty() {
        let client = CallTargetClient::new(env, target);
        if !matches!(client.try_on_call(&wallet, &value, payload), Ok(Ok(()))) {
            return Err(WalletError::DispatchFailed);
        }
    }

    log!(env, "Dispatched {} to {}", value, target.clone());
    Ok(())
}
