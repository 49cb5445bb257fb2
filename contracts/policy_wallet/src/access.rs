use soroban_sdk::{Address, Env};

use crate::errors::WalletError;
use crate::policy;
use crate::roles;

/// What an entry point asks of its caller.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Capability {
    /// Grants or reconfigures privilege: owner only.
    Configure,
    /// Withdraws privilege: owner or admin.
    Revoke,
    /// Acts for a policy group: trader of the group or a global trader.
    Trade(u32),
}

pub(crate) fn has_capability(env: &Env, caller: &Address, capability: Capability) -> bool {
    match capability {
        Capability::Configure => roles::is_owner(env, caller),
        Capability::Revoke => roles::is_owner(env, caller) || roles::is_admin(env, caller),
        Capability::Trade(policy_id) => policy::is_trader(env, policy_id, caller),
    }
}

/// Authenticates `caller` and checks it holds `capability`.
pub(crate) fn require(
    env: &Env,
    caller: &Address,
    capability: Capability,
) -> Result<(), WalletError> {
    caller.require_auth();
    if let Capability::Trade(policy_id) = capability {
        policy::get_active(env, policy_id)?;
    }
    if !has_capability(env, caller, capability) {
        return Err(WalletError::Unauthorized);
    }
    Ok(())
}
