use soroban_sdk::{contract, contractimpl, log, Address, Bytes, Env, Vec};

use crate::access::{self, Capability};
use crate::dispatch;
use crate::errors::WalletError;
use crate::ledger;
use crate::policy;
use crate::roles;
use crate::storage::{self, extend_instance_ttl, require_initialized};
use crate::types::{AnalyserRef, BackupOwner, DataKey, TakeoverRequest, TransactionRequest};
use crate::whitelist;

#[contract]
pub struct PolicyWallet;

#[contractimpl]
impl PolicyWallet {
    /// A template instance only serves as code for clones and can never be
    /// initialized.
    pub fn __constructor(env: Env, template: bool) {
        if template {
            env.storage().instance().set(&DataKey::Template, &true);
        }
    }

    pub fn initialize(env: Env, owner: Address) -> Result<(), WalletError> {
        if env.storage().instance().has(&DataKey::Template) {
            return Err(WalletError::InvalidOperation);
        }
        if env.storage().instance().has(&DataKey::Owner) {
            return Err(WalletError::InvalidOperation);
        }
        roles::require_distinct_principal(&env, &owner)?;

        roles::set_owner(&env, &owner);
        env.storage().instance().set(&DataKey::NextRequestId, &0u64);
        policy::create(&env);
        extend_instance_ttl(&env);

        log!(&env, "Wallet initialized for {}", owner);
        Ok(())
    }

    // Ownership

    pub fn get_owner(env: Env) -> Result<Address, WalletError> {
        roles::owner(&env)
    }

    pub fn transfer_ownership(
        env: Env,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), WalletError> {
        Self::authorize(&env, &caller, Capability::Configure)?;
        roles::transfer_ownership(&env, &new_owner)
    }

    pub fn set_backup_owner(
        env: Env,
        caller: Address,
        backup_owner: Address,
        delay: u64,
    ) -> Result<(), WalletError> {
        Self::authorize(&env, &caller, Capability::Configure)?;
        roles::set_backup_owner(&env, &backup_owner, delay)
    }

    pub fn get_backup_owner(env: Env) -> Option<BackupOwner> {
        roles::backup_owner(&env)
    }

    pub fn get_takeover_request(env: Env) -> TakeoverRequest {
        roles::takeover_request(&env)
    }

    pub fn request_takeover(env: Env, caller: Address) -> Result<(), WalletError> {
        Self::authenticate(&env, &caller)?;
        roles::request_takeover(&env, &caller)
    }

    pub fn confirm_takeover(env: Env, caller: Address) -> Result<(), WalletError> {
        Self::authenticate(&env, &caller)?;
        roles::confirm_takeover(&env, &caller)
    }

    /// Immediate handover: any time for the owner, and for the backup owner
    /// when no delay is configured.
    pub fn instant_takeover(env: Env, caller: Address) -> Result<(), WalletError> {
        Self::authenticate(&env, &caller)?;
        roles::instant_takeover(&env, &caller)
    }

    pub fn cancel_takeover(env: Env, caller: Address) -> Result<(), WalletError> {
        Self::authorize(&env, &caller, Capability::Configure)?;
        roles::cancel_takeover(&env)
    }

    // Admins

    pub fn add_admin(env: Env, caller: Address, admin: Address) -> Result<(), WalletError> {
        Self::authorize(&env, &caller, Capability::Configure)?;
        roles::add_admin(&env, &admin)
    }

    pub fn remove_admin(env: Env, caller: Address, admin: Address) -> Result<(), WalletError> {
        Self::authorize(&env, &caller, Capability::Configure)?;
        roles::remove_admin(&env, &admin)
    }

    pub fn get_admins(env: Env) -> Vec<Address> {
        roles::admins(&env)
    }

    pub fn is_admin(env: Env, address: Address) -> bool {
        roles::is_admin(&env, &address)
    }

    // Policy groups

    pub fn create_policy(env: Env, caller: Address) -> Result<u32, WalletError> {
        Self::authorize(&env, &caller, Capability::Configure)?;
        Ok(policy::create(&env))
    }

    pub fn remove_policy(env: Env, caller: Address, policy_id: u32) -> Result<(), WalletError> {
        Self::authorize(&env, &caller, Capability::Revoke)?;
        policy::deactivate(&env, policy_id)
    }

    pub fn is_active_policy(env: Env, policy_id: u32) -> bool {
        policy::is_active(&env, policy_id)
    }

    pub fn get_active_policy_ids(env: Env) -> Vec<u32> {
        policy::active_ids(&env)
    }

    pub fn get_next_policy_id(env: Env) -> u32 {
        storage::next_policy_id(&env)
    }

    pub fn add_trader(
        env: Env,
        caller: Address,
        policy_id: u32,
        trader: Address,
    ) -> Result<(), WalletError> {
        Self::authorize(&env, &caller, Capability::Configure)?;
        policy::add_trader(&env, policy_id, &trader)
    }

    pub fn remove_trader(
        env: Env,
        caller: Address,
        policy_id: u32,
        trader: Address,
    ) -> Result<(), WalletError> {
        Self::authorize(&env, &caller, Capability::Revoke)?;
        policy::remove_trader(&env, policy_id, &trader)
    }

    pub fn get_traders(env: Env, policy_id: u32) -> Vec<Address> {
        policy::traders(&env, policy_id)
    }

    pub fn is_trader(env: Env, policy_id: u32, address: Address) -> bool {
        policy::is_trader(&env, policy_id, &address)
    }

    // Whitelists

    pub fn update_whitelist(
        env: Env,
        caller: Address,
        policy_id: u32,
        destination: Address,
        analyser: AnalyserRef,
    ) -> Result<(), WalletError> {
        Self::authorize(&env, &caller, Capability::Configure)?;
        policy::get_active(&env, policy_id)?;
        whitelist::update(&env, policy_id, &destination, &analyser)
    }

    pub fn remove_whitelist(
        env: Env,
        caller: Address,
        policy_id: u32,
        destination: Address,
    ) -> Result<(), WalletError> {
        Self::authorize(&env, &caller, Capability::Revoke)?;
        policy::get_active(&env, policy_id)?;
        whitelist::remove(&env, policy_id, &destination)
    }

    pub fn is_policy_whitelist_address(env: Env, policy_id: u32, destination: Address) -> bool {
        whitelist::contains(&env, policy_id, &destination)
    }

    pub fn get_whitelist(env: Env, policy_id: u32) -> Vec<Address> {
        whitelist::destinations(&env, policy_id)
    }

    pub fn get_whitelist_analyser(
        env: Env,
        policy_id: u32,
        destination: Address,
    ) -> Option<AnalyserRef> {
        whitelist::analyser_of(&env, policy_id, &destination)
    }

    // Value transfers

    pub fn set_value_asset(env: Env, caller: Address, asset: Address) -> Result<(), WalletError> {
        Self::authorize(&env, &caller, Capability::Configure)?;
        roles::require_distinct_principal(&env, &asset)?;
        dispatch::set_value_asset(&env, &asset);
        Ok(())
    }

    pub fn get_value_asset(env: Env) -> Option<Address> {
        dispatch::value_asset(&env)
    }

    // Transaction requests

    pub fn request_transaction(
        env: Env,
        caller: Address,
        policy_id: u32,
        target: Address,
        value: i128,
        payload: Bytes,
    ) -> Result<u64, WalletError> {
        Self::enter(&env)?;
        ledger::request(&env, &caller, policy_id, &target, value, &payload)
    }

    pub fn execute_transaction_by_req_id(
        env: Env,
        caller: Address,
        policy_id: u32,
        use_global: bool,
        request_id: u64,
    ) -> Result<(), WalletError> {
        Self::enter(&env)?;
        ledger::execute(&env, &caller, policy_id, use_global, request_id)
    }

    pub fn reject_transaction_by_req_id(
        env: Env,
        caller: Address,
        policy_id: u32,
        use_global: bool,
        request_id: u64,
    ) -> Result<(), WalletError> {
        Self::enter(&env)?;
        ledger::reject(&env, &caller, policy_id, use_global, request_id)
    }

    pub fn cancel_transaction_by_req_id(
        env: Env,
        caller: Address,
        policy_id: u32,
        request_id: u64,
    ) -> Result<(), WalletError> {
        Self::enter(&env)?;
        ledger::cancel(&env, &caller, policy_id, request_id)
    }

    pub fn execute_transaction(
        env: Env,
        caller: Address,
        policy_id: u32,
        use_global: bool,
        target: Address,
        value: i128,
        payload: Bytes,
    ) -> Result<(), WalletError> {
        Self::enter(&env)?;
        ledger::execute_direct(&env, &caller, policy_id, use_global, &target, value, &payload)
    }

    pub fn get_next_transaction_request_id(env: Env) -> u64 {
        storage::next_request_id(&env)
    }

    pub fn get_transaction_request(
        env: Env,
        request_id: u64,
    ) -> Result<TransactionRequest, WalletError> {
        ledger::get(&env, request_id)
    }

    fn enter(env: &Env) -> Result<(), WalletError> {
        require_initialized(env)?;
        extend_instance_ttl(env);
        Ok(())
    }

    fn authenticate(env: &Env, caller: &Address) -> Result<(), WalletError> {
        Self::enter(env)?;
        caller.require_auth();
        Ok(())
    }

    fn authorize(env: &Env, caller: &Address, capability: Capability) -> Result<(), WalletError> {
        Self::enter(env)?;
        access::require(env, caller, capability)
    }
}
