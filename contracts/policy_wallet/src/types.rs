use soroban_sdk::{contracttype, Address, Bytes, Vec};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Template,
    Owner,
    BackupOwner,
    Takeover,
    Admins,
    ValueAsset,
    NextPolicyId,
    ActivePolicies,
    NextRequestId,
    Policy(u32),
    Whitelist(u32),
    Request(u64),
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BackupOwner {
    pub address: Address,
    /// Seconds that must pass between `request_takeover` and `confirm_takeover`.
    pub delay: u64,
}

#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum TakeoverStatus {
    None = 0,
    Pending = 1,
    Ready = 2,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TakeoverRequest {
    pub requested_at: u64,
    pub status: TakeoverStatus,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PolicyGroup {
    pub id: u32,
    pub active: bool,
    pub traders: Vec<Address>,
}

/// Validator attached to a whitelisted destination.
///
/// `None` and `Unset` both allow any call to the destination. They are kept
/// apart so an entry explicitly configured as open can be told from one that
/// was written before a validator was chosen.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AnalyserRef {
    None,
    Unset,
    Analyser(Address),
}

#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum TransactionStatus {
    Pending = 0,
    Cancelled = 1,
    Completed = 2,
    Rejected = 3,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransactionRequest {
    pub id: u64,
    pub requester: Address,
    pub policy_id: u32,
    pub target: Address,
    pub value: i128,
    pub payload: Bytes,
    pub status: TransactionStatus,
    pub created_at: u64,
}
