#![no_std]

mod access;
mod dispatch;
mod errors;
mod ledger;
mod policy;
mod roles;
mod storage;
mod types;
mod wallet;
mod whitelist;

pub use dispatch::{CallTarget, CallTargetClient};
pub use errors::WalletError;
pub use types::{
    AnalyserRef, BackupOwner, PolicyGroup, TakeoverRequest, TakeoverStatus, TransactionRequest,
    TransactionStatus,
};
pub use wallet::{PolicyWallet, PolicyWalletClient};
pub use whitelist::{Analyser, AnalyserClient};

#[cfg(test)]
mod test;
