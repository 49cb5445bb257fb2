use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum WalletError {
    Unauthorized = 1,
    InvalidAddress = 2,
    AddressAlreadyExist = 3,
    AddressNotExist = 4,
    PolicyNotExist = 5,
    InvalidOperation = 6,
    InvalidTakeoverStatus = 7,
    TakeoverIsNotReady = 8,
    InvalidTransactionStatus = 9,
    AddressNotInWhitelist = 10,
    TransactionNotExist = 11,
    AddressIsNotAnalyser = 12,
    DispatchFailed = 13,
    ValueAssetNotSet = 14,
    InvalidValue = 15,
    NotInitialized = 16,
}
