use soroban_sdk::contracterror;

/// Every failure aborts the whole operation; the host rolls back all
/// storage writes and token movements made before the error.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum LenderError {
    /// Requested asset is not the pool's asset
    UnsupportedAsset = 1,
    /// A guarded operation is already in flight
    Locked = 2,
    /// Loan larger than the tracked pool balance
    AmountExceedsPool = 3,
    /// Asset or fee token transfer failed
    TransferFailed = 4,
    /// Receiver callback aborted
    CallbackFailed = 5,
    /// Pool balance below its pre-loan level after the callback
    NotRepaid = 6,
    /// Caller is not the owner
    Unauthorized = 7,
    /// Withdraw larger than the tracked pool balance
    InsufficientBalance = 8,
    /// Fee exceeds what the initiator agreed to pay
    InsufficientFee = 9,
    AlreadyInitialized = 10,
    NotInitialized = 11,
    InvalidAmount = 12,
    InvalidOwner = 13,
    InvalidFeeSchedule = 14,
    Overflow = 15,
}
