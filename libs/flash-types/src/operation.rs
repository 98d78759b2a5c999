use soroban_sdk::{contracttype, Address, Bytes};

/// Arguments of a flash loan request
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FlashLoanParams {
    /// Contract receiving the funds and the `on_flash_loan` callback
    pub receiver: Address,
    /// Asset to borrow
    pub asset: Address,
    /// Amount to borrow
    pub amount: i128,
    /// Opaque payload forwarded to the receiver
    pub data: Bytes,
    /// Most the initiator is willing to pay in fees
    pub max_fee: i128,
}

/// Tagged operation accepted by the pool's `execute` entry point
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Operation {
    FlashLoan(FlashLoanParams),
    /// MaxLoan(asset)
    MaxLoan(Address),
    /// FeeQuote(asset, amount)
    FeeQuote(Address, i128),
    /// Deposit(amount)
    Deposit(i128),
    /// Withdraw(amount)
    Withdraw(i128),
    Sync,
    /// TransferOwnership(new_owner)
    TransferOwnership(Address),
}

/// Result of a dispatched operation
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum OperationResult {
    Done,
    /// Fee charged for a completed flash loan
    FlashLoan(i128),
    MaxLoan(i128),
    FeeQuote(i128),
    /// New pool balance after deposit, withdraw or sync
    PoolBalance(i128),
}
