use soroban_sdk::{contractclient, symbol_short, Address, Bytes, Env, Symbol};

/// Marker well-behaved receivers return from `on_flash_loan`.
/// The lender never inspects it; repayment is proven by balances alone.
pub const CALLBACK_SUCCESS: Symbol = symbol_short!("flash_ok");

/// Callback interface the lender invokes on the loan receiver
#[contractclient(name = "FlashLoanReceiverClient")]
pub trait FlashLoanReceiver {
    /// Called after `amount` of `asset` has been sent to the receiver.
    /// The receiver must leave the lender's asset balance at or above its
    /// pre-loan level before returning.
    fn on_flash_loan(
        env: Env,
        initiator: Address,
        asset: Address,
        amount: i128,
        fee: i128,
        data: Bytes,
    ) -> Symbol;
}
