use crate::accounting::check_amount;
use crate::fee::current_fee;
use crate::storage::{get_config, get_state};
use crate::{accounting, admin, flash_loan};
use flash_types::{LenderError, Operation, OperationResult};
use soroban_sdk::{Address, Env};

/// Route a tagged operation to its handler
///
/// Operations that do not decode into a known `Operation` variant are
/// rejected by the host before reaching here.
pub fn execute(
    env: &Env,
    caller: Address,
    op: Operation,
) -> Result<OperationResult, LenderError> {
    match op {
        Operation::FlashLoan(params) => {
            flash_loan::execute_flash_loan(env, &caller, &params).map(OperationResult::FlashLoan)
        }
        Operation::MaxLoan(asset) => max_flash_loan(env, &asset).map(OperationResult::MaxLoan),
        Operation::FeeQuote(asset, amount) => {
            flash_fee(env, &asset, amount).map(OperationResult::FeeQuote)
        }
        Operation::Deposit(amount) => {
            accounting::deposit(env, &caller, amount).map(OperationResult::PoolBalance)
        }
        Operation::Withdraw(amount) => {
            accounting::withdraw(env, &caller, amount).map(OperationResult::PoolBalance)
        }
        Operation::Sync => accounting::sync(env, &caller)
            .map(|(_, new_balance)| OperationResult::PoolBalance(new_balance)),
        Operation::TransferOwnership(new_owner) => {
            admin::transfer_ownership(env, &caller, new_owner).map(|_| OperationResult::Done)
        }
    }
}

/// Largest loan available for `asset`: the tracked balance, or 0 for any
/// other asset
pub fn max_flash_loan(env: &Env, asset: &Address) -> Result<i128, LenderError> {
    let config = get_config(env)?;
    if *asset != config.asset {
        return Ok(0);
    }
    Ok(get_state(env)?.pool_balance)
}

/// Fee a loan of `amount` would pay at the current gas price
///
/// The fee depends on the gas price only; `amount` is validated but does not
/// change the quote.
pub fn flash_fee(env: &Env, asset: &Address, amount: i128) -> Result<i128, LenderError> {
    let config = get_config(env)?;
    if *asset != config.asset {
        return Err(LenderError::UnsupportedAsset);
    }
    check_amount(amount)?;
    Ok(current_fee(env, &config))
}
