use crate::accounting::{actual_balance, check_amount, transfer};
use crate::fee::{current_fee, settle_fee};
use crate::guard::with_lock;
use crate::invariants::balance_covered;
use crate::storage::{get_config, get_state};
use flash_types::{FlashLoanParams, FlashLoanReceiverClient, LenderError};
use soroban_sdk::{log, Address, Env, Symbol};

/// Execute a flash loan
///
/// 1. Reject anything but the pool's asset
/// 2. Take the reentrancy lock
/// 3. Snapshot the tracked balance as the repayment target
/// 4. Send `amount` to the receiver
/// 5. Call `on_flash_loan` on the receiver
/// 6. Require the pool's actual balance to be back at or above the target
/// 7. Collect the fee, if the pool charges one
/// 8. Release the lock
///
/// Any failure aborts the invocation and the host rolls back every transfer
/// made along the way. `pool_balance` is never written here.
///
/// Returns the fee charged.
pub fn execute_flash_loan(
    env: &Env,
    initiator: &Address,
    params: &FlashLoanParams,
) -> Result<i128, LenderError> {
    initiator.require_auth();

    let config = get_config(env)?;
    if params.asset != config.asset {
        return Err(LenderError::UnsupportedAsset);
    }
    check_amount(params.amount)?;

    let fee = current_fee(env, &config);
    let pool = env.current_contract_address();

    with_lock(env, || {
        let target = get_state(env)?.pool_balance;
        if params.amount > target {
            return Err(LenderError::AmountExceedsPool);
        }

        transfer(env, &config.asset, &pool, &params.receiver, params.amount)?;

        invoke_receiver(env, initiator, params, fee)?;

        // Repayment is proven by the balance alone; the callback's return
        // value is never trusted
        let actual = actual_balance(env, &config.asset);
        if !balance_covered(actual, target) {
            log!(env, "flash loan not repaid", actual, target);
            return Err(LenderError::NotRepaid);
        }

        settle_fee(
            env,
            config.fee_schedule.as_ref(),
            initiator,
            fee,
            params.max_fee,
        )
    })?;

    env.events().publish(
        (Symbol::new(env, "flash_loan"),),
        (
            params.receiver.clone(),
            params.asset.clone(),
            params.amount,
            fee,
        ),
    );

    Ok(fee)
}

/// Call the receiver's callback, turning any abort into `CallbackFailed`
fn invoke_receiver(
    env: &Env,
    initiator: &Address,
    params: &FlashLoanParams,
    fee: i128,
) -> Result<(), LenderError> {
    let receiver = FlashLoanReceiverClient::new(env, &params.receiver);
    match receiver.try_on_flash_loan(
        initiator,
        &params.asset,
        &params.amount,
        &fee,
        &params.data,
    ) {
        // Ok(Err(_)) is a malformed return value, which is not our concern
        Ok(_) => Ok(()),
        Err(_) => {
            log!(env, "flash loan callback aborted", params.receiver.clone());
            Err(LenderError::CallbackFailed)
        }
    }
}
