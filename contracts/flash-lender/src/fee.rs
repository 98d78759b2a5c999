use crate::accounting::{require_owner, transfer};
use crate::guard::{ensure_unlocked, with_lock};
use crate::storage::{get_config, get_gas_price, set_config, set_gas_price};
use flash_math::quote_fee;
use flash_types::{fee_schedule_valid, FeeSchedule, LenderError, PoolConfig};
use soroban_sdk::{Address, Env, Symbol};

/// Fee a flash loan would pay right now
pub fn current_fee(env: &Env, config: &PoolConfig) -> i128 {
    quote_fee(config.fee_schedule.as_ref(), get_gas_price(env))
}

/// Collect `fee` from the initiator and forward it to the treasury
///
/// `max_fee` is what the initiator put up for the loan; anything above the
/// fee stays with the initiator.
pub fn settle_fee(
    env: &Env,
    schedule: Option<&FeeSchedule>,
    initiator: &Address,
    fee: i128,
    max_fee: i128,
) -> Result<(), LenderError> {
    let Some(schedule) = schedule else {
        return Ok(());
    };
    if max_fee < fee {
        return Err(LenderError::InsufficientFee);
    }
    transfer(env, &schedule.fee_token, initiator, &schedule.treasury, fee)
}

pub fn validate_schedule(schedule: Option<&FeeSchedule>) -> Result<(), LenderError> {
    match schedule {
        Some(schedule) if !fee_schedule_valid(schedule) => Err(LenderError::InvalidFeeSchedule),
        _ => Ok(()),
    }
}

/// Replace the fee schedule; None switches the pool to fee-free lending
pub fn set_fee_schedule(
    env: &Env,
    caller: &Address,
    fee_schedule: Option<FeeSchedule>,
) -> Result<(), LenderError> {
    validate_schedule(fee_schedule.as_ref())?;

    with_lock(env, || {
        require_owner(env, caller)?;
        let mut config = get_config(env)?;
        config.fee_schedule = fee_schedule;
        set_config(env, &config);
        Ok(())
    })
}

/// Update the gas-price index read by the fee schedule
pub fn update_gas_price(env: &Env, caller: &Address, gas_price: u64) -> Result<(), LenderError> {
    require_owner(env, caller)?;
    ensure_unlocked(env)?;
    set_gas_price(env, gas_price);

    env.events()
        .publish((Symbol::new(env, "gas_price"),), gas_price);
    Ok(())
}
