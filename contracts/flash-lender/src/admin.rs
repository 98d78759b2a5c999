use crate::accounting::require_owner;
use crate::fee::validate_schedule;
use crate::guard::ensure_unlocked;
use crate::storage::{is_initialized, set_config, set_state};
use flash_types::{FeeSchedule, LenderError, PoolConfig, PoolState};
use soroban_sdk::{Address, Env, Symbol};

/// Create the pool: owner set, balance 0, unlocked
pub fn initialize(
    env: &Env,
    owner: Address,
    asset: Address,
    fee_schedule: Option<FeeSchedule>,
) -> Result<(), LenderError> {
    if is_initialized(env) {
        return Err(LenderError::AlreadyInitialized);
    }
    if owner == env.current_contract_address() {
        return Err(LenderError::InvalidOwner);
    }
    owner.require_auth();
    validate_schedule(fee_schedule.as_ref())?;

    set_config(env, &PoolConfig { asset, fee_schedule });
    set_state(env, &PoolState::new(owner));
    Ok(())
}

/// Hand the pool to `new_owner`
///
/// Addresses have no null value; the pool's own address stands in for it.
pub fn transfer_ownership(
    env: &Env,
    caller: &Address,
    new_owner: Address,
) -> Result<(), LenderError> {
    let mut state = require_owner(env, caller)?;
    ensure_unlocked(env)?;

    if new_owner == env.current_contract_address() {
        return Err(LenderError::InvalidOwner);
    }

    let old_owner = core::mem::replace(&mut state.owner, new_owner.clone());
    set_state(env, &state);

    env.events()
        .publish((Symbol::new(env, "owner_changed"),), (old_owner, new_owner));
    Ok(())
}
