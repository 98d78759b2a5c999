use crate::guard::with_lock;
use crate::invariants::withdraw_valid;
use crate::storage::{get_config, get_state, set_state};
use flash_types::{LenderError, PoolState};
use soroban_sdk::{log, token, Address, Env, Symbol};

/// Reject negative amounts; zero is allowed and moves nothing
pub fn check_amount(amount: i128) -> Result<(), LenderError> {
    if amount < 0 {
        return Err(LenderError::InvalidAmount);
    }
    Ok(())
}

/// Asset actually held by the pool, as reported by the token contract
pub fn actual_balance(env: &Env, asset: &Address) -> i128 {
    token::Client::new(env, asset).balance(&env.current_contract_address())
}

/// Move `amount` of `token` between two addresses, mapping any failure
/// inside the token contract to `TransferFailed`
pub fn transfer(
    env: &Env,
    token: &Address,
    from: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), LenderError> {
    if amount == 0 {
        return Ok(());
    }
    match token::Client::new(env, token).try_transfer(from, to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => {
            log!(env, "transfer failed", token.clone(), amount);
            Err(LenderError::TransferFailed)
        }
    }
}

/// Load state and check `caller` is the owner
pub fn require_owner(env: &Env, caller: &Address) -> Result<PoolState, LenderError> {
    caller.require_auth();
    let state = get_state(env)?;
    if state.owner != *caller {
        return Err(LenderError::Unauthorized);
    }
    Ok(state)
}

/// Pull `amount` of the asset from `from` into the pool
///
/// Returns the new pool balance.
pub fn deposit(env: &Env, from: &Address, amount: i128) -> Result<i128, LenderError> {
    check_amount(amount)?;
    from.require_auth();
    let config = get_config(env)?;

    let pool_balance = with_lock(env, || {
        transfer(env, &config.asset, from, &env.current_contract_address(), amount)?;

        let mut state = get_state(env)?;
        state.pool_balance = state
            .pool_balance
            .checked_add(amount)
            .ok_or(LenderError::Overflow)?;
        set_state(env, &state);
        Ok(state.pool_balance)
    })?;

    env.events()
        .publish((Symbol::new(env, "deposit"), from.clone()), amount);
    Ok(pool_balance)
}

/// Push `amount` of the asset from the pool to the owner
///
/// Returns the new pool balance.
pub fn withdraw(env: &Env, caller: &Address, amount: i128) -> Result<i128, LenderError> {
    check_amount(amount)?;
    let config = get_config(env)?;

    let pool_balance = with_lock(env, || {
        let mut state = require_owner(env, caller)?;

        // Checked before any mutation, never wraps
        if !withdraw_valid(state.pool_balance, amount) {
            return Err(LenderError::InsufficientBalance);
        }
        state.pool_balance -= amount;
        set_state(env, &state);

        transfer(env, &config.asset, &env.current_contract_address(), &state.owner, amount)?;
        Ok(state.pool_balance)
    })?;

    env.events()
        .publish((Symbol::new(env, "withdraw"), caller.clone()), amount);
    Ok(pool_balance)
}

/// Set the tracked balance to what the pool actually holds
///
/// Returns (old_balance, new_balance).
pub fn sync(env: &Env, caller: &Address) -> Result<(i128, i128), LenderError> {
    let config = get_config(env)?;

    let balances = with_lock(env, || {
        let mut state = require_owner(env, caller)?;
        let old_balance = state.pool_balance;
        state.pool_balance = actual_balance(env, &config.asset);
        set_state(env, &state);
        Ok((old_balance, state.pool_balance))
    })?;

    env.events().publish((Symbol::new(env, "sync"),), balances);
    Ok(balances)
}
