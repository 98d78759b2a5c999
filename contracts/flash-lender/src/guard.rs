use crate::storage::{get_state, set_state};
use flash_types::{LenderError, LockState};
use soroban_sdk::{log, Env};

/// Take the reentrancy lock
///
/// Unlocked -> Locked. Fails with `Locked` if a guarded operation is
/// already in flight.
pub fn acquire(env: &Env) -> Result<(), LenderError> {
    let mut state = get_state(env)?;
    if state.is_locked() {
        log!(env, "guard: reentry rejected");
        return Err(LenderError::Locked);
    }
    state.lock = LockState::Locked;
    set_state(env, &state);
    Ok(())
}

/// Drop the reentrancy lock unconditionally
pub fn release(env: &Env) -> Result<(), LenderError> {
    let mut state = get_state(env)?;
    state.lock = LockState::Unlocked;
    set_state(env, &state);
    Ok(())
}

/// Run `body` with the lock held
///
/// The lock is released on every path out of `body`, including errors, so
/// the state is always Unlocked when the operation returns.
pub fn with_lock<T, F>(env: &Env, body: F) -> Result<T, LenderError>
where
    F: FnOnce() -> Result<T, LenderError>,
{
    acquire(env)?;
    let result = body();
    release(env)?;
    result
}

/// Fail fast if the lock is held, without taking it
pub fn ensure_unlocked(env: &Env) -> Result<(), LenderError> {
    if get_state(env)?.is_locked() {
        return Err(LenderError::Locked);
    }
    Ok(())
}
