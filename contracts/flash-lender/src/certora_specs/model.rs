// ============================================================================
// STATE SNAPSHOTS
// ============================================================================
//
// Captures pool state around a call so rules can compare before and after.
//
// ============================================================================

use crate::accounting::actual_balance;
use crate::storage::{get_config, get_state};
use flash_types::PoolState;
use soroban_sdk::Env;

/// Tracked state plus the custody the token reports for it
#[derive(Clone)]
pub struct PoolSnapshot {
    pub state: PoolState,
    pub actual_balance: i128,
}

impl PoolSnapshot {
    /// None when the pool has not been initialized
    pub fn capture(env: &Env) -> Option<Self> {
        let state = get_state(env).ok()?;
        let config = get_config(env).ok()?;
        Some(Self {
            actual_balance: actual_balance(env, &config.asset),
            state,
        })
    }
}

/// Assume an initialized pool that satisfies every state invariant
pub fn assume_consistent_pool(env: &Env) -> Option<PoolSnapshot> {
    use crate::invariants::{balance_covered, lock_released, pool_balance_non_negative};
    use cvlr::asserts::cvlr_assume;

    let snapshot = PoolSnapshot::capture(env)?;
    cvlr_assume!(lock_released(&snapshot.state));
    cvlr_assume!(pool_balance_non_negative(&snapshot.state));
    cvlr_assume!(balance_covered(
        snapshot.actual_balance,
        snapshot.state.pool_balance
    ));
    Some(snapshot)
}
