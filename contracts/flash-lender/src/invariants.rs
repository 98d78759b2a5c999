// ============================================================================
// INVARIANTS MODULE - For Formal Verification
// ============================================================================
//
// Predicates over pool state that must hold at every operation boundary.
// The engine uses them for its own checks; the certora specs and the tests
// assert them around every operation.
//
// INVARIANT CATEGORIES:
//
// 1. CUSTODY
//    - The pool holds at least what it tracks
//    - A flash loan leaves the tracked balance untouched
//
// 2. LOCK
//    - The lock is released at every operation boundary
//
// 3. ACCOUNTING
//    - Withdrawals never underflow the tracked balance
//
// 4. FEE
//    - Fees are bounded by the schedule cap and never decrease with gas price
//
// ============================================================================

#![cfg_attr(not(any(test, feature = "certora")), allow(dead_code))]

use flash_types::{LockState, PoolState};

// ============================================================================
// CUSTODY INVARIANTS
// ============================================================================

/// Invariant: actual custody covers the tracked balance
///
/// Property:
///   actual_balance >= pool_balance
///
/// Also the repayment condition of a flash loan, with `pool_balance` the
/// snapshot taken before the funds left.
pub fn balance_covered(actual_balance: i128, pool_balance: i128) -> bool {
    actual_balance >= pool_balance
}

/// Invariant: a flash loan does not dilute the pool
///
/// Property:
///   pool_balance_after == pool_balance_before
pub fn pool_balance_unchanged(before: &PoolState, after: &PoolState) -> bool {
    before.pool_balance == after.pool_balance
}

/// Invariant: tracked balance is never negative
pub fn pool_balance_non_negative(state: &PoolState) -> bool {
    state.pool_balance >= 0
}

// ============================================================================
// LOCK INVARIANTS
// ============================================================================

/// Invariant: lock is released at operation boundaries
///
/// Property:
///   lock == Unlocked
pub fn lock_released(state: &PoolState) -> bool {
    state.lock == LockState::Unlocked
}

// ============================================================================
// ACCOUNTING INVARIANTS
// ============================================================================

/// Invariant: withdrawal is covered by the tracked balance
///
/// Property:
///   0 <= amount <= pool_balance
pub fn withdraw_valid(pool_balance: i128, amount: i128) -> bool {
    amount >= 0 && amount <= pool_balance
}

/// Invariant: deposit adds exactly the deposited amount
pub fn deposit_applied(before: i128, after: i128, amount: i128) -> bool {
    before.checked_add(amount) == Some(after)
}

// ============================================================================
// FEE INVARIANTS
// ============================================================================

/// Invariant: fee never exceeds the schedule cap
///
/// Property:
///   0 <= fee <= fee_max
pub fn fee_bounded(fee: i128, fee_max: i128) -> bool {
    fee >= 0 && fee <= fee_max
}

/// Invariant: fee is monotone in gas price
///
/// Property:
///   gp_low <= gp_high  =>  fee(gp_low) <= fee(gp_high)
pub fn fee_monotonic(gas_low: u64, fee_low: i128, gas_high: u64, fee_high: i128) -> bool {
    gas_low > gas_high || fee_low <= fee_high
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::testutils::Address as _;
    use soroban_sdk::{Address, Env};

    fn state(env: &Env, pool_balance: i128, lock: LockState) -> PoolState {
        PoolState {
            owner: Address::generate(env),
            pool_balance,
            lock,
        }
    }

    #[test]
    fn test_balance_covered() {
        assert!(balance_covered(100, 100));
        assert!(balance_covered(150, 100));
        assert!(!balance_covered(99, 100));
    }

    #[test]
    fn test_pool_balance_unchanged() {
        let env = Env::default();
        let before = state(&env, 100_000, LockState::Unlocked);
        let mut after = before.clone();
        assert!(pool_balance_unchanged(&before, &after));
        after.pool_balance -= 1;
        assert!(!pool_balance_unchanged(&before, &after));
    }

    #[test]
    fn test_lock_released() {
        let env = Env::default();
        assert!(lock_released(&state(&env, 0, LockState::Unlocked)));
        assert!(!lock_released(&state(&env, 0, LockState::Locked)));
    }

    #[test]
    fn test_withdraw_valid() {
        assert!(withdraw_valid(100, 0));
        assert!(withdraw_valid(100, 100));
        assert!(!withdraw_valid(100, 101));
        assert!(!withdraw_valid(100, -1));
    }

    #[test]
    fn test_deposit_applied() {
        assert!(deposit_applied(10, 25, 15));
        assert!(!deposit_applied(10, 24, 15));
        assert!(!deposit_applied(i128::MAX, i128::MIN, 1));
    }

    #[test]
    fn test_fee_invariants() {
        assert!(fee_bounded(0, 10));
        assert!(fee_bounded(10, 10));
        assert!(!fee_bounded(11, 10));
        assert!(!fee_bounded(-1, 10));

        assert!(fee_monotonic(1, 5, 2, 5));
        assert!(!fee_monotonic(1, 6, 2, 5));
        // Vacuous when the gas prices are out of order
        assert!(fee_monotonic(3, 6, 2, 5));
    }

    #[test]
    fn test_pool_balance_non_negative() {
        let env = Env::default();
        assert!(pool_balance_non_negative(&state(&env, 0, LockState::Unlocked)));
        assert!(!pool_balance_non_negative(&state(&env, -1, LockState::Unlocked)));
    }
}
