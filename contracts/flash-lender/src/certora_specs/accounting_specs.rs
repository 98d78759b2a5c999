// ============================================================================
// POOL ACCOUNTING SPECIFICATIONS
// ============================================================================
//
// KEY INVARIANTS:
// 1. A successful flash loan leaves pool_balance unchanged
// 2. Custody covers pool_balance after every successful operation
// 3. Withdraw never takes more than pool_balance
// 4. Deposit adds exactly the deposited amount
// 5. Only the owner can withdraw or sync
//
// ============================================================================

#[cfg(feature = "certora")]
use cvlr_soroban_derive::rule;

#[cfg(feature = "certora")]
use cvlr::asserts::{cvlr_assert, cvlr_assume, cvlr_satisfy};

/// RULE: a successful flash loan preserves pool_balance and custody
#[cfg(feature = "certora")]
#[rule]
pub fn flash_loan_preserves_pool(env: soroban_sdk::Env, amount: i128, max_fee: i128) {
    use crate::certora_specs::model::{assume_consistent_pool, PoolSnapshot};
    use crate::invariants::{balance_covered, lock_released, pool_balance_unchanged};
    use crate::FlashLender;
    use cvlr_soroban::nondet_address;
    use soroban_sdk::Bytes;

    let Some(before) = assume_consistent_pool(&env) else {
        return;
    };
    let asset = FlashLender::asset(env.clone()).unwrap_or_else(|_| nondet_address());

    let result = FlashLender::flash_loan(
        env.clone(),
        nondet_address(),
        nondet_address(),
        asset,
        amount,
        Bytes::new(&env),
        max_fee,
    );
    cvlr_assume!(result.is_ok());

    let Some(after) = PoolSnapshot::capture(&env) else {
        return;
    };
    cvlr_assert!(pool_balance_unchanged(&before.state, &after.state));
    cvlr_assert!(balance_covered(after.actual_balance, after.state.pool_balance));
    cvlr_assert!(lock_released(&after.state));
}

/// RULE: withdraw succeeds only within pool_balance and subtracts exactly
#[cfg(feature = "certora")]
#[rule]
pub fn withdraw_bounded_by_pool(env: soroban_sdk::Env, amount: i128) {
    use crate::certora_specs::model::{assume_consistent_pool, PoolSnapshot};
    use crate::invariants::withdraw_valid;
    use crate::FlashLender;

    let Some(before) = assume_consistent_pool(&env) else {
        return;
    };
    let owner = before.state.owner.clone();

    let result = FlashLender::withdraw(env.clone(), owner, amount);
    cvlr_assume!(result.is_ok());

    let Some(after) = PoolSnapshot::capture(&env) else {
        return;
    };
    cvlr_assert!(withdraw_valid(before.state.pool_balance, amount));
    cvlr_assert!(after.state.pool_balance == before.state.pool_balance - amount);
}

/// RULE: deposit adds exactly the deposited amount
#[cfg(feature = "certora")]
#[rule]
pub fn deposit_adds_amount(env: soroban_sdk::Env, amount: i128) {
    use crate::certora_specs::model::{assume_consistent_pool, PoolSnapshot};
    use crate::invariants::deposit_applied;
    use crate::FlashLender;
    use cvlr_soroban::nondet_address;

    let Some(before) = assume_consistent_pool(&env) else {
        return;
    };

    let result = FlashLender::deposit(env.clone(), nondet_address(), amount);
    cvlr_assume!(result.is_ok());

    let Some(after) = PoolSnapshot::capture(&env) else {
        return;
    };
    cvlr_assert!(deposit_applied(
        before.state.pool_balance,
        after.state.pool_balance,
        amount
    ));
}

/// RULE: a non-owner can never withdraw
#[cfg(feature = "certora")]
#[rule]
pub fn withdraw_requires_owner(env: soroban_sdk::Env, amount: i128) {
    use crate::certora_specs::model::assume_consistent_pool;
    use crate::FlashLender;
    use cvlr_soroban::nondet_address;

    let Some(before) = assume_consistent_pool(&env) else {
        return;
    };
    let caller = nondet_address();
    cvlr_assume!(caller != before.state.owner);

    let result = FlashLender::withdraw(env.clone(), caller, amount);
    cvlr_assert!(result.is_err());
}

/// RULE: sanity - a flash loan can succeed
#[cfg(feature = "certora")]
#[rule]
pub fn flash_loan_reachable(env: soroban_sdk::Env, amount: i128) {
    use crate::FlashLender;
    use cvlr_soroban::nondet_address;
    use soroban_sdk::Bytes;

    let Ok(asset) = FlashLender::asset(env.clone()) else {
        return;
    };
    let result = FlashLender::flash_loan(
        env.clone(),
        nondet_address(),
        nondet_address(),
        asset,
        amount,
        Bytes::new(&env),
        0,
    );
    cvlr_satisfy!(result.is_ok());
}
