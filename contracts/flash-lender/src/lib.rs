#![no_std]

mod accounting;
mod admin;
mod dispatch;
mod fee;
mod flash_loan;
mod guard;
mod invariants;
mod storage;

#[cfg(any(test, feature = "certora"))]
mod certora_specs;

use flash_types::{
    FeeSchedule, FlashLoanParams, LenderError, Operation, OperationResult, PoolConfig, PoolState,
};
use soroban_sdk::{contract, contractimpl, Address, Bytes, Env};
use storage::{get_config, get_gas_price, get_state};

#[contract]
pub struct FlashLender;

#[contractimpl]
impl FlashLender {
    /// Initialize the pool
    ///
    /// # Arguments
    /// * `owner` - Identity allowed to withdraw, sync and administer
    /// * `asset` - The single asset this pool lends
    /// * `fee_schedule` - Gas-price-indexed fee, or None for free loans
    pub fn initialize(
        env: Env,
        owner: Address,
        asset: Address,
        fee_schedule: Option<FeeSchedule>,
    ) -> Result<(), LenderError> {
        admin::initialize(&env, owner, asset, fee_schedule)
    }

    /// Lend `amount` of `asset` to `receiver` for the duration of its
    /// `on_flash_loan` callback
    ///
    /// # Arguments
    /// * `initiator` - Account requesting the loan and paying the fee
    /// * `receiver` - Contract that receives the funds and the callback
    /// * `asset` - Must be the pool's asset
    /// * `amount` - Amount to lend, at most the tracked pool balance
    /// * `data` - Opaque payload forwarded to the callback
    /// * `max_fee` - Most the initiator is willing to pay
    ///
    /// # Returns
    /// The fee charged
    pub fn flash_loan(
        env: Env,
        initiator: Address,
        receiver: Address,
        asset: Address,
        amount: i128,
        data: Bytes,
        max_fee: i128,
    ) -> Result<i128, LenderError> {
        let params = FlashLoanParams {
            receiver,
            asset,
            amount,
            data,
            max_fee,
        };
        flash_loan::execute_flash_loan(&env, &initiator, &params)
    }

    /// Add `amount` of the asset to the pool
    ///
    /// # Returns
    /// New pool balance
    pub fn deposit(env: Env, from: Address, amount: i128) -> Result<i128, LenderError> {
        accounting::deposit(&env, &from, amount)
    }

    /// Send `amount` of the asset to the owner
    ///
    /// # Returns
    /// New pool balance
    pub fn withdraw(env: Env, caller: Address, amount: i128) -> Result<i128, LenderError> {
        accounting::withdraw(&env, &caller, amount)
    }

    /// Absorb funds received outside `deposit` into the tracked balance
    ///
    /// # Returns
    /// New pool balance
    pub fn sync(env: Env, caller: Address) -> Result<i128, LenderError> {
        accounting::sync(&env, &caller).map(|(_, new_balance)| new_balance)
    }

    pub fn transfer_ownership(
        env: Env,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), LenderError> {
        admin::transfer_ownership(&env, &caller, new_owner)
    }

    pub fn set_fee_schedule(
        env: Env,
        caller: Address,
        fee_schedule: Option<FeeSchedule>,
    ) -> Result<(), LenderError> {
        fee::set_fee_schedule(&env, &caller, fee_schedule)
    }

    pub fn set_gas_price(env: Env, caller: Address, gas_price: u64) -> Result<(), LenderError> {
        fee::update_gas_price(&env, &caller, gas_price)
    }

    /// Run a tagged operation on behalf of `caller`
    pub fn execute(
        env: Env,
        caller: Address,
        op: Operation,
    ) -> Result<OperationResult, LenderError> {
        dispatch::execute(&env, caller, op)
    }

    // === View Functions ===

    /// Largest loan available for `asset` (0 for any other asset)
    pub fn max_flash_loan(env: Env, asset: Address) -> Result<i128, LenderError> {
        dispatch::max_flash_loan(&env, &asset)
    }

    /// Fee a loan would pay at the current gas price
    pub fn flash_fee(env: Env, asset: Address, amount: i128) -> Result<i128, LenderError> {
        dispatch::flash_fee(&env, &asset, amount)
    }

    pub fn get_state(env: Env) -> Result<PoolState, LenderError> {
        get_state(&env)
    }

    pub fn get_config(env: Env) -> Result<PoolConfig, LenderError> {
        get_config(&env)
    }

    pub fn owner(env: Env) -> Result<Address, LenderError> {
        Ok(get_state(&env)?.owner)
    }

    pub fn pool_balance(env: Env) -> Result<i128, LenderError> {
        Ok(get_state(&env)?.pool_balance)
    }

    pub fn is_locked(env: Env) -> Result<bool, LenderError> {
        Ok(get_state(&env)?.is_locked())
    }

    pub fn asset(env: Env) -> Result<Address, LenderError> {
        Ok(get_config(&env)?.asset)
    }

    pub fn fee_schedule(env: Env) -> Result<Option<FeeSchedule>, LenderError> {
        Ok(get_config(&env)?.fee_schedule)
    }

    pub fn gas_price(env: Env) -> u64 {
        get_gas_price(&env)
    }
}
