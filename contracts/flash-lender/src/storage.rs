use flash_types::{LenderError, PoolConfig, PoolState};
use soroban_sdk::{contracttype, Env};

// ============================================================================
// STORAGE LAYOUT
// ============================================================================
// Everything lives in Instance storage: the pool is a singleton and every
// operation touches both the config and the state, so a single instance
// entry keeps the footprint at one read/write per call.
//
// - Config   : asset + optional fee schedule
// - State    : owner, pool_balance, lock
// - GasPrice : gas-price index the fee schedule reads
// ============================================================================

/// Storage keys for the lender contract
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Pool configuration (Instance storage)
    Config,
    /// Owner, tracked balance and lock (Instance storage)
    State,
    /// Current gas-price index (Instance storage)
    GasPrice,
}

// TTL constants
const INSTANCE_TTL_THRESHOLD: u32 = 17280; // ~1 day
const INSTANCE_TTL_EXTEND: u32 = 518400; // ~30 days

/// Extend instance storage TTL
pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::State)
}

// === Config ===

pub fn get_config(env: &Env) -> Result<PoolConfig, LenderError> {
    let config: PoolConfig = env
        .storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(LenderError::NotInitialized)?;
    extend_instance_ttl(env);
    Ok(config)
}

pub fn set_config(env: &Env, config: &PoolConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    extend_instance_ttl(env);
}

// === State ===

pub fn get_state(env: &Env) -> Result<PoolState, LenderError> {
    let state: PoolState = env
        .storage()
        .instance()
        .get(&DataKey::State)
        .ok_or(LenderError::NotInitialized)?;
    extend_instance_ttl(env);
    Ok(state)
}

pub fn set_state(env: &Env, state: &PoolState) {
    env.storage().instance().set(&DataKey::State, state);
    extend_instance_ttl(env);
}

// === Gas price ===

pub fn get_gas_price(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::GasPrice)
        .unwrap_or(0u64)
}

pub fn set_gas_price(env: &Env, gas_price: u64) {
    env.storage().instance().set(&DataKey::GasPrice, &gas_price);
    extend_instance_ttl(env);
}
