use soroban_sdk::{contracttype, Address};

/// Reentrancy lock state
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum LockState {
    Unlocked = 0,
    Locked = 1,
}

/// Mutable pool state - stored in Instance storage
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolState {
    /// Identity allowed to withdraw, sync and administer the pool
    pub owner: Address,
    /// Amount of the asset the pool claims to custody
    pub pool_balance: i128,
    /// Reentrancy lock
    pub lock: LockState,
}

impl PoolState {
    pub fn new(owner: Address) -> Self {
        Self {
            owner,
            pool_balance: 0,
            lock: LockState::Unlocked,
        }
    }

    pub fn is_locked(&self) -> bool {
        self.lock == LockState::Locked
    }
}

/// Gas-price-indexed fee schedule
///
/// The fee rises linearly from 0 at `gas_price_floor` to `fee_max` at
/// `gas_price_floor + gas_price_range` and is capped there.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeeSchedule {
    /// Token the fee is paid in (normally the native asset contract)
    pub fee_token: Address,
    /// Recipient of collected fees
    pub treasury: Address,
    /// Gas price at or below which loans are free
    pub gas_price_floor: u64,
    /// Gas price distance over which the fee ramps up to `fee_max`
    pub gas_price_range: u64,
    /// Maximum fee, in `fee_token` units
    pub fee_max: i128,
}

/// Pool configuration
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolConfig {
    /// The single asset this pool lends
    pub asset: Address,
    /// None for a fee-free pool
    pub fee_schedule: Option<FeeSchedule>,
}
