#![no_std]

mod error;
mod operation;
mod pool;
mod receiver;

pub use error::*;
pub use operation::*;
pub use pool::*;
pub use receiver::*;

/// Upper bound on `FeeSchedule::gas_price_range`.
/// Keeps `(gas_price - floor) * fee_max` comfortably inside i128 for any
/// `fee_max` that passes validation.
pub const MAX_GAS_PRICE_RANGE: u64 = 1 << 48;

/// Check that a fee schedule can be evaluated without overflow
pub fn fee_schedule_valid(schedule: &FeeSchedule) -> bool {
    if schedule.gas_price_range == 0 || schedule.gas_price_range > MAX_GAS_PRICE_RANGE {
        return false;
    }
    if schedule.fee_max < 0 {
        return false;
    }
    if schedule.gas_price_floor.checked_add(schedule.gas_price_range).is_none() {
        return false;
    }
    schedule
        .fee_max
        .checked_mul(schedule.gas_price_range as i128)
        .is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::testutils::Address as _;
    use soroban_sdk::{Address, Env};

    fn schedule(env: &Env, floor: u64, range: u64, fee_max: i128) -> FeeSchedule {
        FeeSchedule {
            fee_token: Address::generate(env),
            treasury: Address::generate(env),
            gas_price_floor: floor,
            gas_price_range: range,
            fee_max,
        }
    }

    #[test]
    fn test_valid_schedule() {
        let env = Env::default();
        assert!(fee_schedule_valid(&schedule(&env, 100, 1_000, 5_000_000)));
    }

    #[test]
    fn test_zero_range_rejected() {
        let env = Env::default();
        assert!(!fee_schedule_valid(&schedule(&env, 100, 0, 5_000_000)));
    }

    #[test]
    fn test_negative_fee_max_rejected() {
        let env = Env::default();
        assert!(!fee_schedule_valid(&schedule(&env, 100, 1_000, -1)));
    }

    #[test]
    fn test_oversized_range_rejected() {
        let env = Env::default();
        assert!(!fee_schedule_valid(&schedule(&env, 0, MAX_GAS_PRICE_RANGE + 1, 1)));
        assert!(fee_schedule_valid(&schedule(&env, 0, MAX_GAS_PRICE_RANGE, 1)));
    }

    #[test]
    fn test_floor_plus_range_overflow_rejected() {
        let env = Env::default();
        assert!(!fee_schedule_valid(&schedule(&env, u64::MAX, 10, 1)));
    }

    #[test]
    fn test_fee_max_times_range_overflow_rejected() {
        let env = Env::default();
        assert!(!fee_schedule_valid(&schedule(&env, 0, MAX_GAS_PRICE_RANGE, i128::MAX)));
    }
}
