// ============================================================================
// FEE CURVE SPECIFICATIONS
// ============================================================================
//
// KEY INVARIANTS:
// 1. Fee is 0 at or below the gas price floor
// 2. Fee never exceeds fee_max
// 3. Fee is monotone in gas price
// 4. A pool without a schedule charges nothing
//
// ============================================================================

#[cfg(feature = "certora")]
use cvlr_soroban_derive::rule;

#[cfg(feature = "certora")]
use cvlr::asserts::{cvlr_assert, cvlr_assume, cvlr_satisfy};

/// RULE: fee is zero at or below the floor
#[cfg(feature = "certora")]
#[rule]
pub fn fee_zero_below_floor(gas_price: u64, floor: u64, range: u64, fee_max: i128) {
    use flash_math::gas_indexed_fee;

    cvlr_assume!(gas_price <= floor);
    cvlr_assert!(gas_indexed_fee(gas_price, floor, range, fee_max) == 0);
}

/// RULE: fee stays within [0, fee_max]
#[cfg(feature = "certora")]
#[rule]
pub fn fee_within_cap(gas_price: u64, floor: u64, range: u64, fee_max: i128) {
    use crate::invariants::fee_bounded;
    use flash_math::gas_indexed_fee;
    use flash_types::MAX_GAS_PRICE_RANGE;

    cvlr_assume!(range > 0 && range <= MAX_GAS_PRICE_RANGE);
    cvlr_assume!(fee_max >= 0);

    let fee = gas_indexed_fee(gas_price, floor, range, fee_max);
    cvlr_assert!(fee_bounded(fee, fee_max));
}

/// RULE: a higher gas price never yields a lower fee
#[cfg(feature = "certora")]
#[rule]
pub fn fee_monotone_in_gas_price(
    gas_low: u64,
    gas_high: u64,
    floor: u64,
    range: u64,
    fee_max: i128,
) {
    use crate::invariants::fee_monotonic;
    use flash_math::gas_indexed_fee;
    use flash_types::MAX_GAS_PRICE_RANGE;

    cvlr_assume!(gas_low <= gas_high);
    cvlr_assume!(range > 0 && range <= MAX_GAS_PRICE_RANGE);
    cvlr_assume!(fee_max >= 0);

    let fee_low = gas_indexed_fee(gas_low, floor, range, fee_max);
    let fee_high = gas_indexed_fee(gas_high, floor, range, fee_max);
    cvlr_assert!(fee_monotonic(gas_low, fee_low, gas_high, fee_high));
}

/// RULE: sanity - the ramp produces a fee strictly between 0 and the cap
#[cfg(feature = "certora")]
#[rule]
pub fn fee_ramp_reachable(gas_price: u64, floor: u64, range: u64, fee_max: i128) {
    use flash_math::gas_indexed_fee;

    cvlr_assume!(range > 0);
    cvlr_assume!(fee_max > 0);

    let fee = gas_indexed_fee(gas_price, floor, range, fee_max);
    cvlr_satisfy!(fee > 0 && fee < fee_max);
}
