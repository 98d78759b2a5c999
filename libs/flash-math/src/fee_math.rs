use flash_types::FeeSchedule;
use soroban_fixed_point_math::FixedPoint;

/// Fee for a flash loan at the given gas price
///
/// fee(gp) = 0                                                    if gp <= floor
/// fee(gp) = min(fee_max, (gp - floor) * fee_max / range)        otherwise
///
/// Rounds down, so the fee never overshoots the linear ramp.
pub fn gas_indexed_fee(gas_price: u64, floor: u64, range: u64, fee_max: i128) -> i128 {
    if gas_price <= floor || fee_max <= 0 {
        return 0;
    }

    let excess = gas_price - floor;
    if excess >= range {
        return fee_max;
    }

    // excess < range here, so the product is bounded by fee_max * range
    (excess as i128)
        .fixed_mul_floor(fee_max, range as i128)
        .map_or(fee_max, |fee| fee.min(fee_max))
}

/// Fee under a configured schedule
pub fn fee_for_schedule(schedule: &FeeSchedule, gas_price: u64) -> i128 {
    gas_indexed_fee(
        gas_price,
        schedule.gas_price_floor,
        schedule.gas_price_range,
        schedule.fee_max,
    )
}

/// Fee under an optional schedule; a pool without one lends for free
pub fn quote_fee(schedule: Option<&FeeSchedule>, gas_price: u64) -> i128 {
    match schedule {
        Some(schedule) => fee_for_schedule(schedule, gas_price),
        None => 0,
    }
}
