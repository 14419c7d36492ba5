//! Option intrinsic values at settlement
//!
//! Cash value of one option at a given spot price. Expressed per unit;
//! the requirement formulas multiply by leg amounts.

use rust_decimal::Decimal;

/// Intrinsic value of a put: `max(0, strike - spot)`.
pub fn put_intrinsic(strike: u64, spot: u64) -> Decimal {
    Decimal::from(strike.saturating_sub(spot))
}

/// Intrinsic value of a call: `max(0, spot - strike)`.
pub fn call_intrinsic(strike: u64, spot: u64) -> Decimal {
    Decimal::from(spot.saturating_sub(strike))
}
