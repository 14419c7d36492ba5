//! Margin requirement calculations
//!
//! Deterministic reference formulas for the required collateral of a
//! two-leg option vault, before and after expiry. Put requirements are
//! denominated in the strike (cash) asset; call requirements in the
//! underlying asset, ceiling-rounded at that asset's decimal precision.

use crate::intrinsic::{call_intrinsic, put_intrinsic};
use rust_decimal::Decimal;
use types::numeric::round_up_dp;
use types::vault::{LegAmounts, StrikePair};

// ── Before expiry ─────────────────────────────────────────────────────────

/// Required margin for a put vault before expiry.
///
/// `max(0, short_strike * short_amount - long_strike * min(short_amount, long_amount))`
///
/// Worst-case payout if both legs are exercised, netted by the capped long
/// protection. Ceiling-rounded at the cash asset's precision (an identity
/// for integer strikes and amounts).
pub fn put_required_before_expiry(
    strikes: &StrikePair,
    amounts: &LegAmounts,
    put_decimals: u32,
) -> Decimal {
    let short_strike = Decimal::from(strikes.short_strike);
    let long_strike = Decimal::from(strikes.long_strike);
    let short_amount = Decimal::from(amounts.short_amount);
    let long_amount = Decimal::from(amounts.long_amount);

    let net = short_strike * short_amount - long_strike * short_amount.min(long_amount);

    round_up_dp(net.max(Decimal::ZERO), put_decimals)
}

/// Required margin for a call vault before expiry, in underlying units.
///
/// `max((long_strike - short_strike) * short_amount / long_strike, max(short_amount - long_amount, 0))`
///
/// Covers the spread payout converted into the underlying plus any naked
/// excess of short over long quantity. Ceiling-rounded at the underlying
/// asset's precision.
pub fn call_required_before_expiry(
    strikes: &StrikePair,
    amounts: &LegAmounts,
    call_decimals: u32,
) -> Decimal {
    assert!(strikes.long_strike >= 1, "Long strike must be >= 1");

    let short_strike = Decimal::from(strikes.short_strike);
    let long_strike = Decimal::from(strikes.long_strike);
    let short_amount = Decimal::from(amounts.short_amount);
    let long_amount = Decimal::from(amounts.long_amount);

    let spread_leg = (long_strike - short_strike) * short_amount / long_strike;
    let naked_leg = (short_amount - long_amount).max(Decimal::ZERO);

    round_up_dp(spread_leg.max(naked_leg), call_decimals)
}

// ── After expiry ──────────────────────────────────────────────────────────

/// Realized cash requirement of a put vault at settlement (signed).
///
/// `short leg intrinsic value - long leg intrinsic value`, where intrinsic
/// value is `max(0, strike - spot) * amount`.
pub fn put_required_after_expiry(
    spot: u64,
    strikes: &StrikePair,
    amounts: &LegAmounts,
) -> Decimal {
    let short_cash = put_intrinsic(strikes.short_strike, spot) * Decimal::from(amounts.short_amount);
    let long_cash = put_intrinsic(strikes.long_strike, spot) * Decimal::from(amounts.long_amount);

    short_cash - long_cash
}

/// Realized requirement of a call vault at settlement, in underlying units.
///
/// Net intrinsic cash value divided by the spot price, ceiling-rounded at
/// the underlying asset's precision.
pub fn call_required_after_expiry(
    spot: u64,
    strikes: &StrikePair,
    amounts: &LegAmounts,
    call_decimals: u32,
) -> Decimal {
    assert!(spot >= 1, "Spot price must be >= 1");

    let short_cash = call_intrinsic(strikes.short_strike, spot) * Decimal::from(amounts.short_amount);
    let long_cash = call_intrinsic(strikes.long_strike, spot) * Decimal::from(amounts.long_amount);

    round_up_dp((short_cash - long_cash) / Decimal::from(spot), call_decimals)
}

// ── Tests ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal::prelude::*;

    fn strikes(long: u64, short: u64) -> StrikePair {
        StrikePair { long_strike: long, short_strike: short }
    }

    fn amounts(long: u64, short: u64) -> LegAmounts {
        LegAmounts { long_amount: long, short_amount: short }
    }

    // ── put before expiry ──

    #[test]
    fn test_put_spread_margin() {
        // 200*10 - 100*min(10,5) = 2000 - 500 = 1500
        let m = put_required_before_expiry(&strikes(100, 200), &amounts(5, 10), 6);
        assert_eq!(m, Decimal::from(1500));
    }

    #[test]
    fn test_put_naked_short_margin() {
        // Pure short put: short_strike * short_amount
        let m = put_required_before_expiry(&strikes(100, 200), &amounts(0, 10), 6);
        assert_eq!(m, Decimal::from(2000));
    }

    #[test]
    fn test_put_fully_hedged_is_free() {
        // Long strike above short strike with full coverage
        let m = put_required_before_expiry(&strikes(300, 200), &amounts(10, 10), 6);
        assert_eq!(m, Decimal::ZERO);
    }

    #[test]
    fn test_put_long_only_is_free() {
        let m = put_required_before_expiry(&strikes(100, 200), &amounts(10, 0), 6);
        assert_eq!(m, Decimal::ZERO);
    }

    // ── call before expiry ──

    #[test]
    fn test_call_spread_margin() {
        // (200-100)*10/200 = 5, naked leg max(10-5,0) = 5 → 5
        let m = call_required_before_expiry(&strikes(200, 100), &amounts(5, 10), 18);
        assert_eq!(m, Decimal::from(5));
    }

    #[test]
    fn test_call_naked_short_margin() {
        // Long strike equals short strike, no long leg: margin is short amount
        let m = call_required_before_expiry(&strikes(100, 100), &amounts(0, 10), 18);
        assert_eq!(m, Decimal::from(10));
    }

    #[test]
    fn test_call_margin_rounds_up() {
        // (300-100)*1/300 = 2/3 → ceil at 18 dp
        let m = call_required_before_expiry(&strikes(300, 100), &amounts(1, 1), 18);
        let exact = Decimal::from(2) / Decimal::from(3);
        assert!(m >= exact);
        assert!(m - exact < Decimal::from_str_exact("0.000000000000000001").unwrap() * Decimal::from(2));
    }

    #[test]
    fn test_call_fully_hedged_is_free() {
        // Long strike below short strike with full coverage
        let m = call_required_before_expiry(&strikes(100, 200), &amounts(10, 10), 18);
        assert_eq!(m, Decimal::ZERO);
    }

    // ── put after expiry ──

    #[test]
    fn test_put_settlement_in_the_money() {
        // (200-150)*10 - (100-150)+*5 = 500 - 0
        let m = put_required_after_expiry(150, &strikes(100, 200), &amounts(5, 10));
        assert_eq!(m, Decimal::from(500));
    }

    #[test]
    fn test_put_settlement_out_of_the_money() {
        let m = put_required_after_expiry(500, &strikes(100, 200), &amounts(5, 10));
        assert_eq!(m, Decimal::ZERO);
    }

    #[test]
    fn test_put_settlement_can_be_negative() {
        // Long leg worth more than short leg at settlement
        let m = put_required_after_expiry(50, &strikes(200, 100), &amounts(10, 5));
        // short: (100-50)*5 = 250, long: (200-50)*10 = 1500
        assert_eq!(m, Decimal::from(-1250));
    }

    // ── call after expiry ──

    #[test]
    fn test_call_settlement_in_underlying_units() {
        // spot 400: short (400-100)*10 = 3000, long (400-200)*5 = 1000
        // (3000-1000)/400 = 5
        let m = call_required_after_expiry(400, &strikes(200, 100), &amounts(5, 10), 18);
        assert_eq!(m, Decimal::from(5));
    }

    #[test]
    fn test_call_settlement_out_of_the_money() {
        let m = call_required_after_expiry(50, &strikes(200, 100), &amounts(5, 10), 18);
        assert_eq!(m, Decimal::ZERO);
    }

    // ── property tests ──

    proptest! {
        #[test]
        fn put_margin_never_negative(
            long_strike in 1u64..5000,
            short_strike in 1u64..5000,
            long_amount in 0u64..5000,
            short_amount in 0u64..5000,
        ) {
            let m = put_required_before_expiry(
                &strikes(long_strike, short_strike),
                &amounts(long_amount, short_amount),
                6,
            );
            prop_assert!(m >= Decimal::ZERO);
        }

        #[test]
        fn call_margin_never_negative(
            long_strike in 1u64..5000,
            short_strike in 1u64..5000,
            long_amount in 0u64..5000,
            short_amount in 0u64..5000,
        ) {
            let m = call_required_before_expiry(
                &strikes(long_strike, short_strike),
                &amounts(long_amount, short_amount),
                18,
            );
            prop_assert!(m >= Decimal::ZERO);
        }

        #[test]
        fn put_margin_covers_any_settlement(
            long_strike in 1u64..5000,
            short_strike in 1u64..5000,
            long_amount in 0u64..5000,
            short_amount in 0u64..5000,
            spot in 0u64..100_000,
        ) {
            // The before-expiry requirement is the worst case over spot,
            // so any realized settlement value must be covered by it.
            let sp = strikes(long_strike, short_strike);
            let am = amounts(long_amount, short_amount);
            let before = put_required_before_expiry(&sp, &am, 6);
            let after = put_required_after_expiry(spot, &sp, &am);
            prop_assert!(after <= before);
        }

        #[test]
        fn call_margin_covers_any_settlement(
            long_strike in 1u64..5000,
            short_strike in 1u64..5000,
            long_amount in 0u64..5000,
            short_amount in 0u64..5000,
            spot in 1u64..100_000,
        ) {
            let sp = strikes(long_strike, short_strike);
            let am = amounts(long_amount, short_amount);
            let before = call_required_before_expiry(&sp, &am, 18);
            let after = call_required_after_expiry(spot, &sp, &am, 18);
            prop_assert!(after <= before);
        }

        #[test]
        fn naked_put_margin_is_full_notional(
            short_strike in 1u64..5000,
            short_amount in 0u64..5000,
        ) {
            let m = put_required_before_expiry(
                &strikes(1, short_strike),
                &amounts(0, short_amount),
                6,
            );
            prop_assert_eq!(m, Decimal::from(short_strike) * Decimal::from(short_amount));
        }
    }
}
