//! Fixed-point rounding and scaling helpers
//!
//! Uses rust_decimal for deterministic arithmetic (no floating-point errors).
//! Margin values round toward positive infinity at the collateral asset's
//! decimal precision, matching the calculator's over-collateralization bias.

use crate::errors::NumericError;
use rust_decimal::prelude::*;
use rust_decimal::Decimal;

/// Highest decimal precision `to_scaled_string` supports.
///
/// 10^19 still fits in u64; the 18-decimal collateral assets stay below it.
pub const MAX_SCALE_DECIMALS: u32 = 19;

/// Round toward positive infinity (ceiling) at the given decimal precision.
pub fn round_up_dp(value: Decimal, decimals: u32) -> Decimal {
    value.round_dp_with_strategy(decimals, RoundingStrategy::ToPositiveInfinity)
}

/// Scale a decimal value by 10^decimals into its exact fixed-point integer
/// string, the representation compared against the calculator's raw output.
///
/// Fails if the value carries more precision than the target scale.
pub fn to_scaled_string(value: Decimal, decimals: u32) -> Result<String, NumericError> {
    if decimals > MAX_SCALE_DECIMALS {
        return Err(NumericError::UnsupportedPrecision {
            decimals,
            max: MAX_SCALE_DECIMALS,
        });
    }

    let factor = Decimal::from(10u64.pow(decimals));
    let scaled = value
        .checked_mul(factor)
        .ok_or_else(|| NumericError::Overflow {
            value: value.to_string(),
            decimals,
        })?
        .normalize();

    if !scaled.fract().is_zero() {
        return Err(NumericError::NotRepresentable {
            value: value.to_string(),
            decimals,
        });
    }

    Ok(scaled.trunc().normalize().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_round_up_exact_value_unchanged() {
        let v = Decimal::from_str_exact("1.5").unwrap();
        assert_eq!(round_up_dp(v, 1), v);
        assert_eq!(round_up_dp(Decimal::from(42), 18), Decimal::from(42));
    }

    #[test]
    fn test_round_up_ceils_at_precision() {
        // 1/3 at 6 dp ceils to 0.333334
        let third = Decimal::ONE / Decimal::from(3);
        assert_eq!(
            round_up_dp(third, 6),
            Decimal::from_str_exact("0.333334").unwrap()
        );
    }

    #[test]
    fn test_round_up_negative_toward_positive_infinity() {
        // -1/3 at 6 dp ceils to -0.333333 (toward +inf, not away from zero)
        let v = Decimal::from(-1) / Decimal::from(3);
        assert_eq!(
            round_up_dp(v, 6),
            Decimal::from_str_exact("-0.333333").unwrap()
        );
    }

    #[test]
    fn test_scale_integer() {
        assert_eq!(to_scaled_string(Decimal::from(5), 6).unwrap(), "5000000");
        assert_eq!(to_scaled_string(Decimal::ZERO, 18).unwrap(), "0");
    }

    #[test]
    fn test_scale_fractional() {
        let v = Decimal::from_str_exact("1.25").unwrap();
        assert_eq!(to_scaled_string(v, 6).unwrap(), "1250000");
    }

    #[test]
    fn test_scale_negative() {
        let v = Decimal::from_str_exact("-2.5").unwrap();
        assert_eq!(to_scaled_string(v, 6).unwrap(), "-2500000");
    }

    #[test]
    fn test_scale_rejects_excess_precision() {
        let v = Decimal::from_str_exact("0.1234567").unwrap();
        let err = to_scaled_string(v, 6).unwrap_err();
        assert!(matches!(err, NumericError::NotRepresentable { .. }));
    }

    #[test]
    fn test_scale_rejects_unsupported_precision() {
        let err = to_scaled_string(Decimal::ONE, 20).unwrap_err();
        assert!(matches!(err, NumericError::UnsupportedPrecision { .. }));
    }

    proptest! {
        #[test]
        fn scaled_integers_always_representable(n in 0u64..10_000_000, decimals in 0u32..=18) {
            let s = to_scaled_string(Decimal::from(n), decimals).unwrap();
            // Scaled string is the integer followed by `decimals` zeros
            let expected = if n == 0 {
                "0".to_string()
            } else {
                format!("{}{}", n, "0".repeat(decimals as usize))
            };
            prop_assert_eq!(s, expected);
        }
    }
}
