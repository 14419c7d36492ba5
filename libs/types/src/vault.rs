//! Strike and amount pairs describing a synthetic vault
//!
//! A vault carries one short leg and an optional long leg of the same
//! underlying. Strikes and amounts are plain integers here; all monetary
//! math happens in `Decimal` inside the margin formulas.

use serde::{Deserialize, Serialize};

/// Strike prices of the short and long option legs.
///
/// Both strikes are >= 1 when produced by the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrikePair {
    pub long_strike: u64,
    pub short_strike: u64,
}

impl StrikePair {
    /// The higher of the two strikes.
    pub fn higher(&self) -> u64 {
        self.long_strike.max(self.short_strike)
    }

    /// The lower of the two strikes.
    pub fn lower(&self) -> u64 {
        self.long_strike.min(self.short_strike)
    }
}

/// Option amounts of the short and long legs.
///
/// Either side may be zero (single-leg vaults).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegAmounts {
    pub long_amount: u64,
    pub short_amount: u64,
}

impl LegAmounts {
    /// True when the vault has no long leg.
    pub fn is_short_only(&self) -> bool {
        self.long_amount == 0
    }

    /// True when the vault has no short leg.
    pub fn is_long_only(&self) -> bool {
        self.short_amount == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_higher_lower() {
        let strikes = StrikePair { long_strike: 100, short_strike: 200 };
        assert_eq!(strikes.higher(), 200);
        assert_eq!(strikes.lower(), 100);

        let equal = StrikePair { long_strike: 150, short_strike: 150 };
        assert_eq!(equal.higher(), 150);
        assert_eq!(equal.lower(), 150);
    }

    #[test]
    fn test_single_leg_flags() {
        let short_only = LegAmounts { long_amount: 0, short_amount: 10 };
        assert!(short_only.is_short_only());
        assert!(!short_only.is_long_only());

        let long_only = LegAmounts { long_amount: 10, short_amount: 0 };
        assert!(long_only.is_long_only());
    }
}
