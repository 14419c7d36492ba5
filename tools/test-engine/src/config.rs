//! Generation bounds and decimal precisions

use serde::{Deserialize, Serialize};
use types::errors::ConfigError;
use types::numeric::MAX_SCALE_DECIMALS;

/// Bounds for every randomized quantity the engine draws, plus the decimal
/// precisions of the two collateral assets (cash for puts, underlying for
/// calls).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Upper bound for generated strike prices
    pub max_strike_price: u64,
    /// Lower bound for generated strike prices
    pub min_strike_price: u64,
    /// Upper bound for the distance between the two strikes
    pub max_strike_width: u64,
    /// Upper bound for generated leg amounts
    pub max_amount: u64,
    /// Lower bound for generated leg amounts
    pub min_amount: u64,
    /// Upper bound for the distance between the two leg amounts
    pub max_amount_difference: u64,
    /// Cap applied to excess collateral
    pub max_collateral: u64,
    /// Floor applied to insufficient collateral
    pub min_collateral: u64,
    /// Upper bound for settlement spot prices
    pub max_spot: u64,
    /// Lower bound for settlement spot prices
    pub min_spot: u64,
    /// Decimal precision of the put collateral asset (cash)
    pub put_decimals: u32,
    /// Decimal precision of the call collateral asset (underlying)
    pub call_decimals: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_strike_price: 5_000,
            min_strike_price: 1,
            max_strike_width: 5_000,
            max_amount: 5_000,
            min_amount: 0,
            max_amount_difference: 5_000,
            max_collateral: 10_000,
            min_collateral: 0,
            max_spot: 100_000_000_000,
            min_spot: 0,
            put_decimals: 6,
            call_decimals: 18,
        }
    }
}

impl EngineConfig {
    /// Default bounds with custom collateral asset precisions.
    pub fn with_decimals(put_decimals: u32, call_decimals: u32) -> Self {
        Self { put_decimals, call_decimals, ..Self::default() }
    }

    /// Check the bounds are mutually consistent.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_strike_price < 1 || self.min_strike_price > self.max_strike_price {
            return Err(ConfigError::StrikeBounds {
                min: self.min_strike_price,
                max: self.max_strike_price,
            });
        }
        if self.max_strike_width < 1 {
            return Err(ConfigError::ZeroBound { field: "max_strike_width" });
        }
        if self.max_amount < 1 {
            return Err(ConfigError::ZeroBound { field: "max_amount" });
        }
        if self.max_amount_difference < 1 {
            return Err(ConfigError::ZeroBound { field: "max_amount_difference" });
        }
        if self.min_collateral > self.max_collateral {
            return Err(ConfigError::CollateralBounds {
                min: self.min_collateral,
                max: self.max_collateral,
            });
        }
        if self.max_spot < self.max_strike_price {
            return Err(ConfigError::SpotRange {
                max_spot: self.max_spot,
                max_strike: self.max_strike_price,
            });
        }
        for decimals in [self.put_decimals, self.call_decimals] {
            if decimals > MAX_SCALE_DECIMALS {
                return Err(ConfigError::Precision {
                    decimals,
                    max: MAX_SCALE_DECIMALS,
                });
            }
        }
        Ok(())
    }
}
