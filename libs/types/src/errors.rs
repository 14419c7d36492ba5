//! Error types for the test engine
//!
//! Error taxonomy using thiserror. The generation math itself is total;
//! errors arise only from invalid configuration bounds or from scaling
//! values that do not fit the target fixed-point precision.

use thiserror::Error;

/// Top-level engine error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Numeric error: {0}")]
    Numeric(#[from] NumericError),
}

/// Invalid generator configuration bounds
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Strike bounds invalid: min {min} must be >= 1 and <= max {max}")]
    StrikeBounds { min: u64, max: u64 },

    #[error("Collateral bounds invalid: min {min} must be <= max {max}")]
    CollateralBounds { min: u64, max: u64 },

    #[error("Spot bounds invalid: max spot {max_spot} must cover max strike {max_strike}")]
    SpotRange { max_spot: u64, max_strike: u64 },

    #[error("{field} must be at least 1")]
    ZeroBound { field: &'static str },

    #[error("Unsupported decimal precision {decimals} (max {max})")]
    Precision { decimals: u32, max: u32 },
}

/// Fixed-point scaling failures
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NumericError {
    #[error("Decimal precision {decimals} exceeds supported maximum {max}")]
    UnsupportedPrecision { decimals: u32, max: u32 },

    #[error("Value {value} overflows when scaled to {decimals} decimals")]
    Overflow { value: String, decimals: u32 },

    #[error("Value {value} is not representable at {decimals} decimals")]
    NotRepresentable { value: String, decimals: u32 },
}
