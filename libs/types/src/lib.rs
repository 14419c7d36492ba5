//! Types library for the options margin test engine
//!
//! This library provides all core type definitions used across the test
//! engine, ensuring type safety and deterministic behavior when generated
//! vault configurations are compared against an external margin calculator.
//!
//! # Modules
//! - `rules`: Generation rule axes (strike, amount, collateral, spot)
//! - `vault`: Strike and amount pairs describing a synthetic vault
//! - `case`: Generated case records, the case aggregate, and verdicts
//! - `numeric`: Fixed-point rounding and scaling helpers
//! - `errors`: Error taxonomy

// Public modules
pub mod case;
pub mod errors;
pub mod numeric;
pub mod rules;
pub mod vault;

// Library version constant
pub const LIB_VERSION: &str = "1.0.0";

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::case::*;
    pub use crate::errors::*;
    pub use crate::numeric::*;
    pub use crate::rules::*;
    pub use crate::vault::*;
}
