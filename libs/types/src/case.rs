//! Generated case records and verdicts
//!
//! A `MarginCase` pairs one synthetic vault configuration with the
//! analytically expected outcome of the margin calculator under test.
//! A full generation pass produces a `CaseSet` holding the four ordered
//! batteries (puts/calls, before/after expiry).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One generated vault configuration with its expected outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarginCase {
    pub short_amount: u64,
    pub long_amount: u64,
    pub short_strike: u64,
    pub long_strike: u64,
    /// Collateral held by the vault
    pub collateral: Decimal,
    /// Expected excess/deficit reported by the calculator.
    /// Absolute value for before-expiry cases, signed for after-expiry cases.
    pub net_value: Decimal,
    /// Expected solvency verdict: collateral covers the required margin
    pub is_excess: bool,
    /// Settlement price used for after-expiry cases; 0 for before-expiry cases
    pub oracle_price: u64,
}

impl MarginCase {
    /// True when this case exercises post-expiry settlement math.
    pub fn is_expiry_case(&self) -> bool {
        self.oracle_price > 0
    }
}

/// The `(net_value, is_excess)` pair returned by the calculator under test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub net_value: Decimal,
    pub is_excess: bool,
}

/// One full generation pass: four ordered case batteries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CaseSet {
    pub before_expiry_puts: Vec<MarginCase>,
    pub after_expiry_puts: Vec<MarginCase>,
    pub before_expiry_calls: Vec<MarginCase>,
    pub after_expiry_calls: Vec<MarginCase>,
}

impl CaseSet {
    /// Total number of cases across all four batteries.
    pub fn total(&self) -> usize {
        self.before_expiry_puts.len()
            + self.after_expiry_puts.len()
            + self.before_expiry_calls.len()
            + self.after_expiry_calls.len()
    }

    /// True when no cases have been generated.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}
