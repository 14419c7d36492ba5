//! Failure-report formatting and verdict verification
//!
//! The harness contract: the calculator under test returns a
//! `(net_value, is_excess)` verdict per case, compared against the
//! expected outcome by exact equality on the scaled fixed-point string.
//! Mismatches carry the full human-readable case report.

use std::fmt::Write as _;

use thiserror::Error;
use types::case::{MarginCase, Verdict};
use types::errors::NumericError;
use types::numeric::to_scaled_string;

/// Verification failure for one generated case.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CheckError {
    #[error("{0}")]
    Mismatch(String),

    #[error("Scaling error: {0}")]
    Numeric(#[from] NumericError),
}

/// Format a human-readable failure report for a generated case, optionally
/// including the verdict actually observed from the calculator under test.
pub fn case_to_string(case: &MarginCase, observed: Option<&Verdict>) -> String {
    let mut out = String::from("\n CASE FAILED:\n");
    let _ = writeln!(out, " Long Strike = ${}", case.long_strike);
    let _ = writeln!(out, " Short Strike = ${}", case.short_strike);
    let _ = writeln!(out, " Long Amount = {}", case.long_amount);
    let _ = writeln!(out, " Short Amount = {}", case.short_amount);
    let _ = writeln!(out, " Collateral = {}", case.collateral);
    if case.is_expiry_case() {
        let _ = writeln!(out, " Oracle Price = {}", case.oracle_price);
    }
    out.push_str("\n EXPECTED RESULT:\n");
    let _ = writeln!(out, " netValue = {}", case.net_value);
    let _ = writeln!(out, " isExcess = {}", case.is_excess);
    if let Some(verdict) = observed {
        out.push_str("\n OBSERVED RESULT:\n");
        let _ = writeln!(out, " netValue = {}", verdict.net_value);
        let _ = writeln!(out, " isExcess = {}", verdict.is_excess);
    }
    out
}

/// Compare an observed verdict against a generated case.
///
/// Net values are compared by their scaled fixed-point string at the
/// collateral asset's precision, matching how the calculator's raw output
/// is asserted on. Returns the formatted case report on mismatch.
pub fn verify_case(
    case: &MarginCase,
    observed: &Verdict,
    decimals: u32,
) -> Result<(), CheckError> {
    let expected = to_scaled_string(case.net_value, decimals)?;
    let actual = to_scaled_string(observed.net_value, decimals)?;

    if expected != actual || case.is_excess != observed.is_excess {
        return Err(CheckError::Mismatch(case_to_string(case, Some(observed))));
    }
    Ok(())
}
