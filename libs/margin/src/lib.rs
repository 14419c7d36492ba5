//! Margin requirement formulas
//!
//! Independent reference implementation of the margin calculator's math,
//! used to derive expected outcomes for generated vault configurations.
//!
//! Provides intrinsic-value helpers and the four requirement formulas
//! (puts/calls, before/after expiry). All computations are pure and use
//! fixed-point Decimal arithmetic.

pub mod intrinsic;
pub mod requirement;
