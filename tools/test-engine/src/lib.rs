//! Margin Test-Case Generation Engine
//!
//! Produces randomized-but-reproducible batteries of synthetic vault
//! configurations paired with analytically derived expected outcomes,
//! covering the full combinatorial space of strike relation × amount
//! relation × collateral sufficiency × (post-expiry) spot-price bucket.
//! Generated cases are cross-checked by an external harness against a
//! separately implemented margin calculator.
//!
//! # Modules
//! - `config` — Generation bounds and decimal precisions
//! - `generator` — Seeded per-axis generators and case creators
//! - `engine` — Cross-product driver producing a full battery
//! - `report` — Failure-report formatting and verdict verification
//! - `export` — Battery JSON export

pub mod config;
pub mod engine;
pub mod export;
pub mod generator;
pub mod report;

/// Crate version constant
pub const VERSION: &str = "1.0.0";
