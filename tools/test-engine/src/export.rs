//! Battery JSON export
//!
//! Serializes a generated battery, its seed, and the bounds that produced
//! it, so a failing run can be archived and regenerated exactly.

use crate::config::EngineConfig;
use serde::{Deserialize, Serialize};
use types::case::CaseSet;

/// Complete export of one generated battery.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatteryExport {
    pub version: String,
    pub seed: u64,
    pub config: EngineConfig,
    pub before_expiry_put_count: usize,
    pub after_expiry_put_count: usize,
    pub before_expiry_call_count: usize,
    pub after_expiry_call_count: usize,
    pub cases: CaseSet,
}

/// Build a complete battery export.
pub fn build_export(cases: &CaseSet, seed: u64, config: &EngineConfig) -> BatteryExport {
    BatteryExport {
        version: crate::VERSION.to_string(),
        seed,
        config: config.clone(),
        before_expiry_put_count: cases.before_expiry_puts.len(),
        after_expiry_put_count: cases.after_expiry_puts.len(),
        before_expiry_call_count: cases.before_expiry_calls.len(),
        after_expiry_call_count: cases.after_expiry_calls.len(),
        cases: cases.clone(),
    }
}

/// Export a battery as pretty-printed JSON.
pub fn export_json(export: &BatteryExport) -> String {
    serde_json::to_string_pretty(export).unwrap_or_default()
}

/// Write an export to a file path.
pub fn write_to_file(export: &BatteryExport, path: &str) -> std::io::Result<()> {
    let json = export_json(export);
    std::fs::write(path, json)
}
