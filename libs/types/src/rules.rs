//! Generation rule axes
//!
//! Each enum is one axis of the combinatorial space the engine covers.
//! The `ALL` arrays fix the iteration order of the cross-product driver,
//! so a battery's case ordering is stable across runs.

use serde::{Deserialize, Serialize};

/// Relation between the long and short strike of a generated vault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrikeRule {
    /// Long strike below short strike (e.g. a put credit spread)
    LongLessThanShort,
    /// Long strike above short strike
    LongMoreThanShort,
    /// Both legs struck at the same price
    LongEqualShort,
}

impl StrikeRule {
    /// All strike rules in driver iteration order.
    pub const ALL: [Self; 3] = [
        Self::LongLessThanShort,
        Self::LongMoreThanShort,
        Self::LongEqualShort,
    ];
}

/// Relation between the long and short option amounts of a generated vault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AmountRule {
    /// Fewer long options than short options
    LongLessThanShort,
    /// More long options than short options
    LongMoreThanShort,
    /// Equal amounts on both legs
    LongEqualShort,
    /// Single-leg vault: short options only
    OnlyShort,
    /// Single-leg vault: long options only
    OnlyLong,
}

impl AmountRule {
    /// All amount rules in driver iteration order.
    pub const ALL: [Self; 5] = [
        Self::LongLessThanShort,
        Self::LongMoreThanShort,
        Self::LongEqualShort,
        Self::OnlyShort,
        Self::OnlyLong,
    ];
}

/// How much collateral a generated vault holds relative to its required margin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CollateralRule {
    /// Less collateral than required (floored at the configured minimum)
    Insufficient,
    /// Exactly the required margin
    Exact,
    /// More collateral than required (capped at the configured maximum)
    Excess,
}

impl CollateralRule {
    /// All collateral rules in driver iteration order.
    pub const ALL: [Self; 3] = [Self::Insufficient, Self::Exact, Self::Excess];
}

/// Where the settlement spot price lands relative to the two strikes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpotRule {
    /// Spot above both strikes
    AboveBothStrikes,
    /// Spot exactly at the higher strike
    EqualHigherStrike,
    /// Spot strictly between the strikes (collapses to the strike when equal)
    BetweenStrikes,
    /// Spot exactly at the lower strike
    EqualLowerStrike,
    /// Spot below both strikes
    BelowBothStrikes,
}

impl SpotRule {
    /// All spot rules in driver iteration order.
    pub const ALL: [Self; 5] = [
        Self::AboveBothStrikes,
        Self::EqualHigherStrike,
        Self::BetweenStrikes,
        Self::EqualLowerStrike,
        Self::BelowBothStrikes,
    ];
}
