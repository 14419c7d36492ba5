//! Seeded per-axis generators and case creators
//!
//! All randomness flows through one deterministic seeded RNG so that a
//! failing battery can be regenerated exactly from its seed. Each creator
//! pairs one drawn vault configuration with the analytically expected
//! `(net_value, is_excess)` outcome.

use crate::config::EngineConfig;
use margin::requirement;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use types::case::MarginCase;
use types::errors::ConfigError;
use types::rules::{AmountRule, CollateralRule, SpotRule, StrikeRule};
use types::vault::{LegAmounts, StrikePair};

/// Case generator with deterministic seeded RNG.
pub struct CaseGenerator {
    config: EngineConfig,
    rng: ChaCha8Rng,
}

impl CaseGenerator {
    /// Create a generator from validated bounds and an explicit seed.
    pub fn new(config: EngineConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config, rng: ChaCha8Rng::seed_from_u64(seed) })
    }

    /// Generation bounds in effect.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Uniform draw in `[1, max]`; 0 when `max` is 0.
    fn rand_int(&mut self, max: u64) -> u64 {
        if max == 0 {
            0
        } else {
            self.rng.gen_range(1..=max)
        }
    }

    // ── Axis generators ───────────────────────────────────────────────────

    /// Draw a strike pair satisfying the given strike relation.
    ///
    /// The short strike is drawn first, then the long strike is derived by
    /// offsetting a random width, clamped to the configured strike bounds.
    pub fn strike_prices(&mut self, rule: StrikeRule) -> StrikePair {
        let short_strike = self.rand_int(self.config.max_strike_price);
        let width = self.rand_int(self.config.max_strike_width);

        let long_strike = match rule {
            StrikeRule::LongLessThanShort => short_strike
                .saturating_sub(width)
                .max(self.config.min_strike_price),
            StrikeRule::LongMoreThanShort => short_strike
                .saturating_add(width)
                .min(self.config.max_strike_price),
            StrikeRule::LongEqualShort => short_strike,
        };

        StrikePair { long_strike, short_strike }
    }

    /// Draw leg amounts satisfying the given amount relation.
    pub fn amounts(&mut self, rule: AmountRule) -> LegAmounts {
        let mut short_amount = self.rand_int(self.config.max_amount);
        let diff = self.rand_int(self.config.max_amount_difference);

        let long_amount = match rule {
            AmountRule::LongLessThanShort => {
                short_amount.saturating_sub(diff).max(self.config.min_amount)
            }
            AmountRule::LongMoreThanShort => {
                short_amount.saturating_add(diff).min(self.config.max_amount)
            }
            AmountRule::LongEqualShort => short_amount,
            AmountRule::OnlyShort => 0,
            AmountRule::OnlyLong => {
                let long = short_amount;
                short_amount = 0;
                long
            }
        };

        LegAmounts { long_amount, short_amount }
    }

    /// Derive a collateral balance from the required margin per the rule.
    fn apply_collateral_rule(&mut self, rule: CollateralRule, required: Decimal) -> Decimal {
        match rule {
            CollateralRule::Insufficient => {
                let removable = required.trunc().to_u64().unwrap_or(0);
                let deficit = Decimal::from(self.rand_int(removable));
                (required - deficit).max(Decimal::from(self.config.min_collateral))
            }
            CollateralRule::Exact => required,
            CollateralRule::Excess => {
                let surplus = Decimal::from(self.rand_int(self.config.max_collateral));
                (required + surplus).min(Decimal::from(self.config.max_collateral))
            }
        }
    }

    /// Pick a settlement spot price in the bucket the rule names, relative
    /// to the (possibly swapped) high/low strikes.
    fn pick_spot(&mut self, rule: SpotRule, strikes: &StrikePair) -> u64 {
        let high = strikes.higher();
        let low = strikes.lower();

        match rule {
            SpotRule::AboveBothStrikes => self
                .rand_int(self.config.max_spot)
                .saturating_add(high)
                .min(self.config.max_spot),
            SpotRule::EqualHigherStrike => high,
            SpotRule::BetweenStrikes => self.rand_int(high - low) + low,
            SpotRule::EqualLowerStrike => low,
            SpotRule::BelowBothStrikes => self.rand_int(low).max(self.config.min_spot),
        }
    }

    // ── Case creators: before expiry ──────────────────────────────────────

    /// Build a before-expiry put case under the given collateral rule.
    ///
    /// `net_value` is the absolute collateral/margin difference; `is_excess`
    /// is true iff collateral covers the requirement.
    pub fn put_case_before_expiry(
        &mut self,
        rule: CollateralRule,
        strikes: &StrikePair,
        amounts: &LegAmounts,
    ) -> MarginCase {
        let required =
            requirement::put_required_before_expiry(strikes, amounts, self.config.put_decimals);
        self.before_expiry_case(rule, strikes, amounts, required)
    }

    /// Build a before-expiry call case under the given collateral rule.
    pub fn call_case_before_expiry(
        &mut self,
        rule: CollateralRule,
        strikes: &StrikePair,
        amounts: &LegAmounts,
    ) -> MarginCase {
        let required =
            requirement::call_required_before_expiry(strikes, amounts, self.config.call_decimals);
        self.before_expiry_case(rule, strikes, amounts, required)
    }

    fn before_expiry_case(
        &mut self,
        rule: CollateralRule,
        strikes: &StrikePair,
        amounts: &LegAmounts,
        required: Decimal,
    ) -> MarginCase {
        let collateral = self.apply_collateral_rule(rule, required);
        let net = collateral - required;

        MarginCase {
            short_amount: amounts.short_amount,
            long_amount: amounts.long_amount,
            short_strike: strikes.short_strike,
            long_strike: strikes.long_strike,
            collateral,
            net_value: net.abs(),
            is_excess: net >= Decimal::ZERO,
            oracle_price: 0,
        }
    }

    // ── Case creators: after expiry ───────────────────────────────────────

    /// Build an after-expiry put case at a spot price picked per the rule.
    ///
    /// `net_value` is signed: collateral minus the realized settlement
    /// requirement at the chosen spot.
    pub fn put_case_after_expiry(
        &mut self,
        rule: SpotRule,
        strikes: &StrikePair,
        amounts: &LegAmounts,
        collateral: Decimal,
    ) -> MarginCase {
        let spot = self.pick_spot(rule, strikes);
        let required = requirement::put_required_after_expiry(spot, strikes, amounts);
        Self::after_expiry_case(strikes, amounts, collateral, required, spot)
    }

    /// Build an after-expiry call case at a spot price picked per the rule.
    pub fn call_case_after_expiry(
        &mut self,
        rule: SpotRule,
        strikes: &StrikePair,
        amounts: &LegAmounts,
        collateral: Decimal,
    ) -> MarginCase {
        let spot = self.pick_spot(rule, strikes);
        let required = requirement::call_required_after_expiry(
            spot,
            strikes,
            amounts,
            self.config.call_decimals,
        );
        Self::after_expiry_case(strikes, amounts, collateral, required, spot)
    }

    fn after_expiry_case(
        strikes: &StrikePair,
        amounts: &LegAmounts,
        collateral: Decimal,
        required: Decimal,
        spot: u64,
    ) -> MarginCase {
        let net = collateral - required;

        MarginCase {
            short_amount: amounts.short_amount,
            long_amount: amounts.long_amount,
            short_strike: strikes.short_strike,
            long_strike: strikes.long_strike,
            collateral,
            net_value: net,
            is_excess: net >= Decimal::ZERO,
            oracle_price: spot,
        }
    }
}
