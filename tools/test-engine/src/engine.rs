//! Cross-product battery driver
//!
//! Walks every strike-rule × amount-rule × collateral-rule combination,
//! drawing one vault per combination and emitting paired put and call
//! cases. Combinations landing on exact collateral additionally expand
//! into all five spot-price buckets for post-expiry settlement cases,
//! reusing the exact collateral as the settled vault's balance.

use crate::config::EngineConfig;
use crate::generator::CaseGenerator;
use types::case::CaseSet;
use types::errors::ConfigError;
use types::rules::{AmountRule, CollateralRule, SpotRule, StrikeRule};

/// Number of before-expiry cases per option family in one battery.
pub const BEFORE_EXPIRY_CASES: usize =
    StrikeRule::ALL.len() * AmountRule::ALL.len() * CollateralRule::ALL.len();

/// Number of after-expiry cases per option family in one battery.
pub const AFTER_EXPIRY_CASES: usize =
    StrikeRule::ALL.len() * AmountRule::ALL.len() * SpotRule::ALL.len();

/// Generate one full battery from the given bounds and seed.
///
/// The same `(config, seed)` pair always produces an identical battery;
/// battery lengths and rule coverage are fixed regardless of seed.
pub fn generate_battery(config: &EngineConfig, seed: u64) -> Result<CaseSet, ConfigError> {
    let mut generator = CaseGenerator::new(config.clone(), seed)?;
    let mut set = CaseSet::default();

    for &strike_rule in StrikeRule::ALL.iter() {
        for &amount_rule in AmountRule::ALL.iter() {
            for &collateral_rule in CollateralRule::ALL.iter() {
                let strikes = generator.strike_prices(strike_rule);
                let amounts = generator.amounts(amount_rule);

                let put_case =
                    generator.put_case_before_expiry(collateral_rule, &strikes, &amounts);
                let call_case =
                    generator.call_case_before_expiry(collateral_rule, &strikes, &amounts);

                // Post-expiry cases assume the vault was exactly collateralized
                // at expiry, so only the exact-collateral combination expands.
                if collateral_rule == CollateralRule::Exact {
                    for &spot_rule in SpotRule::ALL.iter() {
                        set.after_expiry_puts.push(generator.put_case_after_expiry(
                            spot_rule,
                            &strikes,
                            &amounts,
                            put_case.collateral,
                        ));
                        set.after_expiry_calls.push(generator.call_case_after_expiry(
                            spot_rule,
                            &strikes,
                            &amounts,
                            call_case.collateral,
                        ));
                    }
                }

                set.before_expiry_puts.push(put_case);
                set.before_expiry_calls.push(call_case);
            }
        }
    }

    tracing::debug!(
        seed,
        before_expiry_puts = set.before_expiry_puts.len(),
        after_expiry_puts = set.after_expiry_puts.len(),
        before_expiry_calls = set.before_expiry_calls.len(),
        after_expiry_calls = set.after_expiry_calls.len(),
        "generated margin case battery"
    );

    Ok(set)
}
