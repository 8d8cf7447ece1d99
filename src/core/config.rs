//! Economy configuration: tier chain, rune pool, and rates.
//!
//! The defaults are the shipped balance. A JSON file passed with `--config`
//! can override any subset of fields; anything missing keeps its default.

use super::constants::*;
use super::error::{EconomyError, EconomyResult};
use crate::runes::RuneDefinition;
use crate::tiers::{TierDefinition, TierUpRule};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EconomyConfig {
    pub tiers: Vec<TierDefinition>,
    /// Rarities in draw order. The last one is the fallback rarity.
    pub runes: Vec<RuneDefinition>,
    /// Tier-0 units spent per rune roll.
    pub roll_cost: f64,
    pub tick_interval_ms: u64,
    pub speed_multiplier: f64,
    pub starting_currency: f64,
    pub tier_up_currency: f64,
    pub tier_up_grant: f64,
}

impl Default for EconomyConfig {
    fn default() -> Self {
        Self {
            tiers: DEFAULT_TIERS
                .iter()
                .map(|&(name, base_cost, scaling)| TierDefinition::new(name, base_cost, scaling))
                .collect(),
            runes: DEFAULT_RUNES
                .iter()
                .map(|&(key, label, weight, boosts)| RuneDefinition::new(key, label, weight, boosts))
                .collect(),
            roll_cost: ROLL_COST,
            tick_interval_ms: TICK_INTERVAL_MS,
            speed_multiplier: COIN_SPEED_MULTIPLIER,
            starting_currency: STARTING_CURRENCY,
            tier_up_currency: TIER_UP_CURRENCY,
            tier_up_grant: TIER_UP_GRANT,
        }
    }
}

impl EconomyConfig {
    /// Parses, clamps tier definitions, then validates.
    pub fn from_json(json: &str) -> EconomyResult<Self> {
        let mut config: EconomyConfig = serde_json::from_str(json)?;
        config.sanitize();
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> EconomyResult<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> EconomyResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn tier_up_rule(&self) -> TierUpRule {
        TierUpRule {
            currency_after: self.tier_up_currency,
            grant: self.tier_up_grant,
        }
    }

    /// Applies the same clamps `TierDefinition::new` does.
    pub fn sanitize(&mut self) {
        for tier in &mut self.tiers {
            tier.sanitize();
        }
    }

    /// Checks the rune pool and rates.
    ///
    /// An empty tier list or empty rune pool passes here; the operations that
    /// need them refuse with a configuration error instead.
    pub fn validate(&self) -> EconomyResult<()> {
        let mut keys = HashSet::new();
        for rune in &self.runes {
            if !keys.insert(rune.key.as_str()) {
                return invalid(format!("duplicate rune rarity '{}'", rune.key));
            }
            if !(rune.weight.is_finite() && rune.weight > 0.0) {
                return invalid(format!(
                    "rune '{}' has weight {}, expected a positive number",
                    rune.key, rune.weight
                ));
            }
            for boost in &rune.boosts {
                if !(boost.multiplier.is_finite() && boost.multiplier > 0.0) {
                    return invalid(format!(
                        "rune '{}' has multiplier {} for tier {}, expected a positive number",
                        rune.key, boost.multiplier, boost.tier_index
                    ));
                }
                if boost.tier_index >= self.tiers.len() {
                    return invalid(format!(
                        "rune '{}' boosts tier {} but only {} tiers exist",
                        rune.key,
                        boost.tier_index,
                        self.tiers.len()
                    ));
                }
            }
        }
        if !(self.roll_cost.is_finite() && self.roll_cost >= 0.0) {
            return invalid(format!("roll cost {} must be non-negative", self.roll_cost));
        }
        if self.tick_interval_ms == 0 {
            return invalid("tick interval must be at least 1 ms".to_string());
        }
        if !(self.speed_multiplier.is_finite() && self.speed_multiplier >= 0.0) {
            return invalid(format!(
                "speed multiplier {} must be non-negative",
                self.speed_multiplier
            ));
        }
        for (name, value) in [
            ("starting currency", self.starting_currency),
            ("tier-up currency", self.tier_up_currency),
            ("tier-up grant", self.tier_up_grant),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return invalid(format!("{} {} must be non-negative", name, value));
            }
        }
        Ok(())
    }
}

fn invalid(message: String) -> EconomyResult<()> {
    Err(EconomyError::InvalidConfig(message))
}
