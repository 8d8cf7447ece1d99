//! Simulation runner driving the real `Economy` with a greedy autoplayer.
//!
//! Statistics are collected from the `Purchase` and `RuneRoll` values the
//! economy returns, so the simulator never duplicates game rules.

use super::config::SimConfig;
use super::report::SimReport;
use crate::core::{Economy, EconomyResult};
use crate::runes::RuneRoll;
use crate::tiers::Purchase;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use std::collections::BTreeMap;

/// Upper bound on autoplayer actions between two steps.
const MAX_ACTIONS_PER_STEP: u32 = 10_000;

/// Statistics for a single simulation run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunStats {
    /// 1-based number of the highest tier owned at any step end (0 = none).
    pub highest_tier: usize,
    pub tier_ups: u32,
    pub tier_zero_purchases: u32,
    pub rolls: u32,
    /// Runes obtained, keyed by rarity key.
    pub runes: BTreeMap<String, u32>,
    pub final_currency: f64,
    pub final_coins_per_second: f64,
    pub seconds_simulated: f64,
}

impl RunStats {
    fn record_purchase(&mut self, purchase: &Purchase) {
        if purchase.tier == 0 {
            self.tier_zero_purchases += 1;
        } else {
            self.tier_ups += 1;
        }
    }

    fn record_roll(&mut self, roll: &RuneRoll) {
        self.rolls += 1;
        *self.runes.entry(roll.key.clone()).or_insert(0) += 1;
    }

    fn observe(&mut self, economy: &Economy) {
        if let Some(index) = economy.tiers().iter().rposition(|t| t.amount > 0.0) {
            self.highest_tier = self.highest_tier.max(index + 1);
        }
    }
}

/// Run the full batch and return the aggregated report. Fails before any
/// run is played if the economy configuration is invalid.
pub fn run_simulation(config: &SimConfig) -> EconomyResult<SimReport> {
    let template = Economy::try_new(config.economy.clone())?;
    let mut all_runs = Vec::with_capacity(config.runs as usize);

    for run_idx in 0..config.runs {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(run_idx as u64)),
            None => ChaCha8Rng::from_entropy(),
        };

        let stats = play_run(template.clone(), config, &mut rng);
        if config.verbosity >= 2 {
            println!(
                "Run {}/{} - highest tier {}, tier-ups {}, rolls {}, coins {:.2}",
                run_idx + 1,
                config.runs,
                stats.highest_tier,
                stats.tier_ups,
                stats.rolls,
                stats.final_currency
            );
        }
        all_runs.push(stats);
    }

    Ok(SimReport::from_runs(&config.economy, all_runs, config.seconds))
}

/// Plays one run of `config.seconds` simulated seconds.
pub fn simulate_single_run<R: Rng>(config: &SimConfig, rng: &mut R) -> RunStats {
    play_run(Economy::new(config.economy.clone()), config, rng)
}

fn play_run<R: Rng>(mut economy: Economy, config: &SimConfig, rng: &mut R) -> RunStats {
    let mut stats = RunStats::default();
    let step = config.effective_step();
    let steps = config.steps();

    economy.advance(0.0);
    for _ in 0..steps {
        economy.advance(step);
        autoplay(&mut economy, config.roll_threshold, rng, &mut stats);
        stats.observe(&economy);
    }

    stats.final_currency = economy.currency();
    stats.final_coins_per_second = economy.coins_per_second();
    stats.seconds_simulated = steps as f64 * step;
    stats
}

/// Greedy policy: buy the highest affordable tier (tier 0 last), otherwise
/// roll a rune once tier-0 stock reaches the threshold. Repeats until no
/// action is possible.
fn autoplay<R: Rng>(economy: &mut Economy, roll_threshold: f64, rng: &mut R, stats: &mut RunStats) {
    for _ in 0..MAX_ACTIONS_PER_STEP {
        if let Some(index) = highest_affordable(economy) {
            match economy.buy(index) {
                Ok(purchase) => stats.record_purchase(&purchase),
                Err(_) => break,
            }
            continue;
        }

        let stock = economy.tier(0).map_or(0.0, |t| t.amount);
        let can_roll = !economy.rune_pool().is_empty()
            && stock >= roll_threshold
            && stock >= economy.roll_cost();
        if !can_roll {
            break;
        }
        match economy.roll_rune_with(rng) {
            Ok(roll) => stats.record_roll(&roll),
            Err(_) => break,
        }
    }
}

fn highest_affordable(economy: &Economy) -> Option<usize> {
    let tiers = economy.tiers();
    (0..tiers.len()).rev().find(|&index| {
        let price = tiers[index].current_price as f64;
        if index == 0 {
            economy.currency() >= price
        } else {
            tiers[index - 1].amount >= price
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EconomyConfig;

    fn config(seconds: f64) -> SimConfig {
        SimConfig {
            runs: 3,
            seconds,
            step_seconds: 1.0,
            seed: Some(7),
            verbosity: 0,
            ..Default::default()
        }
    }

    #[test]
    fn test_zero_seconds_takes_no_actions() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let stats = simulate_single_run(&config(0.0), &mut rng);
        assert_eq!(stats.highest_tier, 0);
        assert_eq!(stats.tier_zero_purchases, 0);
        assert!((stats.final_currency - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_greedy_player_reaches_second_tier() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let stats = simulate_single_run(&config(900.0), &mut rng);
        assert!(stats.tier_ups >= 1);
        assert!(stats.highest_tier >= 2);
        assert!((stats.seconds_simulated - 900.0).abs() < 1e-9);
    }

    #[test]
    fn test_same_seed_same_runs() {
        let cheap_rolls = SimConfig {
            roll_threshold: 1.0,
            economy: EconomyConfig {
                roll_cost: 1.0,
                ..Default::default()
            },
            ..config(300.0)
        };
        let a = run_simulation(&cheap_rolls).unwrap();
        let b = run_simulation(&cheap_rolls).unwrap();
        assert_eq!(a.run_stats, b.run_stats);
    }

    #[test]
    fn test_every_roll_lands_in_inventory() {
        let cheap_rolls = SimConfig {
            roll_threshold: 1.0,
            economy: EconomyConfig {
                roll_cost: 1.0,
                ..Default::default()
            },
            ..config(300.0)
        };
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let stats = simulate_single_run(&cheap_rolls, &mut rng);
        assert!(stats.rolls > 0);
        assert_eq!(stats.runes.values().sum::<u32>(), stats.rolls);
    }

    #[test]
    fn test_invalid_economy_is_refused() {
        let zero_weight = SimConfig {
            economy: EconomyConfig {
                runes: vec![crate::runes::RuneDefinition::new("dud", "Dud", 0.0, &[])],
                ..Default::default()
            },
            ..config(60.0)
        };
        assert!(matches!(
            run_simulation(&zero_weight),
            Err(crate::core::EconomyError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_empty_pool_never_rolls() {
        let no_runes = SimConfig {
            roll_threshold: 0.0,
            economy: EconomyConfig {
                runes: Vec::new(),
                ..Default::default()
            },
            ..config(300.0)
        };
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let stats = simulate_single_run(&no_runes, &mut rng);
        assert_eq!(stats.rolls, 0);
        assert!(stats.runes.is_empty());
    }
}
