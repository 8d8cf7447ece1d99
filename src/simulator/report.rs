//! Simulation report generation.

use super::runner::RunStats;
use crate::core::EconomyConfig;
use serde::Serialize;
use std::collections::BTreeMap;

/// Average rune count for one rarity across all runs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RarityAverage {
    pub key: String,
    pub label: String,
    pub average: f64,
}

fn mean(runs: &[RunStats], f: impl Fn(&RunStats) -> f64) -> f64 {
    runs.iter().map(f).sum::<f64>() / runs.len().max(1) as f64
}

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub seconds_per_run: f64,
    pub tier_names: Vec<String>,

    // Progression
    pub avg_highest_tier: f64,
    pub best_highest_tier: usize,
    /// Runs per highest tier reached (1-based, 0 = nothing owned).
    pub highest_tier_distribution: BTreeMap<usize, u32>,
    pub avg_tier_ups: f64,
    pub avg_tier_zero_purchases: f64,

    // Runes
    pub avg_rolls: f64,
    pub avg_runes_by_rarity: Vec<RarityAverage>,

    // Economy at the end of a run
    pub avg_final_currency: f64,
    pub avg_final_coins_per_second: f64,

    #[serde(skip)]
    pub run_stats: Vec<RunStats>,
}

impl SimReport {
    /// Create a report from completed run stats.
    pub fn from_runs(economy: &EconomyConfig, runs: Vec<RunStats>, seconds_per_run: f64) -> Self {
        let num_runs = runs.len() as u32;

        let avg_highest_tier = mean(&runs, |r| r.highest_tier as f64);
        let avg_tier_ups = mean(&runs, |r| r.tier_ups as f64);
        let avg_tier_zero_purchases = mean(&runs, |r| r.tier_zero_purchases as f64);
        let avg_rolls = mean(&runs, |r| r.rolls as f64);
        let avg_final_currency = mean(&runs, |r| r.final_currency);
        let avg_final_coins_per_second = mean(&runs, |r| r.final_coins_per_second);

        let avg_runes_by_rarity = economy
            .runes
            .iter()
            .map(|def| RarityAverage {
                key: def.key.clone(),
                label: def.label.clone(),
                average: mean(&runs, |r| r.runes.get(&def.key).copied().unwrap_or(0) as f64),
            })
            .collect();

        let mut highest_tier_distribution = BTreeMap::new();
        for run in &runs {
            *highest_tier_distribution.entry(run.highest_tier).or_insert(0) += 1;
        }
        let best_highest_tier = runs.iter().map(|r| r.highest_tier).max().unwrap_or(0);

        Self {
            num_runs,
            seconds_per_run,
            tier_names: economy.tiers.iter().map(|t| t.name.clone()).collect(),
            avg_highest_tier,
            best_highest_tier,
            highest_tier_distribution,
            avg_tier_ups,
            avg_tier_zero_purchases,
            avg_rolls,
            avg_runes_by_rarity,
            avg_final_currency,
            avg_final_coins_per_second,
            run_stats: runs,
        }
    }

    fn tier_label(&self, highest_tier: usize) -> String {
        match highest_tier {
            0 => "(none)".to_string(),
            n => self
                .tier_names
                .get(n - 1)
                .cloned()
                .unwrap_or_else(|| format!("Item {}", n)),
        }
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {}, {:.0} simulated seconds each\n\n",
            self.num_runs, self.seconds_per_run
        ));

        report.push_str("── PROGRESSION ──────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Avg Highest Tier:    {:.2}\n",
            self.avg_highest_tier
        ));
        report.push_str(&format!(
            "  Best Highest Tier:   {}\n",
            self.tier_label(self.best_highest_tier)
        ));
        report.push_str(&format!("  Avg Tier-ups:        {:.1}\n", self.avg_tier_ups));
        report.push_str(&format!(
            "  Avg Tier-0 Buys:     {:.1}\n\n",
            self.avg_tier_zero_purchases
        ));

        report.push_str("── HIGHEST TIER REACHED ─────────────────────────────────────────\n");
        for (&tier, &count) in &self.highest_tier_distribution {
            let pct = (count as f64 / self.num_runs.max(1) as f64) * 100.0;
            let bar: String = "█".repeat((pct / 5.0) as usize);
            report.push_str(&format!(
                "  {:<10} {:>5.1}% {}\n",
                self.tier_label(tier),
                pct,
                bar
            ));
        }
        report.push('\n');

        report.push_str("── RUNES ────────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Rolls:           {:.1}\n", self.avg_rolls));
        for rarity in &self.avg_runes_by_rarity {
            report.push_str(&format!(
                "  {:<10}           {:.2}\n",
                rarity.label, rarity.average
            ));
        }
        report.push('\n');

        report.push_str("── ECONOMY ──────────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Avg Final Coins:     {:.2}\n",
            self.avg_final_currency
        ));
        report.push_str(&format!(
            "  Avg Final Coins/sec: {:.3}\n",
            self.avg_final_coins_per_second
        ));

        report
    }

    /// Generate a JSON report.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
