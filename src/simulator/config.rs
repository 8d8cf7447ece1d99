//! Simulation configuration.

use crate::core::constants::{ROLL_COST, TICK_INTERVAL_MS};
use crate::core::EconomyConfig;

/// Configuration for a simulation batch.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of independent runs
    pub runs: u32,

    /// Simulated seconds per run
    pub seconds: f64,

    /// Seconds advanced per step; the autoplayer acts once after each step
    pub step_seconds: f64,

    /// Random seed for reproducibility (None = random). Run `k` uses `seed + k`.
    pub seed: Option<u64>,

    /// Tier-0 stock the autoplayer must hold before it rolls a rune
    pub roll_threshold: f64,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per run)
    pub verbosity: u8,

    /// Economy the runs are played against
    pub economy: EconomyConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            runs: 100,
            seconds: 1800.0,
            step_seconds: TICK_INTERVAL_MS as f64 / 1000.0,
            seed: None,
            roll_threshold: ROLL_COST * 2.0,
            verbosity: 1,
            economy: EconomyConfig::default(),
        }
    }
}

impl SimConfig {
    /// Step length actually used: non-positive or non-finite values fall back
    /// to the economy's tick interval.
    pub fn effective_step(&self) -> f64 {
        if self.step_seconds.is_finite() && self.step_seconds > 0.0 {
            self.step_seconds
        } else {
            self.economy.tick_interval().as_secs_f64()
        }
    }

    /// Number of steps per run, rounding a partial last step up.
    pub fn steps(&self) -> u64 {
        if !self.seconds.is_finite() || self.seconds <= 0.0 {
            return 0;
        }
        (self.seconds / self.effective_step()).ceil() as u64
    }
}
