//! Headless balance simulator.
//!
//! Runs a greedy autoplayer against the real [`Economy`](crate::core::Economy)
//! for a fixed number of simulated seconds and aggregates what it reached:
//! - Highest tier owned at the end of each run
//! - Tier-ups and tier-0 purchases
//! - Runes rolled, per rarity
//! - Final currency and coin income

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::{RarityAverage, SimReport};
pub use runner::{run_simulation, simulate_single_run, RunStats};
