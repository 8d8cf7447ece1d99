//! Conversion tick: coin output from tier 0 and passive flow down the chain.
//!
//! Tier 0 produces currency at `amount * (1 + floor(sqrt(amount))) * mult(0) *
//! speed` per second. Every tier above 0 feeds the tier below it at `amount *
//! mult(i - 1) * speed` per second, boosted by the *receiving* tier's runes.

use crate::runes::{effective_multiplier, RuneInventory, RunePool};
use crate::tiers::TierLedger;

/// What a single call to `Economy::advance` changed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickResult {
    /// Seconds simulated (negative input is clamped to 0).
    pub dt: f64,
    pub coins_per_second: f64,
    pub coins_gained: f64,
    /// Units added to each tier by passive flow, indexed by receiving tier.
    pub tier_gains: Vec<f64>,
}

impl TickResult {
    pub fn total_tier_gain(&self) -> f64 {
        self.tier_gains.iter().sum()
    }
}

/// Coins per second produced by `amount` units of tier 0.
///
/// The `floor(sqrt(amount))` term makes output per unit grow with stock.
pub fn coin_output_rate(amount: f64, multiplier: f64, speed: f64) -> f64 {
    let self_growth = amount.max(0.0).sqrt().floor();
    amount * (1.0 + self_growth) * multiplier * speed
}

/// Moves `dt` seconds of passive production from each tier into the tier
/// below, ascending from tier 1.
///
/// Step `i` reads tier `i` and writes tier `i - 1`; tier `i` is only written
/// later by step `i + 1`, so nothing is counted twice within one call.
pub fn passive_flow(
    ledger: &mut TierLedger,
    pool: &RunePool,
    inventory: &RuneInventory,
    dt: f64,
    speed: f64,
) -> Vec<f64> {
    let mut gains = vec![0.0; ledger.len()];
    let states = ledger.states_mut();
    for i in 1..states.len() {
        let producers = states[i].amount;
        if producers <= 0.0 {
            continue;
        }
        let receiver_mult = effective_multiplier(pool, inventory, i - 1);
        let gain = producers * receiver_mult * dt * speed;
        states[i - 1].amount += gain;
        gains[i - 1] = gain;
    }
    gains
}
