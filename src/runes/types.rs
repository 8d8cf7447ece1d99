//! Rune definitions, the weighted rarity pool, and the owned-rune inventory.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One tier boost carried by a rune.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RuneBoost {
    pub tier_index: usize,
    pub multiplier: f64,
}

impl RuneBoost {
    /// The part of the multiplier that stacks additively.
    pub fn extra(&self) -> f64 {
        self.multiplier - 1.0
    }
}

/// A rarity in the pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuneDefinition {
    pub key: String,
    pub label: String,
    /// Relative selection weight; weights need not sum to 100.
    pub weight: f64,
    pub boosts: Vec<RuneBoost>,
}

impl RuneDefinition {
    pub fn new(
        key: impl Into<String>,
        label: impl Into<String>,
        weight: f64,
        boosts: &[(usize, f64)],
    ) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            weight,
            boosts: boosts
                .iter()
                .map(|&(tier_index, multiplier)| RuneBoost {
                    tier_index,
                    multiplier,
                })
                .collect(),
        }
    }
}

/// Rarity pool with cumulative weights precomputed for drawing.
///
/// Order is the order the definitions were supplied in; it decides both the
/// scan order of a draw and the fallback rarity (the last one).
#[derive(Debug, Clone)]
pub struct RunePool {
    definitions: Vec<RuneDefinition>,
    cumulative: Vec<f64>,
}

impl RunePool {
    pub fn new(definitions: Vec<RuneDefinition>) -> Self {
        let cumulative = definitions
            .iter()
            .scan(0.0, |acc, def| {
                *acc += draw_weight(def);
                Some(*acc)
            })
            .collect();
        Self {
            definitions,
            cumulative,
        }
    }

    pub fn definitions(&self) -> &[RuneDefinition] {
        &self.definitions
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    pub fn total_weight(&self) -> f64 {
        self.cumulative.last().copied().unwrap_or(0.0)
    }

    pub fn get(&self, key: &str) -> Option<&RuneDefinition> {
        self.definitions.iter().find(|d| d.key == key)
    }

    /// Selection probability of the rarity at `index`.
    pub fn chance(&self, index: usize) -> f64 {
        let total = self.total_weight();
        match self.definitions.get(index) {
            Some(def) if total > 0.0 => draw_weight(def) / total,
            _ => 0.0,
        }
    }

    /// Maps a draw value in `[0, total_weight)` to a rarity index.
    ///
    /// Selects the first rarity whose cumulative weight reaches the draw. Draws
    /// beyond the final cumulative weight (float drift) land on the last
    /// selectable rarity. Rarities without a positive weight are never picked.
    pub fn pick(&self, draw: f64) -> Option<usize> {
        let start = self
            .cumulative
            .partition_point(|&c| c < draw)
            .min(self.len().saturating_sub(1));
        self.definitions
            .iter()
            .skip(start)
            .position(|d| draw_weight(d) > 0.0)
            .map(|offset| start + offset)
            .or_else(|| self.definitions.iter().rposition(|d| draw_weight(d) > 0.0))
    }
}

/// Weight used for drawing; non-positive or non-finite weights count as 0.
fn draw_weight(def: &RuneDefinition) -> f64 {
    if def.weight.is_finite() && def.weight > 0.0 {
        def.weight
    } else {
        0.0
    }
}

/// Owned rune counts keyed by rarity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuneInventory {
    counts: HashMap<String, u32>,
}

impl RuneInventory {
    /// Starts every rarity in the pool at zero.
    pub fn new(pool: &RunePool) -> Self {
        Self {
            counts: pool
                .definitions()
                .iter()
                .map(|d| (d.key.clone(), 0))
                .collect(),
        }
    }

    pub fn count(&self, key: &str) -> u32 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Total runes owned across all rarities.
    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }

    pub(crate) fn add(&mut self, key: &str) -> u32 {
        let count = self.counts.entry(key.to_string()).or_insert(0);
        *count += 1;
        *count
    }

    #[cfg(test)]
    pub(crate) fn set(&mut self, key: &str, count: u32) {
        self.counts.insert(key.to_string(), count);
    }
}
