//! Tier definitions and per-tier mutable state.

use crate::core::constants::{FALLBACK_SCALING, MIN_BASE_COST, MIN_SCALING};
use crate::core::error::{EconomyError, EconomyResult};
use serde::{Deserialize, Serialize};

/// Static description of one rung of the resource chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierDefinition {
    pub name: String,
    pub base_cost: u64,
    pub scaling: f64,
}

impl TierDefinition {
    /// Builds a definition with base cost clamped to at least 1 and scaling to
    /// at least 1.01. A non-finite scaling falls back to 1.15.
    pub fn new(name: impl Into<String>, base_cost: u64, scaling: f64) -> Self {
        let mut def = Self {
            name: name.into(),
            base_cost,
            scaling,
        };
        def.sanitize();
        def
    }

    pub(crate) fn sanitize(&mut self) {
        self.base_cost = self.base_cost.max(MIN_BASE_COST);
        self.scaling = if self.scaling.is_finite() {
            self.scaling.max(MIN_SCALING)
        } else {
            FALLBACK_SCALING
        };
    }
}

/// Mutable state for a single tier.
#[derive(Debug, Clone, PartialEq)]
pub struct TierState {
    /// Owned quantity; fractional once runes or passive flow are involved.
    pub amount: f64,
    /// Manual purchases since the last reset. Drives the price curve only.
    pub action_count: u32,
    /// Price of the next purchase. Tier 0 pays in currency, tier i in tier i-1.
    pub current_price: u64,
}

impl TierState {
    pub fn new(def: &TierDefinition) -> Self {
        Self {
            amount: 0.0,
            action_count: 0,
            current_price: def.base_cost.max(MIN_BASE_COST),
        }
    }

    /// Back to the freshly-initialized state.
    pub fn reset(&mut self, def: &TierDefinition) {
        *self = Self::new(def);
    }
}

/// All tiers, definitions and state kept side by side.
#[derive(Debug, Clone)]
pub struct TierLedger {
    definitions: Vec<TierDefinition>,
    states: Vec<TierState>,
}

impl TierLedger {
    /// Clamps every definition the way `TierDefinition::new` does.
    pub fn new(mut definitions: Vec<TierDefinition>) -> Self {
        for def in &mut definitions {
            def.sanitize();
        }
        let states = definitions.iter().map(TierState::new).collect();
        Self {
            definitions,
            states,
        }
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&TierState> {
        self.states.get(index)
    }

    pub fn definition(&self, index: usize) -> Option<&TierDefinition> {
        self.definitions.get(index)
    }

    pub fn definitions(&self) -> &[TierDefinition] {
        &self.definitions
    }

    pub fn states(&self) -> &[TierState] {
        &self.states
    }

    pub(crate) fn states_mut(&mut self) -> &mut [TierState] {
        &mut self.states
    }

    /// Fails with `InvalidTier` unless `index < len()`.
    pub fn check_index(&self, index: usize) -> EconomyResult<()> {
        if index < self.len() {
            Ok(())
        } else {
            Err(EconomyError::InvalidTier {
                index,
                tier_count: self.len(),
            })
        }
    }

    /// Name of a tier, or a generated one if the index is not configured.
    pub fn name(&self, index: usize) -> String {
        self.definitions
            .get(index)
            .map(|d| d.name.clone())
            .unwrap_or_else(|| format!("Item {}", index + 1))
    }

    pub(crate) fn state_mut(&mut self, index: usize) -> EconomyResult<&mut TierState> {
        let tier_count = self.len();
        self.states
            .get_mut(index)
            .ok_or(EconomyError::InvalidTier { index, tier_count })
    }

    /// Resets every tier strictly below `index`.
    pub(crate) fn reset_below(&mut self, index: usize) {
        for (state, def) in self
            .states
            .iter_mut()
            .zip(self.definitions.iter())
            .take(index)
        {
            state.reset(def);
        }
    }

    /// Resets every tier.
    pub(crate) fn reset_all(&mut self) {
        self.reset_below(self.len());
    }
}
