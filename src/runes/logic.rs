//! Rune multipliers and the weighted rune draw.

use super::types::{RuneInventory, RunePool};
use crate::core::error::{EconomyError, EconomyResult};
use rand::Rng;

/// Total multiplier owned runes give `tier_index`.
///
/// Additive extras: `1 + sum(count * (multiplier - 1))` over every boost that
/// targets the tier. A tier nothing boosts gets exactly 1.
pub fn effective_multiplier(pool: &RunePool, inventory: &RuneInventory, tier_index: usize) -> f64 {
    let extra: f64 = pool
        .definitions()
        .iter()
        .filter_map(|def| match inventory.count(&def.key) {
            0 => None,
            count => Some((def, count)),
        })
        .flat_map(|(def, count)| {
            def.boosts
                .iter()
                .filter(move |b| b.tier_index == tier_index)
                .map(move |b| count as f64 * b.extra())
        })
        .sum();
    1.0 + extra
}

/// Units granted by one manual purchase of `tier_index`.
pub fn purchase_amount(pool: &RunePool, inventory: &RuneInventory, tier_index: usize) -> f64 {
    1.0 * effective_multiplier(pool, inventory, tier_index)
}

/// Outcome of a successful rune roll.
#[derive(Debug, Clone, PartialEq)]
pub struct RuneRoll {
    /// Position of the rarity in the pool.
    pub index: usize,
    pub key: String,
    pub label: String,
    /// Owned count of this rarity after the roll.
    pub owned: u32,
}

/// Pays `roll_cost` out of `stock` (the tier-0 amount) and draws one rune.
pub fn roll_rune<R: Rng>(
    pool: &RunePool,
    inventory: &mut RuneInventory,
    stock: &mut f64,
    roll_cost: f64,
    stock_name: &str,
    rng: &mut R,
) -> EconomyResult<RuneRoll> {
    if pool.is_empty() || pool.total_weight() <= 0.0 {
        return Err(EconomyError::EmptyRunePool);
    }
    if *stock < roll_cost {
        return Err(EconomyError::Insufficient {
            resource: stock_name.to_string(),
            needed: roll_cost,
            available: *stock,
        });
    }

    let draw = rng.gen::<f64>() * pool.total_weight();
    let index = pool.pick(draw).ok_or(EconomyError::EmptyRunePool)?;
    let def = &pool.definitions()[index];

    *stock -= roll_cost;
    let owned = inventory.add(&def.key);

    Ok(RuneRoll {
        index,
        key: def.key.clone(),
        label: def.label.clone(),
        owned,
    })
}
