//! Tier pricing and purchase rules.
//!
//! Tier 0 is bought with currency and its price grows with `log2` of the
//! purchase count; higher tiers are bought with the tier below and their price
//! grows linearly in the exponent. Buying a higher tier is a tier-up: every
//! lower tier is wiped, currency is set to a fixed value, and the tier directly
//! below receives a flat grant.

use super::types::{TierDefinition, TierLedger};
use crate::core::constants::{TIER_UP_CURRENCY, TIER_UP_GRANT};
use crate::core::error::{EconomyError, EconomyResult};

/// Price of tier 0 after `action_count` manual purchases.
///
/// `floor(base * scaling^log2(count + 1))`, never below 1.
pub fn tier_zero_price(def: &TierDefinition, action_count: u32) -> u64 {
    let exponent = (action_count as f64 + 1.0).log2();
    let price = (def.base_cost as f64 * def.scaling.powf(exponent)).floor();
    (price as u64).max(1)
}

/// Price of a tier above 0 after `action_count` manual purchases.
///
/// `ceil(base * scaling^count)`.
pub fn higher_tier_price(def: &TierDefinition, action_count: u32) -> u64 {
    let price = (def.base_cost as f64 * def.scaling.powf(action_count as f64)).ceil();
    (price as u64).max(1)
}

/// What happens to the rest of the economy when a higher tier is bought.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierUpRule {
    /// Currency balance right after the tier-up.
    pub currency_after: f64,
    /// Units added to the tier just below, after it was reset.
    pub grant: f64,
}

impl Default for TierUpRule {
    fn default() -> Self {
        Self {
            currency_after: TIER_UP_CURRENCY,
            grant: TIER_UP_GRANT,
        }
    }
}

/// A completed manual purchase.
#[derive(Debug, Clone, PartialEq)]
pub struct Purchase {
    pub tier: usize,
    pub price_paid: u64,
    pub amount_gained: f64,
    pub new_price: u64,
    /// Number of lower tiers wiped by this purchase (0 for tier 0).
    pub tiers_reset: usize,
}

/// Buys one batch of tier 0 with currency.
///
/// `amount_per_purchase` is the rune-boosted yield, evaluated by the caller
/// before the purchase count changes.
pub fn buy_tier_zero(
    ledger: &mut TierLedger,
    currency: &mut f64,
    amount_per_purchase: f64,
) -> EconomyResult<Purchase> {
    let def = ledger
        .definition(0)
        .ok_or(EconomyError::MissingTier { index: 0 })?;
    let state = ledger
        .get(0)
        .ok_or(EconomyError::MissingTier { index: 0 })?;

    let price = state.current_price;
    if *currency < price as f64 {
        return Err(EconomyError::Insufficient {
            resource: "coins".to_string(),
            needed: price as f64,
            available: *currency,
        });
    }
    let new_price = tier_zero_price(def, state.action_count + 1);

    let state = ledger.state_mut(0)?;
    *currency -= price as f64;
    state.amount += amount_per_purchase;
    state.action_count += 1;
    state.current_price = new_price;

    Ok(Purchase {
        tier: 0,
        price_paid: price,
        amount_gained: amount_per_purchase,
        new_price,
        tiers_reset: 0,
    })
}

/// Buys one batch of tier `index >= 1`, paying with tier `index - 1`, then
/// applies the tier-up reset.
pub fn buy_higher_tier(
    ledger: &mut TierLedger,
    index: usize,
    amount_per_purchase: f64,
    currency: &mut f64,
    rule: TierUpRule,
) -> EconomyResult<Purchase> {
    if index == 0 {
        return Err(EconomyError::NotAHigherTier);
    }
    ledger.check_index(index)?;

    let def = ledger
        .definition(index)
        .ok_or(EconomyError::MissingTier { index })?;
    let (price, action_count) = {
        let state = &ledger.states()[index];
        (state.current_price, state.action_count)
    };
    let available = ledger.states()[index - 1].amount;
    if available < price as f64 {
        return Err(EconomyError::Insufficient {
            resource: ledger.name(index - 1),
            needed: price as f64,
            available,
        });
    }
    let new_price = higher_tier_price(def, action_count + 1);

    let states = ledger.states_mut();
    states[index - 1].amount -= price as f64;
    let bought = &mut states[index];
    bought.amount += amount_per_purchase;
    bought.action_count += 1;
    bought.current_price = new_price;

    ledger.reset_below(index);
    *currency = rule.currency_after;
    ledger.states_mut()[index - 1].amount += rule.grant;

    Ok(Purchase {
        tier: index,
        price_paid: price,
        amount_gained: amount_per_purchase,
        new_price,
        tiers_reset: index,
    })
}

/// Debug override of a tier's owned amount. Negative or NaN values become 0.
/// A tier with no manual purchases is also put back on its base price.
pub fn set_amount(ledger: &mut TierLedger, index: usize, value: f64) -> EconomyResult<()> {
    ledger.check_index(index)?;
    let base_cost = ledger
        .definition(index)
        .map(|d| d.base_cost)
        .ok_or(EconomyError::MissingTier { index })?;
    let state = ledger.state_mut(index)?;
    state.amount = if value.is_nan() { 0.0 } else { value.max(0.0) };
    if state.action_count == 0 {
        state.current_price = base_cost;
    }
    Ok(())
}
