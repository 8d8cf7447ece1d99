//! The economy context: owns every piece of mutable simulation state.
//!
//! All player actions and ticks go through `&mut Economy`, so the borrow
//! checker serializes them. Callers that share an economy across threads wrap
//! the whole value in a `Mutex`.

use super::config::EconomyConfig;
use super::error::{EconomyError, EconomyResult};
use super::tick::{coin_output_rate, passive_flow, TickResult};
use crate::runes::{self, RuneDefinition, RuneInventory, RunePool, RuneRoll};
use crate::tiers::{self, Purchase, TierLedger, TierState};
use rand::Rng;

#[derive(Debug, Clone)]
pub struct Economy {
    config: EconomyConfig,
    ledger: TierLedger,
    pool: RunePool,
    inventory: RuneInventory,
    currency: f64,
    coins_per_second: f64,
}

impl Default for Economy {
    fn default() -> Self {
        Self::new(EconomyConfig::default())
    }
}

impl Economy {
    /// Builds an economy, clamping tier definitions first. Use [`try_new`]
    /// for configurations that have not been through `EconomyConfig::validate`.
    ///
    /// [`try_new`]: Economy::try_new
    pub fn new(mut config: EconomyConfig) -> Self {
        config.sanitize();
        let ledger = TierLedger::new(config.tiers.clone());
        let pool = RunePool::new(config.runes.clone());
        let inventory = RuneInventory::new(&pool);
        let mut economy = Self {
            currency: config.starting_currency,
            config,
            ledger,
            pool,
            inventory,
            coins_per_second: 0.0,
        };
        economy.refresh_coins_per_second();
        economy
    }

    /// Like `new`, but refuses a configuration that fails validation.
    pub fn try_new(mut config: EconomyConfig) -> EconomyResult<Self> {
        config.sanitize();
        config.validate()?;
        Ok(Self::new(config))
    }

    // ── Read accessors ──────────────────────────────────────────────────

    pub fn config(&self) -> &EconomyConfig {
        &self.config
    }

    pub fn tier_count(&self) -> usize {
        self.ledger.len()
    }

    pub fn tier(&self, index: usize) -> Option<&TierState> {
        self.ledger.get(index)
    }

    pub fn tiers(&self) -> &[TierState] {
        self.ledger.states()
    }

    pub fn tier_name(&self, index: usize) -> String {
        self.ledger.name(index)
    }

    pub fn currency(&self) -> f64 {
        self.currency
    }

    /// Tier-0 output rate as of the last tick or action.
    pub fn coins_per_second(&self) -> f64 {
        self.coins_per_second
    }

    pub fn effective_multiplier(&self, tier_index: usize) -> f64 {
        runes::effective_multiplier(&self.pool, &self.inventory, tier_index)
    }

    pub fn purchase_amount(&self, tier_index: usize) -> f64 {
        runes::purchase_amount(&self.pool, &self.inventory, tier_index)
    }

    pub fn rune_definitions(&self) -> &[RuneDefinition] {
        self.pool.definitions()
    }

    pub fn rune_pool(&self) -> &RunePool {
        &self.pool
    }

    pub fn rune_count(&self, key: &str) -> u32 {
        self.inventory.count(key)
    }

    pub fn inventory(&self) -> &RuneInventory {
        &self.inventory
    }

    pub fn roll_cost(&self) -> f64 {
        self.config.roll_cost
    }

    // ── Player actions ──────────────────────────────────────────────────

    /// Buys tier 0 with currency.
    pub fn buy_tier_zero(&mut self) -> EconomyResult<Purchase> {
        let amount = self.purchase_amount(0);
        let result = tiers::buy_tier_zero(&mut self.ledger, &mut self.currency, amount);
        self.after_action("buy", 0, &result);
        result
    }

    /// Buys tier `index >= 1` with the tier below and performs the tier-up reset.
    pub fn buy_higher_tier(&mut self, index: usize) -> EconomyResult<Purchase> {
        let amount = self.purchase_amount(index);
        let rule = self.config.tier_up_rule();
        let result =
            tiers::buy_higher_tier(&mut self.ledger, index, amount, &mut self.currency, rule);
        if let Ok(purchase) = &result {
            tracing::info!(
                tier = index,
                price = purchase.price_paid,
                tiers_reset = purchase.tiers_reset,
                "tier-up"
            );
        }
        self.after_action("buy", index, &result);
        result
    }

    /// Buys whichever kind of purchase `index` calls for.
    pub fn buy(&mut self, index: usize) -> EconomyResult<Purchase> {
        if index == 0 {
            self.buy_tier_zero()
        } else {
            self.buy_higher_tier(index)
        }
    }

    /// Rolls a rune with the thread-local RNG.
    pub fn roll_rune(&mut self) -> EconomyResult<RuneRoll> {
        self.roll_rune_with(&mut rand::thread_rng())
    }

    /// Pays the roll cost in tier 0 and draws one rune.
    pub fn roll_rune_with<R: Rng>(&mut self, rng: &mut R) -> EconomyResult<RuneRoll> {
        let stock_name = self.ledger.name(0);
        let roll_cost = self.config.roll_cost;
        let result = match self.ledger.states_mut().first_mut() {
            Some(tier_zero) => runes::roll_rune(
                &self.pool,
                &mut self.inventory,
                &mut tier_zero.amount,
                roll_cost,
                &stock_name,
                rng,
            ),
            None => Err(EconomyError::MissingTier { index: 0 }),
        };
        match &result {
            Ok(roll) => {
                tracing::debug!(rarity = %roll.key, owned = roll.owned, "rune rolled");
                self.refresh_coins_per_second();
            }
            Err(err) => tracing::warn!(%err, "rune roll refused"),
        }
        result
    }

    // ── Simulation ──────────────────────────────────────────────────────

    /// Advances the simulation by `dt_seconds`. Negative or NaN input is
    /// treated as 0, which only recomputes `coins_per_second`.
    pub fn advance(&mut self, dt_seconds: f64) -> TickResult {
        let dt = if dt_seconds.is_nan() {
            0.0
        } else {
            dt_seconds.max(0.0)
        };
        let speed = self.config.speed_multiplier;

        self.refresh_coins_per_second();
        let coins_gained = self.coins_per_second * dt;
        self.currency += coins_gained;

        let tier_gains = passive_flow(&mut self.ledger, &self.pool, &self.inventory, dt, speed);

        TickResult {
            dt,
            coins_per_second: self.coins_per_second,
            coins_gained,
            tier_gains,
        }
    }

    // ── Debug overrides ─────────────────────────────────────────────────

    /// Sets a tier's owned amount directly. A tier with no manual purchases
    /// is also returned to its base price.
    pub fn set_tier_amount(&mut self, index: usize, value: f64) -> EconomyResult<()> {
        tiers::set_amount(&mut self.ledger, index, value)?;
        tracing::debug!(tier = index, value, "tier amount overridden");
        self.refresh_coins_per_second();
        Ok(())
    }

    /// Every tier back to zero with base prices. Currency and runes stay.
    pub fn clear_tiers(&mut self) {
        self.ledger.reset_all();
        tracing::debug!("tiers cleared");
        self.refresh_coins_per_second();
    }

    /// Sets currency directly; negative or NaN values become 0.
    pub fn set_currency(&mut self, value: f64) {
        self.currency = if value.is_nan() { 0.0 } else { value.max(0.0) };
        self.refresh_coins_per_second();
    }

    fn refresh_coins_per_second(&mut self) {
        self.coins_per_second = match self.ledger.get(0) {
            Some(tier_zero) => coin_output_rate(
                tier_zero.amount,
                self.effective_multiplier(0),
                self.config.speed_multiplier,
            ),
            None => 0.0,
        };
    }

    fn after_action(&mut self, action: &str, tier: usize, result: &EconomyResult<Purchase>) {
        match result {
            Ok(purchase) => {
                tracing::debug!(
                    action,
                    tier,
                    price = purchase.price_paid,
                    gained = purchase.amount_gained,
                    "purchase"
                );
                self.refresh_coins_per_second();
            }
            Err(err) if err.is_recoverable() => tracing::debug!(action, tier, %err, "refused"),
            Err(err) => tracing::warn!(action, tier, %err, "refused"),
        }
    }
}
