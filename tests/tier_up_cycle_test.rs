//! Integration test: purchases, pricing, and the tier-up reset
//!
//! Drives the public `Economy` API through a full climb: buying tier 0 with
//! coins, buying higher tiers with the tier below, and checking that every
//! refused purchase leaves the economy exactly as it was.

use tierforge::tiers::TierState;
use tierforge::{Economy, EconomyConfig, EconomyError};

fn snapshot(economy: &Economy) -> (Vec<TierState>, f64) {
    (economy.tiers().to_vec(), economy.currency())
}

#[test]
fn test_first_tier_zero_purchase() {
    let mut economy = Economy::default();
    assert_eq!(economy.currency(), 10.0);
    assert_eq!(economy.tier(0).unwrap().current_price, 10);

    let purchase = economy.buy_tier_zero().unwrap();

    let tier = economy.tier(0).unwrap();
    assert_eq!(economy.currency(), 0.0);
    assert_eq!(tier.amount, 1.0);
    assert_eq!(tier.action_count, 1);
    // floor(10 * 1.5^log2(2))
    assert_eq!(tier.current_price, 15);
    assert_eq!(purchase.price_paid, 10);
    assert_eq!(purchase.new_price, 15);
    assert_eq!(purchase.tiers_reset, 0);
}

#[test]
fn test_unaffordable_purchase_changes_nothing() {
    let mut economy = Economy::default();
    economy.buy_tier_zero().unwrap();
    let before = snapshot(&economy);

    let err = economy.buy_tier_zero().unwrap_err();
    assert!(err.is_recoverable());
    assert!(matches!(err, EconomyError::Insufficient { .. }));
    assert_eq!(snapshot(&economy), before);

    let err = economy.buy_higher_tier(1).unwrap_err();
    assert!(err.is_recoverable());
    assert_eq!(snapshot(&economy), before);
}

#[test]
fn test_tier_zero_price_follows_log_curve() {
    let mut economy = Economy::default();
    economy.set_currency(10_000.0);

    let mut prices = Vec::new();
    for _ in 0..4 {
        prices.push(economy.buy_tier_zero().unwrap().new_price);
    }
    // floor(10 * 1.5^log2(n + 1)) for n = 1..=4
    assert_eq!(prices, vec![15, 19, 22, 25]);
    assert_eq!(economy.tier(0).unwrap().action_count, 4);
}

#[test]
fn test_tier_up_resets_lower_tiers() {
    let mut economy = Economy::default();
    economy.set_currency(500.0);
    economy.set_tier_amount(0, 50.0).unwrap();

    let purchase = economy.buy_higher_tier(1).unwrap();
    assert_eq!(purchase.price_paid, 10);
    assert_eq!(purchase.tiers_reset, 1);
    // ceil(10 * 1.45^1)
    assert_eq!(purchase.new_price, 15);

    let tier0 = economy.tier(0).unwrap();
    assert_eq!(tier0.amount, 1.0);
    assert_eq!(tier0.action_count, 0);
    assert_eq!(tier0.current_price, 10);
    assert_eq!(economy.currency(), 10.0);

    let tier1 = economy.tier(1).unwrap();
    assert_eq!(tier1.amount, 1.0);
    assert_eq!(tier1.action_count, 1);
}

#[test]
fn test_deep_tier_up_wipes_every_lower_tier() {
    let mut economy = Economy::default();
    economy.set_currency(10_000.0);
    for _ in 0..3 {
        economy.buy_tier_zero().unwrap();
    }
    economy.set_tier_amount(1, 7.0).unwrap();
    economy.set_tier_amount(2, 30.0).unwrap();
    economy.set_tier_amount(5, 2.0).unwrap();

    let purchase = economy.buy(3).unwrap();
    assert_eq!(purchase.tiers_reset, 3);

    for index in 0..3 {
        let tier = economy.tier(index).unwrap();
        assert_eq!(tier.action_count, 0, "tier {}", index);
        assert_eq!(tier.current_price, 10, "tier {}", index);
    }
    assert_eq!(economy.tier(0).unwrap().amount, 0.0);
    assert_eq!(economy.tier(1).unwrap().amount, 0.0);
    assert_eq!(economy.tier(2).unwrap().amount, 1.0);
    assert_eq!(economy.tier(3).unwrap().amount, 1.0);
    // Tiers above the purchase are untouched
    assert_eq!(economy.tier(5).unwrap().amount, 2.0);
    assert_eq!(economy.currency(), 10.0);
}

#[test]
fn test_tier_up_values_come_from_config() {
    let config = EconomyConfig {
        tier_up_currency: 3.0,
        tier_up_grant: 2.0,
        ..Default::default()
    };
    let mut economy = Economy::new(config);
    economy.set_tier_amount(0, 10.0).unwrap();

    economy.buy(1).unwrap();
    assert_eq!(economy.currency(), 3.0);
    assert_eq!(economy.tier(0).unwrap().amount, 2.0);
}

#[test]
fn test_invalid_indices_are_refused() {
    let mut economy = Economy::default();
    economy.set_tier_amount(0, 100.0).unwrap();
    let before = snapshot(&economy);

    let err = economy.buy_higher_tier(0).unwrap_err();
    assert!(matches!(err, EconomyError::NotAHigherTier));
    let err = economy.buy(10).unwrap_err();
    assert!(matches!(
        err,
        EconomyError::InvalidTier {
            index: 10,
            tier_count: 10
        }
    ));
    assert!(!err.is_recoverable());
    assert!(economy.set_tier_amount(42, 1.0).is_err());

    assert_eq!(snapshot(&economy), before);
}

#[test]
fn test_passive_gains_never_count_as_actions() {
    let mut economy = Economy::default();
    economy.set_tier_amount(1, 20.0).unwrap();
    economy.set_tier_amount(2, 5.0).unwrap();

    for _ in 0..50 {
        economy.advance(0.1);
    }

    assert!(economy.tier(0).unwrap().amount > 0.0);
    for tier in economy.tiers() {
        assert_eq!(tier.action_count, 0);
        assert_eq!(tier.current_price, 10);
    }
}

#[test]
fn test_empty_tier_chain_refuses_purchases() {
    let config = EconomyConfig {
        tiers: Vec::new(),
        runes: Vec::new(),
        ..Default::default()
    };
    let mut economy = Economy::new(config);
    assert_eq!(economy.tier_count(), 0);

    let err = economy.buy_tier_zero().unwrap_err();
    assert!(err.is_config_fault() || matches!(err, EconomyError::InvalidTier { .. }));
    assert_eq!(economy.advance(1.0).coins_gained, 0.0);
}

#[test]
fn test_prices_never_drop_below_one() {
    use tierforge::tiers::TierDefinition;

    let free = TierDefinition {
        name: "Free".to_string(),
        base_cost: 0,
        scaling: 1.5,
    };
    let config = EconomyConfig {
        tiers: vec![free; 3],
        runes: Vec::new(),
        ..Default::default()
    };
    let mut economy = Economy::new(config);
    assert!(economy.tiers().iter().all(|t| t.current_price >= 1));

    let before = snapshot(&economy);
    assert!(economy.buy(2).unwrap_err().is_recoverable());
    assert_eq!(snapshot(&economy), before);
}
