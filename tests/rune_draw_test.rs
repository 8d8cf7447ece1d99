//! Integration test: rune draws and the multiplier algebra
//!
//! Uses seeded ChaCha8 RNGs so the statistical checks are reproducible.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashMap;
use tierforge::runes::{RuneDefinition, RunePool};
use tierforge::{Economy, EconomyConfig, EconomyError};

#[test]
fn test_draw_frequencies_match_weights() {
    let mut economy = Economy::default();
    let trials = 20_000;
    economy
        .set_tier_amount(0, economy.roll_cost() * trials as f64)
        .unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    let mut seen: HashMap<String, u32> = HashMap::new();
    for _ in 0..trials {
        let roll = economy.roll_rune_with(&mut rng).unwrap();
        *seen.entry(roll.key).or_insert(0) += 1;
    }

    assert_eq!(economy.tier(0).unwrap().amount, 0.0);
    assert_eq!(economy.inventory().total(), trials);
    for (index, def) in economy.rune_definitions().iter().enumerate() {
        let observed = seen.get(&def.key).copied().unwrap_or(0) as f64 / trials as f64;
        let expected = economy.rune_pool().chance(index);
        assert!(
            (observed - expected).abs() < 0.01,
            "{}: observed {:.4}, expected {:.4}",
            def.key,
            observed,
            expected
        );
    }
}

#[test]
fn test_unnormalized_weights() {
    let config = EconomyConfig {
        runes: vec![
            RuneDefinition::new("a", "A", 3.0, &[]),
            RuneDefinition::new("b", "B", 1.0, &[]),
        ],
        ..Default::default()
    };
    let mut economy = Economy::new(config);
    economy.set_tier_amount(0, 25.0 * 8_000.0).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(5);

    for _ in 0..8_000 {
        economy.roll_rune_with(&mut rng).unwrap();
    }
    let share = economy.rune_count("a") as f64 / 8_000.0;
    assert!((share - 0.75).abs() < 0.02, "share of a: {}", share);
}

#[test]
fn test_pick_boundaries_and_fallback() {
    let pool = RunePool::new(vec![
        RuneDefinition::new("common", "Common", 60.0, &[]),
        RuneDefinition::new("rare", "Rare", 30.0, &[]),
        RuneDefinition::new("mythic", "Mythic", 10.0, &[]),
    ]);
    assert_eq!(pool.pick(0.0), Some(0));
    // A remainder of exactly zero still selects the rarity
    assert_eq!(pool.pick(60.0), Some(0));
    assert_eq!(pool.pick(60.5), Some(1));
    assert_eq!(pool.pick(99.9), Some(2));
    // Drift past the total falls back to the last rarity
    assert_eq!(pool.pick(100.0 + 1e-9), Some(2));
    assert_eq!(RunePool::new(Vec::new()).pick(0.0), None);
}

#[test]
fn test_roll_without_stock_changes_nothing() {
    let mut economy = Economy::default();
    economy.set_tier_amount(0, 24.5).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    let err = economy.roll_rune_with(&mut rng).unwrap_err();
    assert!(err.is_recoverable());
    assert_eq!(
        err.to_string(),
        "not enough Item 1: need 25, have 24.50"
    );
    assert_eq!(economy.tier(0).unwrap().amount, 24.5);
    assert_eq!(economy.inventory().total(), 0);
}

#[test]
fn test_roll_debits_exactly_the_cost() {
    let mut economy = Economy::default();
    economy.set_tier_amount(0, 30.0).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    let roll = economy.roll_rune_with(&mut rng).unwrap();
    assert_eq!(economy.tier(0).unwrap().amount, 5.0);
    assert_eq!(roll.owned, 1);
    assert_eq!(economy.rune_count(&roll.key), 1);
}

#[test]
fn test_empty_pool_is_a_config_fault() {
    let config = EconomyConfig {
        runes: Vec::new(),
        ..Default::default()
    };
    let mut economy = Economy::new(config);
    economy.set_tier_amount(0, 100.0).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    let err = economy.roll_rune_with(&mut rng).unwrap_err();
    assert!(matches!(err, EconomyError::EmptyRunePool));
    assert!(err.is_config_fault());
    assert_eq!(economy.tier(0).unwrap().amount, 100.0);
}

#[test]
fn test_missing_tier_zero_is_a_config_fault() {
    let config = EconomyConfig {
        tiers: Vec::new(),
        runes: vec![RuneDefinition::new("common", "Common", 1.0, &[])],
        ..Default::default()
    };
    let mut economy = Economy::new(config);
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    let err = economy.roll_rune_with(&mut rng).unwrap_err();
    assert!(matches!(err, EconomyError::MissingTier { index: 0 }));
    assert!(err.is_config_fault());
    assert!(!err.is_recoverable());
}

#[test]
fn test_multipliers_stack_additively() {
    let config = EconomyConfig {
        runes: vec![RuneDefinition::new(
            "uncommon",
            "Uncommon",
            1.0,
            &[(0, 1.55), (1, 1.10)],
        )],
        ..Default::default()
    };
    let mut economy = Economy::new(config);
    assert_eq!(economy.effective_multiplier(0), 1.0);
    assert_eq!(economy.effective_multiplier(1), 1.0);

    economy.set_tier_amount(0, 75.0).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    for _ in 0..3 {
        economy.roll_rune_with(&mut rng).unwrap();
    }

    // 1 + 3 * (m - 1), not m^3
    assert!((economy.effective_multiplier(0) - 2.65).abs() < 1e-9);
    assert!((economy.effective_multiplier(1) - 1.30).abs() < 1e-9);
    assert_eq!(economy.effective_multiplier(2), 1.0);
    assert!((economy.purchase_amount(0) - 2.65).abs() < 1e-9);
}

#[test]
fn test_runes_boost_purchase_yield() {
    let config = EconomyConfig {
        runes: vec![RuneDefinition::new("common", "Common", 1.0, &[(0, 1.5)])],
        ..Default::default()
    };
    let mut economy = Economy::new(config);
    economy.set_tier_amount(0, 25.0).unwrap();
    economy.roll_rune().unwrap();

    let purchase = economy.buy_tier_zero().unwrap();
    assert_eq!(purchase.amount_gained, 1.5);
    assert_eq!(economy.tier(0).unwrap().amount, 1.5);
}
