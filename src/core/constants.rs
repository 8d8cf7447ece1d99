// Tick and timing
pub const TICK_INTERVAL_MS: u64 = 100;
pub const INPUT_POLL_MS: u64 = 50;

// Output scaling applied to both coin output and passive tier flow
pub const COIN_SPEED_MULTIPLIER: f64 = 0.25;

// Currency
pub const STARTING_CURRENCY: f64 = 10.0;
// Currency after buying any tier above 0
pub const TIER_UP_CURRENCY: f64 = 10.0;
// Flat units granted to the tier just below a tier-up, after the reset
pub const TIER_UP_GRANT: f64 = 1.0;

// Tier definitions: (name, base cost, scaling exponent)
pub const DEFAULT_TIERS: [(&str, u64, f64); 10] = [
    ("Item 1", 10, 1.50),
    ("Item 2", 10, 1.45),
    ("Item 3", 10, 1.40),
    ("Item 4", 10, 1.35),
    ("Item 5", 10, 1.30),
    ("Item 6", 10, 1.25),
    ("Item 7", 10, 1.20),
    ("Item 8", 10, 1.15),
    ("Item 9", 10, 1.10),
    ("Item 10", 10, 1.05),
];
pub const MIN_BASE_COST: u64 = 1;
pub const MIN_SCALING: f64 = 1.01;
pub const FALLBACK_SCALING: f64 = 1.15;

// Runes
pub const ROLL_COST: f64 = 25.0;

// Rarity pool: (key, label, weight, [(tier index, multiplier)])
pub const DEFAULT_RUNES: [(&str, &str, f64, &[(usize, f64)]); 6] = [
    ("common", "Common", 60.0, &[(0, 1.50)]),
    ("uncommon", "Uncommon", 25.0, &[(0, 1.55), (1, 1.10)]),
    ("rare", "Rare", 10.0, &[(0, 1.60), (1, 1.20)]),
    ("epic", "Epic", 4.0, &[(0, 1.85), (1, 1.50), (2, 1.25)]),
    (
        "legendary",
        "Legendary",
        0.9,
        &[(0, 2.00), (1, 1.80), (2, 1.60), (3, 1.30)],
    ),
    (
        "mythic",
        "Mythic",
        0.1,
        &[(0, 4.50), (1, 2.50), (2, 2.00), (3, 1.50), (4, 1.25)],
    ),
];

// Activity log
pub const ACTIVITY_LOG_CAPACITY: usize = 8;
