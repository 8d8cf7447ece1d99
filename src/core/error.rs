//! Error types for economy operations.
//!
//! Every operation that returns `Err` leaves the economy untouched: no partial
//! debits, no half-updated prices.

use thiserror::Error;

/// Result alias used throughout the engine.
pub type EconomyResult<T> = Result<T, EconomyError>;

#[derive(Debug, Error)]
pub enum EconomyError {
    /// Not enough of the paying resource. Expected during play; the front end
    /// shows a status message and carries on.
    #[error("not enough {resource}: need {needed}, have {available:.2}")]
    Insufficient {
        resource: String,
        needed: f64,
        available: f64,
    },

    /// A tier the operation depends on is not configured.
    #[error("no tier {index} is configured")]
    MissingTier { index: usize },

    /// Rolling requires at least one rarity in the pool.
    #[error("the rune pool is empty")]
    EmptyRunePool,

    /// Tier index outside `0..tier_count`.
    #[error("tier index {index} out of range (have {tier_count} tiers)")]
    InvalidTier { index: usize, tier_count: usize },

    /// `buy_higher_tier` called with index 0.
    #[error("tier 0 is bought with currency, not with a lower tier")]
    NotAHigherTier,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("could not parse configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl EconomyError {
    /// True for conditions the player can fix by waiting or earning more.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, EconomyError::Insufficient { .. })
    }

    /// True for faults in the supplied configuration data.
    pub fn is_config_fault(&self) -> bool {
        matches!(
            self,
            EconomyError::MissingTier { .. }
                | EconomyError::EmptyRunePool
                | EconomyError::InvalidConfig(_)
                | EconomyError::ConfigParse(_)
        )
    }
}
