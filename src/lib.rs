//! Tierforge - Tiered Idle Economy Library
//!
//! A chain of resource tiers where each tier is bought with the one below it
//! and passively converts back into it, boosted by randomly drawn runes. This
//! module exposes the engine and the terminal front end for testing and
//! external use.

pub mod app;
pub mod build_info;
pub mod core;
pub mod input;
pub mod runes;
pub mod simulator;
pub mod tiers;
pub mod ui;
pub mod utils;

pub use crate::core::{Economy, EconomyConfig, EconomyError, EconomyResult};
