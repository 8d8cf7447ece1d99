//! Runes: randomly drawn items that permanently boost tier output.
//!
//! Boosts combine by the additive-extras rule, so owning more runes grows a
//! tier's multiplier linearly rather than geometrically.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
