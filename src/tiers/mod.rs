//! The tier ledger: one rung per resource, each bought with the rung below.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
