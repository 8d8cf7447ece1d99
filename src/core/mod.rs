//! Core economy state and simulation.

pub mod config;
pub mod constants;
pub mod economy;
pub mod error;
pub mod session;
pub mod tick;

pub use config::EconomyConfig;
pub use economy::Economy;
pub use error::{EconomyError, EconomyResult};
pub use session::{ClockState, SessionClock};
pub use tick::TickResult;
