//! Utility modules: debug panel, number formatting.

pub mod debug_panel;
pub mod format;

pub use debug_panel::*;
pub use format::*;
