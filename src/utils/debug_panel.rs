//! Debug panel for setting tier counts by hand.
//!
//! Activated with the `--debug` flag. Press backtick to toggle the panel.

use crate::core::{Economy, EconomyError, EconomyResult};

/// Debug panel state: one editable count per tier.
#[derive(Debug, Clone, Default)]
pub struct DebugPanel {
    pub is_open: bool,
    pub selected_index: usize,
    pub inputs: Vec<String>,
}

impl DebugPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the panel with each input showing the tier's current whole count.
    pub fn open(&mut self, economy: &Economy) {
        self.is_open = true;
        self.selected_index = 0;
        self.inputs = economy
            .tiers()
            .iter()
            .map(|t| format!("{}", t.amount.floor()))
            .collect();
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    pub fn toggle(&mut self, economy: &Economy) {
        if self.is_open {
            self.close();
        } else {
            self.open(economy);
        }
    }

    pub fn navigate_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn navigate_down(&mut self) {
        if self.selected_index + 1 < self.inputs.len() {
            self.selected_index += 1;
        }
    }

    /// Accepts digits and a decimal point into the selected input.
    pub fn handle_char(&mut self, c: char) {
        if let Some(input) = self.inputs.get_mut(self.selected_index) {
            if c.is_ascii_digit() || (c == '.' && !input.contains('.')) {
                if input == "0" && c != '.' {
                    input.clear();
                }
                input.push(c);
            }
        }
    }

    pub fn handle_backspace(&mut self) {
        if let Some(input) = self.inputs.get_mut(self.selected_index) {
            input.pop();
        }
    }

    /// Writes every input into the economy. Unparseable inputs count as 0.
    ///
    /// Nothing is written unless every input has a matching tier.
    pub fn apply(&mut self, economy: &mut Economy) -> EconomyResult<String> {
        let tier_count = economy.tier_count();
        if self.inputs.len() > tier_count {
            return Err(EconomyError::InvalidTier {
                index: tier_count,
                tier_count,
            });
        }
        for (index, input) in self.inputs.iter().enumerate() {
            let value = input.parse::<f64>().unwrap_or(0.0).max(0.0);
            economy.set_tier_amount(index, value)?;
        }
        self.close();
        Ok(format!("Applied test counts to {} tiers", self.inputs.len()))
    }

    /// Wipes every tier back to its starting state.
    pub fn clear(&mut self, economy: &mut Economy) -> &'static str {
        economy.clear_tiers();
        for input in &mut self.inputs {
            *input = "0".to_string();
        }
        "Cleared test counts"
    }
}
