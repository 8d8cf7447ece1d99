//! Front-end application state: the economy plus everything the terminal UI
//! needs to remember between frames.

use crate::core::constants::ACTIVITY_LOG_CAPACITY;
use crate::core::{Economy, EconomyConfig, EconomyError, SessionClock, TickResult};
use crate::input::{Action, Overlay, Screen};
use crate::utils::{fmt_count, DebugPanel};
use std::collections::VecDeque;
use std::time::Instant;

/// Newest-first log of recent player-facing events.
#[derive(Debug, Clone, Default)]
pub struct ActivityLog {
    entries: VecDeque<String>,
}

impl ActivityLog {
    pub fn push(&mut self, message: impl Into<String>) {
        self.entries.push_front(message.into());
        self.entries.truncate(ACTIVITY_LOG_CAPACITY);
    }

    pub fn entries(&self) -> impl Iterator<Item = &String> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&str> {
        self.entries.front().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub struct App {
    pub economy: Economy,
    pub clock: SessionClock,
    pub screen: Screen,
    pub overlay: Overlay,
    pub selected_tier: usize,
    /// Result line shown under the roll button.
    pub last_roll: Option<String>,
    pub activity: ActivityLog,
    pub debug_enabled: bool,
    pub debug_panel: DebugPanel,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: EconomyConfig, debug_enabled: bool) -> Self {
        let clock = SessionClock::new(config.tick_interval());
        Self {
            economy: Economy::new(config),
            clock,
            screen: Screen::Start,
            overlay: Overlay::None,
            selected_tier: 0,
            last_roll: None,
            activity: ActivityLog::default(),
            debug_enabled,
            debug_panel: DebugPanel::new(),
            should_quit: false,
        }
    }

    /// Advances the economy if the clock says a tick is due.
    pub fn on_frame(&mut self, now: Instant) -> Option<TickResult> {
        let dt = self.clock.poll(now)?;
        Some(self.economy.advance(dt))
    }

    pub fn handle_action(&mut self, action: Action, now: Instant) {
        match action {
            Action::None => {}
            Action::Quit => {
                self.clock.stop();
                self.should_quit = true;
            }
            Action::Start => {
                if self.screen == Screen::Start {
                    self.screen = Screen::Game;
                    self.economy.advance(0.0);
                    self.clock.start(now);
                }
            }
            Action::SelectUp => {
                self.selected_tier = self.selected_tier.saturating_sub(1);
            }
            Action::SelectDown => {
                if self.selected_tier + 1 < self.economy.tier_count() {
                    self.selected_tier += 1;
                }
            }
            Action::BuySelected => self.buy(self.selected_tier),
            Action::BuyTier(index) => {
                if index < self.economy.tier_count() {
                    self.selected_tier = index;
                    self.buy(index);
                }
            }
            Action::RollRune => self.roll(),
            Action::ToggleInventory => {
                self.overlay = match self.overlay {
                    Overlay::Inventory => Overlay::None,
                    _ => Overlay::Inventory,
                };
            }
            Action::ToggleDebug => {
                if self.debug_enabled {
                    self.debug_panel.toggle(&self.economy);
                    self.overlay = if self.debug_panel.is_open {
                        Overlay::Debug
                    } else {
                        Overlay::None
                    };
                }
            }
            Action::CloseOverlay => {
                self.debug_panel.close();
                self.overlay = Overlay::None;
            }
            Action::DebugUp => self.debug_panel.navigate_up(),
            Action::DebugDown => self.debug_panel.navigate_down(),
            Action::DebugChar(c) => self.debug_panel.handle_char(c),
            Action::DebugBackspace => self.debug_panel.handle_backspace(),
            Action::DebugApply => {
                match self.debug_panel.apply(&mut self.economy) {
                    Ok(message) => self.activity.push(message),
                    Err(err) => self.activity.push(format!("Debug apply failed: {}", err)),
                }
                self.overlay = Overlay::None;
            }
            Action::DebugClear => {
                let message = self.debug_panel.clear(&mut self.economy);
                self.activity.push(message);
            }
        }
    }

    fn buy(&mut self, index: usize) {
        let name = self.economy.tier_name(index);
        match self.economy.buy(index) {
            Ok(purchase) if purchase.tiers_reset > 0 => {
                self.activity.push(format!(
                    "Bought {} x{}, {} lower tier(s) reset",
                    name,
                    fmt_count(purchase.amount_gained),
                    purchase.tiers_reset
                ));
            }
            Ok(purchase) => {
                self.activity.push(format!(
                    "Bought {} x{} for {} coins",
                    name,
                    fmt_count(purchase.amount_gained),
                    purchase.price_paid
                ));
            }
            Err(err) => self.activity.push(refusal_message(&name, &err)),
        }
    }

    fn roll(&mut self) {
        match self.economy.roll_rune() {
            Ok(roll) => {
                let message = format!("You rolled: {} rune!", roll.label);
                self.activity.push(message.clone());
                self.last_roll = Some(message);
            }
            Err(EconomyError::Insufficient { resource, needed, .. }) => {
                self.last_roll = Some(format!(
                    "Not enough {} to roll (need {}).",
                    resource,
                    fmt_count(needed)
                ));
            }
            Err(err) => {
                let message = format!("Cannot roll: {}", err);
                self.activity.push(message.clone());
                self.last_roll = Some(message);
            }
        }
    }
}

fn refusal_message(name: &str, err: &EconomyError) -> String {
    match err {
        EconomyError::Insufficient {
            resource, needed, ..
        } => format!(
            "Need {} {} to buy {}",
            fmt_count(*needed),
            resource,
            name
        ),
        other => format!("Cannot buy {}: {}", name, other),
    }
}
