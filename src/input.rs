//! Key handling: maps terminal key events to economy actions.
//!
//! Kept free of rendering so the mapping can be tested without a terminal.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Top-level screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Controls overview; the session clock is not running yet.
    Start,
    Game,
}

/// Game-screen overlay. At most one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    Inventory,
    Debug,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    Quit,
    Start,
    SelectUp,
    SelectDown,
    BuySelected,
    BuyTier(usize),
    RollRune,
    ToggleInventory,
    ToggleDebug,
    CloseOverlay,
    DebugUp,
    DebugDown,
    DebugChar(char),
    DebugBackspace,
    DebugApply,
    DebugClear,
}

/// Translates a key press given the current screen and overlay.
///
/// `debug_enabled` gates the backtick toggle so normal players never see the
/// debug panel.
pub fn map_key(screen: Screen, overlay: Overlay, debug_enabled: bool, key: KeyEvent) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }

    match screen {
        Screen::Start => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => Action::Start,
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Action::Quit,
            _ => Action::None,
        },
        Screen::Game => match overlay {
            Overlay::Debug => map_debug_key(key.code),
            Overlay::Inventory => match key.code {
                KeyCode::Char('i') | KeyCode::Char('I') | KeyCode::Esc => Action::CloseOverlay,
                KeyCode::Char('q') | KeyCode::Char('Q') => Action::Quit,
                _ => Action::None,
            },
            Overlay::None => map_game_key(key.code, debug_enabled),
        },
    }
}

fn map_game_key(code: KeyCode, debug_enabled: bool) -> Action {
    match code {
        KeyCode::Up | KeyCode::Char('k') => Action::SelectUp,
        KeyCode::Down | KeyCode::Char('j') => Action::SelectDown,
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('b') => Action::BuySelected,
        // 1..9 buy tiers 0..8, 0 buys tier 9
        KeyCode::Char(c @ '1'..='9') => Action::BuyTier(c as usize - '1' as usize),
        KeyCode::Char('0') => Action::BuyTier(9),
        KeyCode::Char('r') | KeyCode::Char('R') => Action::RollRune,
        KeyCode::Char('i') | KeyCode::Char('I') => Action::ToggleInventory,
        KeyCode::Char('`') if debug_enabled => Action::ToggleDebug,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Action::Quit,
        _ => Action::None,
    }
}

fn map_debug_key(code: KeyCode) -> Action {
    match code {
        KeyCode::Up => Action::DebugUp,
        KeyCode::Down => Action::DebugDown,
        KeyCode::Char(c) if c.is_ascii_digit() || c == '.' => Action::DebugChar(c),
        KeyCode::Backspace => Action::DebugBackspace,
        KeyCode::Enter => Action::DebugApply,
        KeyCode::Char('c') | KeyCode::Char('C') => Action::DebugClear,
        KeyCode::Char('`') | KeyCode::Esc => Action::CloseOverlay,
        _ => Action::None,
    }
}
