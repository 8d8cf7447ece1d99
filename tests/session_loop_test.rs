//! Integration test: the session clock driving the economy
//!
//! Feeds synthetic `Instant`s through `App` the same way the terminal loop
//! does, so simulated time can be checked against elapsed time exactly.

use std::io::Write;
use std::time::{Duration, Instant};
use tierforge::app::App;
use tierforge::core::ClockState;
use tierforge::input::{Action, Screen};
use tierforge::EconomyConfig;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn test_no_ticks_before_start() {
    let mut app = App::new(EconomyConfig::default(), false);
    let t0 = Instant::now();

    assert!(app.on_frame(t0 + ms(5_000)).is_none());
    assert_eq!(app.economy.currency(), 10.0);
    assert_eq!(app.clock.state(), ClockState::NotStarted);
}

#[test]
fn test_simulated_time_tracks_elapsed_time() {
    let mut app = App::new(EconomyConfig::default(), false);
    app.economy.set_tier_amount(0, 4.0).unwrap();
    let t0 = Instant::now();
    app.handle_action(Action::Start, t0);
    assert_eq!(app.screen, Screen::Game);

    // Jittery frames: some early, one badly late
    let mut simulated = 0.0;
    for offset in [30, 100, 180, 210, 650, 700, 760, 1000] {
        if let Some(result) = app.on_frame(t0 + ms(offset)) {
            simulated += result.dt;
        }
    }

    assert!((simulated - 1.0).abs() < 1e-9);
    // 4 * (1 + 2) * 0.25 = 3 coins per second
    assert!((app.economy.currency() - 13.0).abs() < 1e-9);
}

#[test]
fn test_quit_stops_the_clock() {
    let mut app = App::new(EconomyConfig::default(), false);
    let t0 = Instant::now();
    app.handle_action(Action::Start, t0);
    app.handle_action(Action::Quit, t0 + ms(50));

    assert!(app.should_quit);
    assert_eq!(app.clock.state(), ClockState::Stopped);
    assert!(app.on_frame(t0 + ms(10_000)).is_none());
}

#[test]
fn test_restart_does_not_catch_up() {
    let mut app = App::new(EconomyConfig::default(), false);
    let t0 = Instant::now();
    app.clock.start(t0);
    app.clock.stop();

    let later = t0 + ms(60_000);
    app.clock.start(later);
    let dt = app.on_frame(later + ms(100)).map(|r| r.dt).unwrap();
    assert!((dt - 0.1).abs() < 1e-9);
}

#[test]
fn test_tick_interval_from_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "tick_interval_ms": 250, "speed_multiplier": 1.0 }}"#).unwrap();
    let config = EconomyConfig::load(file.path()).unwrap();

    let mut app = App::new(config, false);
    app.economy.set_tier_amount(0, 1.0).unwrap();
    let t0 = Instant::now();
    app.handle_action(Action::Start, t0);

    assert!(app.on_frame(t0 + ms(200)).is_none());
    let result = app.on_frame(t0 + ms(250)).unwrap();
    // 1 * (1 + 1) * 1.0 for a quarter second
    assert!((result.coins_gained - 0.5).abs() < 1e-9);
}
