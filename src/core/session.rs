//! Session clock: decides when the economy ticks and by how much.
//!
//! The clock measures real elapsed time with a monotonic [`Instant`] instead
//! of trusting the nominal period, so a late poll produces a larger `dt`
//! rather than losing simulated time.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockState {
    NotStarted,
    Running { last_tick: Instant },
    Stopped,
}

#[derive(Debug, Clone)]
pub struct SessionClock {
    period: Duration,
    state: ClockState,
}

impl SessionClock {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            state: ClockState::NotStarted,
        }
    }

    pub fn state(&self) -> ClockState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, ClockState::Running { .. })
    }

    /// Starts a new cadence measured from `now`. Restarting a running or
    /// stopped clock discards the old reference point.
    pub fn start(&mut self, now: Instant) {
        self.state = ClockState::Running { last_tick: now };
        tracing::info!(period_ms = self.period.as_millis() as u64, "session clock started");
    }

    pub fn stop(&mut self) {
        if self.is_running() {
            tracing::info!("session clock stopped");
        }
        self.state = ClockState::Stopped;
    }

    /// Returns the seconds to simulate if a period has elapsed since the last
    /// tick, and moves the reference point to `now`.
    pub fn poll(&mut self, now: Instant) -> Option<f64> {
        let ClockState::Running { last_tick } = self.state else {
            return None;
        };
        let elapsed = now.saturating_duration_since(last_tick);
        if elapsed < self.period {
            return None;
        }
        self.state = ClockState::Running { last_tick: now };
        Some(elapsed.as_secs_f64())
    }

    /// Time left until the next tick is due; zero when overdue or not running.
    pub fn time_until_tick(&self, now: Instant) -> Duration {
        match self.state {
            ClockState::Running { last_tick } => self
                .period
                .saturating_sub(now.saturating_duration_since(last_tick)),
            _ => Duration::ZERO,
        }
    }
}
