//! Fixed-interval tick scheduler
//!
//! [`Scheduler`] decides *when* a tick is due; the caller decides *what* a tick
//! does by passing a callback to [`Scheduler::poll`]. It never sleeps or reads
//! the clock itself, so the event loop stays in charge of time and tests can
//! feed it synthetic [`Instant`]s.
//!
//! # Interval control
//!
//! - [`Scheduler::speed_up`] halves the interval, never below [`MIN_INTERVAL`]
//! - [`Scheduler::slow_down`] doubles it, never above [`MAX_INTERVAL`]
//! - [`Scheduler::toggle_pause`] stops or restarts ticking; a restart waits a
//!   full interval before the next tick

use std::time::{Duration, Instant};

/// Interval used when none is configured
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(1000);

/// Smallest interval reachable through [`Scheduler::speed_up`]
pub const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Largest interval reachable through [`Scheduler::slow_down`]; keeps every
/// deadline representable as an [`Instant`]
pub const MAX_INTERVAL: Duration = Duration::from_secs(60 * 60);

#[derive(Debug, Clone)]
pub struct Scheduler {
    interval: Duration,
    deadline: Instant,
    running: bool,
}

impl Scheduler {
    /// Create a running scheduler whose first tick is due at `now + interval`
    pub fn new(interval: Duration, now: Instant) -> Self {
        let interval = interval.clamp(MIN_INTERVAL, MAX_INTERVAL);
        Scheduler {
            interval,
            deadline: now + interval,
            running: true,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Halve the interval (floor: [`MIN_INTERVAL`])
    pub fn speed_up(&mut self) {
        self.interval = (self.interval / 2).max(MIN_INTERVAL);
        log::debug!("tick interval now {:?}", self.interval);
    }

    /// Double the interval (ceiling: [`MAX_INTERVAL`])
    pub fn slow_down(&mut self) {
        self.interval = self.interval.saturating_mul(2).min(MAX_INTERVAL);
        log::debug!("tick interval now {:?}", self.interval);
    }

    /// Pause a running scheduler, or resume a paused one.
    ///
    /// Returns whether the scheduler is running afterwards.
    pub fn toggle_pause(&mut self, now: Instant) -> bool {
        self.running = !self.running;
        if self.running {
            self.deadline = now + self.interval;
        }
        self.running
    }

    /// Run `on_tick` once if a tick is due at `now`, then re-arm.
    ///
    /// Ticks missed while the caller was busy are dropped, not replayed.
    pub fn poll<F: FnOnce()>(&mut self, now: Instant, on_tick: F) -> bool {
        if !self.running || now < self.deadline {
            return false;
        }
        on_tick();
        self.deadline = now + self.interval;
        true
    }

    /// How long until the next tick, or `None` while paused
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        if self.running {
            Some(self.deadline.saturating_duration_since(now))
        } else {
            None
        }
    }
}
