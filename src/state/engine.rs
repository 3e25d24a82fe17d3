//! Interval timer engine
//!
//! Tracks elapsed time since the last restart and the deadline of the next
//! flash. The engine never reads the clock itself: every operation that
//! depends on time receives the current instant from the caller.

use std::time::Duration;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tokio::time::Instant;
use tracing::{debug, info};

use super::{FlashInterval, TimerSnapshot};

/// How pausing interacts with the clock origin and the interval deadline
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PauseMode {
    /// Pausing only freezes the displayed time. The interval deadline keeps
    /// running and resuming jumps the clock forward by the paused duration.
    #[default]
    Freeze,
    /// Pausing suspends both the clock and the interval deadline; resuming
    /// continues from the frozen value.
    Suspend,
}

/// Elapsed-time and interval state machine
#[derive(Debug, Clone)]
pub struct TimerEngine {
    start_time: Instant,
    paused_at: Option<Instant>,
    frozen_elapsed: Duration,
    flash_interval: FlashInterval,
    interval_count: u64,
    next_interval_deadline: Instant,
    /// Set once `poll_interval_elapsed` reported the current deadline
    expiry_reported: bool,
    pause_mode: PauseMode,
}

impl TimerEngine {
    /// Create an engine that starts measuring at `now`
    pub fn new(flash_interval: FlashInterval, pause_mode: PauseMode, now: Instant) -> Self {
        Self {
            start_time: now,
            paused_at: None,
            frozen_elapsed: Duration::ZERO,
            flash_interval,
            interval_count: 0,
            next_interval_deadline: now + flash_interval.as_duration(),
            expiry_reported: false,
            pause_mode,
        }
    }

    pub fn start(&mut self, now: Instant) {
        self.restart(now);
    }

    /// Reset the clock origin, the counter and the interval deadline
    pub fn restart(&mut self, now: Instant) {
        self.start_time = now;
        self.paused_at = None;
        self.frozen_elapsed = Duration::ZERO;
        self.interval_count = 0;
        self.next_interval_deadline = now + self.flash_interval.as_duration();
        self.expiry_reported = false;
        info!("Timer restarted, next flash in {}", self.flash_interval);
    }

    /// Toggle the paused flag and return the new value
    pub fn pause_resume(&mut self, now: Instant) -> bool {
        match self.paused_at.take() {
            Some(paused_at) => {
                if self.pause_mode == PauseMode::Suspend {
                    let paused_for = now.saturating_duration_since(paused_at);
                    self.start_time += paused_for;
                    self.next_interval_deadline += paused_for;
                    debug!("Resumed after {:?}, origin and deadline shifted", paused_for);
                } else {
                    debug!("Resumed, clock continues from the original origin");
                }
                info!("Timer resumed");
                false
            }
            None => {
                self.frozen_elapsed = self.live_elapsed(now);
                self.paused_at = Some(now);
                info!("Timer paused at {:?}", self.frozen_elapsed);
                true
            }
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused_at.is_some()
    }

    /// Elapsed time since the last restart, frozen while paused
    pub fn elapsed(&self, now: Instant) -> Duration {
        if self.is_paused() {
            self.frozen_elapsed
        } else {
            self.live_elapsed(now)
        }
    }

    fn live_elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.start_time)
    }

    /// Change the interval; this also restarts the clock and the counter
    pub fn set_flash_interval(&mut self, flash_interval: FlashInterval, now: Instant) {
        info!("Flash interval set to {}", flash_interval);
        self.flash_interval = flash_interval;
        self.interval_count = 0;
        self.restart(now);
    }

    pub fn flash_interval(&self) -> FlashInterval {
        self.flash_interval
    }

    pub fn interval_count(&self) -> u64 {
        self.interval_count
    }

    pub fn next_interval_deadline(&self) -> Instant {
        self.next_interval_deadline
    }

    pub fn pause_mode(&self) -> PauseMode {
        self.pause_mode
    }

    /// Report whether the current interval has elapsed.
    ///
    /// Returns true at most once per deadline; the caller acknowledges the
    /// expiry with [`TimerEngine::advance_interval`], which arms the next one.
    pub fn poll_interval_elapsed(&mut self, now: Instant) -> bool {
        if self.is_paused() || self.expiry_reported || now < self.next_interval_deadline {
            return false;
        }
        self.expiry_reported = true;
        debug!("Interval {} elapsed", self.interval_count + 1);
        true
    }

    /// Count a completed interval and move the deadline one interval forward
    pub fn advance_interval(&mut self) {
        self.interval_count += 1;
        self.next_interval_deadline += self.flash_interval.as_duration();
        self.expiry_reported = false;
        debug!("Interval count is now {}", self.interval_count);
    }

    /// Time left before the next deadline, zero once it has passed
    pub fn time_until_deadline(&self, now: Instant) -> Duration {
        self.next_interval_deadline.saturating_duration_since(now)
    }

    pub fn snapshot(&self, now: Instant) -> TimerSnapshot {
        TimerSnapshot::capture(self, now)
    }
}
