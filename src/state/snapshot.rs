//! Serializable view of the timer engine

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::time::Instant;

use super::{PauseMode, TimerEngine};
use crate::utils::format_elapsed;

/// Point-in-time status of the engine, logged as JSON on request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimerSnapshot {
    pub elapsed: String,
    pub elapsed_ms: u64,
    pub paused: bool,
    pub pause_mode: PauseMode,
    pub interval_count: u64,
    pub flash_interval: String,
    pub flash_interval_secs: u64,
    pub next_flash_in_secs: u64,
    pub started_at: DateTime<Utc>,
    pub taken_at: DateTime<Utc>,
}

impl TimerSnapshot {
    /// Capture the engine state at `now`
    pub fn capture(engine: &TimerEngine, now: Instant) -> Self {
        let elapsed = engine.elapsed(now);
        let taken_at = Utc::now();
        let since_origin =
            chrono::Duration::from_std(elapsed).unwrap_or_else(|_| chrono::Duration::zero());

        Self {
            elapsed: format_elapsed(elapsed),
            elapsed_ms: elapsed.as_millis() as u64,
            paused: engine.is_paused(),
            pause_mode: engine.pause_mode(),
            interval_count: engine.interval_count(),
            flash_interval: engine.flash_interval().to_string(),
            flash_interval_secs: engine.flash_interval().as_duration().as_secs(),
            next_flash_in_secs: engine.time_until_deadline(now).as_secs(),
            started_at: taken_at - since_origin,
            taken_at,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::state::{FlashInterval, IntervalPreset};

    #[test]
    fn captures_engine_state() {
        let t0 = Instant::now();
        let mut engine = TimerEngine::new(
            IntervalPreset::OneMinute.interval(),
            PauseMode::Freeze,
            t0,
        );
        engine.advance_interval();
        let snapshot = engine.snapshot(t0 + Duration::from_millis(3_600));

        assert_eq!(snapshot.elapsed, "0:00:03");
        assert_eq!(snapshot.elapsed_ms, 3_600);
        assert!(!snapshot.paused);
        assert_eq!(snapshot.interval_count, 1);
        assert_eq!(snapshot.flash_interval, "1m");
        assert_eq!(snapshot.flash_interval_secs, 60);
        assert_eq!(snapshot.next_flash_in_secs, 116);
        assert!(snapshot.started_at <= snapshot.taken_at);
    }

    #[test]
    fn serializes_to_json() {
        let t0 = Instant::now();
        let engine = TimerEngine::new(FlashInterval::DEFAULT, PauseMode::Suspend, t0);
        let json = engine.snapshot(t0).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["pause_mode"], "suspend");
        assert_eq!(value["flash_interval"], "1h");
        assert_eq!(value["interval_count"], 0);
    }
}
