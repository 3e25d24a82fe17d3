//! Timer state module
//!
//! This module contains the interval timer engine and the types it works with.

pub mod engine;
pub mod interval;
pub mod snapshot;

// Re-export main types
pub use engine::{PauseMode, TimerEngine};
pub use interval::{FlashInterval, IntervalError, IntervalPreset};
pub use snapshot::TimerSnapshot;
