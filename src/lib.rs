//! Productivity Timer - an always-on-top elapsed-time widget
//!
//! This library provides the interval timer engine, the scheduler that drives
//! the clock and flash animation, and the terminal presentation shell.

pub mod config;
pub mod platform;
pub mod shell;
pub mod state;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use shell::{Command, Shell, ShellOptions};
pub use state::{FlashInterval, IntervalPreset, PauseMode, TimerEngine};
pub use tasks::run_shell;
pub use utils::signals::shutdown_signal;
