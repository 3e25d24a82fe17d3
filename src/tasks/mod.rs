//! Scheduling module
//!
//! This module contains the delayed-task scheduler, the flash animation and
//! the event loop that drives the shell.

pub mod flash;
pub mod runner;
pub mod scheduler;

// Re-export main types
pub use flash::{FlashSequence, TitleColor};
pub use runner::run_shell;
pub use scheduler::{Scheduler, TaskHandle};
