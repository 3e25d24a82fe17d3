//! Utility functions module
//!
//! This module contains helpers used throughout the application.

pub mod format;
pub mod signals;

// Re-export main functions
pub use format::{format_count, format_elapsed};
pub use signals::shutdown_signal;
