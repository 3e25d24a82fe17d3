//! Configuration and CLI argument handling

use std::{path::PathBuf, time::Duration};

use clap::Parser;

use crate::{
    shell::ShellOptions,
    state::{FlashInterval, PauseMode},
};

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "productivity-timer")]
#[command(about = "An always-on-top elapsed-time widget that flashes at a configurable interval")]
#[command(version)]
pub struct Config {
    /// Flash interval, e.g. 10s, 5m, 1h or a number of minutes
    #[arg(short, long, default_value = "60m")]
    pub interval: FlashInterval,

    /// Clock redraw cadence in milliseconds
    #[arg(long, default_value = "50", value_parser = clap::value_parser!(u64).range(1..))]
    pub tick_ms: u64,

    /// How long each flash colour is shown, in milliseconds
    #[arg(long, default_value = "500", value_parser = clap::value_parser!(u64).range(1..))]
    pub flash_step_ms: u64,

    /// What pausing does to the clock and the interval deadline
    #[arg(long, value_enum, default_value_t = PauseMode::Freeze)]
    pub pause_mode: PauseMode,

    /// Do not try to colour the window title bar
    #[arg(long)]
    pub no_tint: bool,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    /// Tracing filter directive for this crate
    pub fn log_filter(&self) -> String {
        format!("productivity_timer={}", self.log_level())
    }

    pub fn shell_options(&self) -> ShellOptions {
        ShellOptions {
            tick: Duration::from_millis(self.tick_ms),
            flash_step: Duration::from_millis(self.flash_step_ms),
        }
    }
}
