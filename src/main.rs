//! Productivity Timer - an always-on-top elapsed-time widget
//!
//! This is the main entry point for the productivity-timer application.

use std::{fs::File, sync::Mutex};

use tokio::time::Instant;
use tracing::info;

use productivity_timer::{
    config::Config,
    platform,
    shell::{command::key_commands, Shell, TerminalRenderer, TerminalSession},
    state::TimerEngine,
    tasks::run_shell,
    utils::shutdown_signal,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    let subscriber = tracing_subscriber::fmt().with_env_filter(config.log_filter());
    match &config.log_file {
        Some(path) => subscriber
            .with_ansi(false)
            .with_writer(Mutex::new(File::create(path)?))
            .init(),
        None => subscriber.with_writer(std::io::stderr).init(),
    }

    info!("Starting productivity-timer v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration: interval={}, tick={}ms, flash step={}ms, pause mode={:?}",
        config.interval, config.tick_ms, config.flash_step_ms, config.pause_mode
    );

    let engine = TimerEngine::new(config.interval, config.pause_mode, Instant::now());
    let tint = platform::detect(!config.no_tint);
    let mut shell = Shell::new(engine, TerminalRenderer::stdout(), tint, config.shell_options());

    let session = TerminalSession::enter()?;
    run_shell(&mut shell, key_commands(), shutdown_signal()).await;
    drop(session);

    info!(
        "Shutdown complete after {} intervals",
        shell.engine().interval_count()
    );
    Ok(())
}
