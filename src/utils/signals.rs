//! Signal handling for graceful shutdown

use tracing::info;

/// Wait for shutdown signals (SIGTERM, SIGINT).
///
/// If the handler cannot be installed the future never resolves, so the
/// widget can still be closed from the keyboard.
#[cfg(unix)]
pub async fn shutdown_signal() {
    use futures::stream::StreamExt;
    use signal_hook_tokio::Signals;

    let mut signals = match Signals::new([
        signal_hook::consts::SIGTERM,
        signal_hook::consts::SIGINT,
    ]) {
        Ok(signals) => signals,
        Err(e) => {
            tracing::warn!("Failed to install signal handler: {}", e);
            futures::future::pending::<()>().await;
            return;
        }
    };

    if let Some(signal) = signals.next().await {
        info!("Received signal: {}", signal);
    }
}

#[cfg(not(unix))]
pub async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received Ctrl+C"),
        Err(e) => {
            tracing::warn!("Failed to listen for Ctrl+C: {}", e);
            futures::future::pending::<()>().await;
        }
    }
}
