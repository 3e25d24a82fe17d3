//! Cooperative event loop driving the shell

use std::future::Future;

use futures::stream::{Stream, StreamExt};
use tokio::time::{sleep_until, Instant};
use tracing::{debug, info};

use crate::shell::{Command, Render, Shell};

/// Drive `shell` until it closes or `shutdown` resolves.
///
/// Everything runs on the calling task: the loop sleeps until the earliest
/// scheduled deadline, runs the due tasks, and applies commands as they
/// arrive. When the command stream ends the timer keeps running until
/// shutdown.
pub async fn run_shell<R, S, F>(shell: &mut Shell<R>, commands: S, shutdown: F)
where
    R: Render,
    S: Stream<Item = Command> + Unpin,
    F: Future<Output = ()>,
{
    info!("Starting shell event loop");
    let mut commands = commands.fuse();
    tokio::pin!(shutdown);

    shell.start(Instant::now());

    while !shell.is_closed() {
        let next_deadline = shell.next_deadline();
        let wake = async move {
            match next_deadline {
                Some(at) => sleep_until(at).await,
                None => futures::future::pending::<()>().await,
            }
        };

        tokio::select! {
            _ = wake => {
                shell.run_due(Instant::now());
            }
            Some(command) = commands.next() => {
                shell.handle(command, Instant::now());
            }
            _ = &mut shutdown => {
                info!("Shutdown requested");
                shell.handle(Command::Close, Instant::now());
            }
        }
    }

    debug!("Shell event loop finished");
}
