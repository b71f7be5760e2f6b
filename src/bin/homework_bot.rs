//! Homework review status bot.
//!
//! Reads credentials from the environment (and `.env`), then polls forever.

use homework_bot::logging;
use homework_bot::{WatchConfig, Watcher};
use std::path::Path;
use std::process::ExitCode;
use tracing::{error, info};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();

    let config = WatchConfig::from_env();
    let log_dir = config.as_ref().ok().and_then(|c| c.log_dir.clone());
    let _log_guard = logging::init(log_dir.as_deref().map(Path::new));

    info!("bot starting");
    let watcher = match config.and_then(Watcher::with_telegram) {
        Ok(watcher) => watcher,
        Err(e) => {
            error!(critical = true, "cannot start, shutting down: {e}");
            return ExitCode::FAILURE;
        }
    };

    watcher.check_notifier().await;
    watcher.run().await;
    ExitCode::SUCCESS
}
