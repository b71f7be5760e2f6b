//! Poll loop.
//!
//! Each cycle fetches the latest statuses, validates the response,
//! translates the first homework into a verdict and hands it to the
//! notifier. Failures are logged and the loop sleeps the same fixed
//! period before trying again.

use crate::api::{StatusClient, check_response};
use crate::channels::traits::Notifier;
use crate::channels::{TelegramNotifier, send_message};
use crate::config::WatchConfig;
use crate::error::{ErrorClass, Result, WatchError};
use crate::verdict::parse_status;
use tracing::{error, info, warn};

/// Lifecycle of a built watcher.
///
/// A failed startup never yields a [`Watcher`]; the binary exits instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchState {
    /// Built, loop not entered yet.
    Starting,
    /// Steady state; never left except by process termination.
    Polling,
}

/// Result of one poll cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// A verdict was produced and handed to the notifier.
    Notified {
        /// Message text.
        message: String,
        /// Whether the channel accepted it.
        delivered: bool,
    },
    /// The API reported no homework changes.
    Unchanged,
    /// A step failed; the error was logged.
    Failed(ErrorClass),
}

/// Polls the status API and relays verdicts.
pub struct Watcher {
    config: WatchConfig,
    client: StatusClient,
    notifier: Box<dyn Notifier>,
    state: WatchState,
    /// Poll window start captured at startup. Never advanced.
    timestamp: i64,
}

impl Watcher {
    /// Create a watcher delivering through `notifier`.
    ///
    /// # Errors
    ///
    /// Returns the validation error if `config` is incomplete.
    pub fn new(config: WatchConfig, notifier: Box<dyn Notifier>) -> Result<Self> {
        config.validate()?;
        let client = StatusClient::new(&config)?;
        Ok(Self {
            config,
            client,
            notifier,
            state: WatchState::Starting,
            timestamp: chrono::Utc::now().timestamp(),
        })
    }

    /// Create a watcher delivering to Telegram.
    ///
    /// # Errors
    ///
    /// Same as [`Watcher::new`].
    pub fn with_telegram(config: WatchConfig) -> Result<Self> {
        let notifier = TelegramNotifier::new(&config)?;
        Self::new(config, Box::new(notifier))
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> WatchState {
        self.state
    }

    /// Probe the notifier once. Failures only produce a warning.
    pub async fn check_notifier(&self) {
        match self.notifier.health_check().await {
            Ok(true) => info!(channel = self.notifier.id(), "notifier reachable"),
            Ok(false) => warn!(channel = self.notifier.id(), "notifier health check failed"),
            Err(e) => warn!(channel = self.notifier.id(), "notifier health check error: {e}"),
        }
    }

    /// Run one fetch, validate, translate and notify pass.
    ///
    /// # Errors
    ///
    /// Propagates fetch, validation and translation errors. Delivery errors
    /// are swallowed by the notifier step.
    pub async fn poll_once(&self) -> Result<CycleOutcome> {
        let response = self.client.get_api_answer(self.timestamp).await?;
        let homeworks = check_response(&response)?;
        let Some(latest) = homeworks.first() else {
            info!("status unchanged");
            return Ok(CycleOutcome::Unchanged);
        };
        let message = parse_status(latest)?;
        let delivered = send_message(
            self.notifier.as_ref(),
            &self.config.credentials.telegram_chat_id,
            &message,
        )
        .await;
        Ok(CycleOutcome::Notified { message, delivered })
    }

    /// Run one cycle under the loop's error policy.
    pub async fn tick(&self) -> CycleOutcome {
        match self.poll_once().await {
            Ok(outcome) => outcome,
            Err(e) => {
                log_failure(&e);
                CycleOutcome::Failed(e.class())
            }
        }
    }

    /// Poll forever, sleeping the retry period after every cycle.
    pub async fn run(mut self) {
        self.state = WatchState::Polling;
        info!(
            retry_period_secs = self.config.retry_period.as_secs(),
            "bot started"
        );
        loop {
            self.tick().await;
            tokio::time::sleep(self.config.retry_period).await;
        }
    }
}

// Non-escalating errors are tagged in the log but handled exactly like the
// rest: nothing is forwarded to the chat for either class yet.
fn log_failure(err: &WatchError) {
    error!(escalate = !err.is_non_escalating(), "program failure: {err}");
}
