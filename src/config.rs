//! Watcher configuration.
//!
//! [`WatchConfig`] is built once at startup from the process environment
//! and passed by reference to every component. It never changes afterwards.

use crate::error::{Result, WatchError};
use std::time::Duration;

/// Environment variable holding the status API token.
pub const PRACTICUM_TOKEN: &str = "PRACTICUM_TOKEN";
/// Environment variable holding the Telegram bot token.
pub const TELEGRAM_TOKEN: &str = "TELEGRAM_TOKEN";
/// Environment variable holding the destination chat id.
pub const TELEGRAM_CHAT_ID: &str = "TELEGRAM_CHAT_ID";

const ENDPOINT_VAR: &str = "HOMEWORK_ENDPOINT";
const TELEGRAM_API_VAR: &str = "TELEGRAM_API_URL";
const RETRY_PERIOD_VAR: &str = "RETRY_PERIOD_SECS";
const REQUEST_TIMEOUT_VAR: &str = "REQUEST_TIMEOUT_SECS";
const LOG_DIR_VAR: &str = "HOMEWORK_BOT_LOG_DIR";

/// Default homework status endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";
/// Default Telegram Bot API base URL.
pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";
/// Seconds between polls.
pub const DEFAULT_RETRY_PERIOD_SECS: u64 = 600;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// The three secrets the watcher needs.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    /// Status API token, sent as `Authorization: OAuth <token>`.
    pub practicum_token: String,
    /// Telegram bot token.
    pub telegram_token: String,
    /// Chat that receives verdict messages.
    pub telegram_chat_id: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("practicum_token", &redact(&self.practicum_token))
            .field("telegram_token", &redact(&self.telegram_token))
            .field("telegram_chat_id", &self.telegram_chat_id)
            .finish()
    }
}

fn redact(secret: &str) -> &'static str {
    if secret.is_empty() { "<empty>" } else { "<redacted>" }
}

impl Credentials {
    /// Read credentials through `lookup`. Absent variables become empty strings.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).unwrap_or_default().trim().to_owned();
        Self {
            practicum_token: read(PRACTICUM_TOKEN),
            telegram_token: read(TELEGRAM_TOKEN),
            telegram_chat_id: read(TELEGRAM_CHAT_ID),
        }
    }

    /// `true` iff all three credentials are non-empty.
    #[must_use]
    pub fn check_tokens(&self) -> bool {
        self.first_missing().is_none()
    }

    /// Name of the first empty credential, if any.
    #[must_use]
    pub fn first_missing(&self) -> Option<&'static str> {
        [
            (PRACTICUM_TOKEN, &self.practicum_token),
            (TELEGRAM_TOKEN, &self.telegram_token),
            (TELEGRAM_CHAT_ID, &self.telegram_chat_id),
        ]
        .into_iter()
        .find(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
    }
}

/// Immutable runtime configuration.
#[derive(Debug, Clone)]
pub struct WatchConfig {
    /// API and bot secrets.
    pub credentials: Credentials,
    /// Status endpoint polled every cycle.
    pub endpoint: String,
    /// Telegram Bot API base URL, without a trailing slash.
    pub telegram_api_url: String,
    /// Fixed sleep between cycles, applied after failures too.
    pub retry_period: Duration,
    /// Per-request HTTP timeout.
    pub request_timeout: Duration,
    /// Optional directory for a rolling log file.
    pub log_dir: Option<String>,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            credentials: Credentials::default(),
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            telegram_api_url: DEFAULT_TELEGRAM_API_URL.to_owned(),
            retry_period: Duration::from_secs(DEFAULT_RETRY_PERIOD_SECS),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            log_dir: None,
        }
    }
}

impl WatchConfig {
    /// Build a config from the process environment.
    ///
    /// # Errors
    ///
    /// See [`WatchConfig::from_lookup`].
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config through `lookup`, applying overrides onto the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`WatchError::MissingCredential`] when a credential is empty
    /// and [`WatchError::Config`] when an override does not parse.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let credentials = Credentials::from_lookup(&lookup);
        let mut config = Self {
            credentials,
            ..Self::default()
        };

        let non_empty = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_owned())
                .filter(|v| !v.is_empty())
        };

        if let Some(endpoint) = non_empty(ENDPOINT_VAR) {
            config.endpoint = endpoint;
        }
        if let Some(url) = non_empty(TELEGRAM_API_VAR) {
            config.telegram_api_url = url.trim_end_matches('/').to_owned();
        }
        if let Some(raw) = non_empty(RETRY_PERIOD_VAR) {
            config.retry_period = Duration::from_secs(parse_secs(RETRY_PERIOD_VAR, &raw)?);
        }
        if let Some(raw) = non_empty(REQUEST_TIMEOUT_VAR) {
            config.request_timeout = Duration::from_secs(parse_secs(REQUEST_TIMEOUT_VAR, &raw)?);
        }
        config.log_dir = non_empty(LOG_DIR_VAR);

        config.validate()?;
        Ok(config)
    }

    /// Validates this configuration.
    ///
    /// Checks that every credential is present, both periods are non-zero
    /// and both URLs are set.
    ///
    /// # Errors
    ///
    /// Returns [`WatchError::MissingCredential`] naming the first empty
    /// credential, or [`WatchError::Config`] for a zero period or empty URL.
    pub fn validate(&self) -> Result<()> {
        if let Some(name) = self.credentials.first_missing() {
            return Err(WatchError::MissingCredential(name));
        }
        if self.retry_period.is_zero() {
            return Err(WatchError::Config(
                "retry period must be greater than 0".into(),
            ));
        }
        if self.request_timeout.is_zero() {
            return Err(WatchError::Config(
                "request timeout must be greater than 0".into(),
            ));
        }
        if self.endpoint.is_empty() || self.telegram_api_url.is_empty() {
            return Err(WatchError::Config("endpoint URLs must not be empty".into()));
        }
        Ok(())
    }
}

fn parse_secs(key: &str, raw: &str) -> Result<u64> {
    raw.parse::<u64>()
        .map_err(|e| WatchError::Config(format!("{key}={raw:?} is not a number of seconds: {e}")))
}
