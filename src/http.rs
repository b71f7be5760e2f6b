//! Shared HTTP client for the status API and Telegram requests.

use crate::config::WatchConfig;
use crate::error::WatchError;
use std::error::Error as _;

/// User-Agent sent with every request.
const USER_AGENT: &str = concat!("homework-bot/", env!("CARGO_PKG_VERSION"));

/// Build a [`reqwest::Client`] with the configured request timeout.
///
/// # Errors
///
/// Returns [`WatchError::Config`] if the client cannot be constructed.
pub fn build_client(config: &WatchConfig) -> Result<reqwest::Client, WatchError> {
    reqwest::Client::builder()
        .timeout(config.request_timeout)
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| WatchError::Config(format!("failed to build HTTP client: {e}")))
}

/// Render a request error with its full cause chain and without the URL.
///
/// Telegram puts the bot token in the request path, so the URL must never
/// reach the logs.
pub fn describe_error(err: reqwest::Error) -> String {
    let err = err.without_url();
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
