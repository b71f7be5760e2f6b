//! Error types for the homework status watcher.
//!
//! Every step of a poll cycle returns [`WatchError`]. The loop inspects
//! [`WatchError::class`] to decide how a failure is handled; credential
//! and config errors are only ever produced before the loop starts.

/// How the poll loop should treat an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// Logged locally and never forwarded to the chat.
    NonEscalating,
    /// Worth surfacing; currently logged the same way.
    Escalating,
    /// Stops the process before the loop is entered.
    Fatal,
}

/// Top-level error type for the watcher.
#[derive(Debug, thiserror::Error)]
pub enum WatchError {
    /// Transport failure or a non-200 reply from the status API.
    #[error("connection error: {0}")]
    Connection(String),

    /// The status API replied 200 with a body that is not JSON.
    #[error("invalid JSON from status API: {0}")]
    InvalidJson(String),

    /// The decoded response is not a JSON object.
    #[error("empty response from API: expected an object, got {0}")]
    EmptyResponse(String),

    /// The response object has no `homeworks` key.
    #[error("missing homeworks key")]
    MissingHomeworks,

    /// `homeworks` is present but is not a list.
    #[error("expected a list under homeworks, got {0}")]
    NotAList(String),

    /// The item has no `homework_name`.
    #[error("no such homework: item has no homework_name")]
    NoSuchHomework,

    /// The item has no `status`.
    #[error("homework status is missing")]
    MissingStatus,

    /// `status` is not one of the known review states.
    #[error("unknown verdict: {0}")]
    UnknownVerdict(String),

    /// A required credential is absent or empty.
    #[error("missing required environment variable {0}")]
    MissingCredential(&'static str),

    /// Invalid configuration override.
    #[error("config error: {0}")]
    Config(String),
}

impl WatchError {
    /// Classify this error for the poll loop.
    #[must_use]
    pub fn class(&self) -> ErrorClass {
        match self {
            Self::EmptyResponse(_) | Self::MissingStatus => ErrorClass::NonEscalating,
            Self::MissingCredential(_) | Self::Config(_) => ErrorClass::Fatal,
            _ => ErrorClass::Escalating,
        }
    }

    /// `true` for errors that must stay in the local log.
    #[must_use]
    pub fn is_non_escalating(&self) -> bool {
        self.class() == ErrorClass::NonEscalating
    }
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, WatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_connection() {
        let err = WatchError::Connection("status 503".into());
        assert_eq!(err.to_string(), "connection error: status 503");
    }

    #[test]
    fn display_missing_homeworks() {
        assert_eq!(
            WatchError::MissingHomeworks.to_string(),
            "missing homeworks key"
        );
    }

    #[test]
    fn display_unknown_verdict() {
        let err = WatchError::UnknownVerdict("unknown_status".into());
        assert_eq!(err.to_string(), "unknown verdict: unknown_status");
    }

    #[test]
    fn shape_and_status_errors_are_non_escalating() {
        assert!(WatchError::EmptyResponse("array".into()).is_non_escalating());
        assert!(WatchError::MissingStatus.is_non_escalating());
        assert!(!WatchError::MissingHomeworks.is_non_escalating());
        assert!(!WatchError::NoSuchHomework.is_non_escalating());
        assert!(!WatchError::Connection("refused".into()).is_non_escalating());
    }

    #[test]
    fn startup_errors_are_fatal() {
        assert_eq!(
            WatchError::MissingCredential("TELEGRAM_TOKEN").class(),
            ErrorClass::Fatal
        );
        assert_eq!(
            WatchError::Config("bad".into()).class(),
            ErrorClass::Fatal
        );
        assert_eq!(
            WatchError::UnknownVerdict("x".into()).class(),
            ErrorClass::Escalating
        );
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<WatchError>();
    }
}
