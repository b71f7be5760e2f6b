//! Review status table and verdict message formatting.

use crate::error::{Result, WatchError};
use serde_json::Value;
use std::str::FromStr;
use tracing::info;

/// Review state reported by the status API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    /// All known statuses.
    pub const ALL: [Self; 3] = [Self::Approved, Self::Reviewing, Self::Rejected];

    /// Wire value used by the API.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Reviewing => "reviewing",
            Self::Rejected => "rejected",
        }
    }

    /// Human-readable verdict sentence for this status.
    #[must_use]
    pub fn verdict(self) -> &'static str {
        match self {
            Self::Approved => "Reviewer liked everything. Hooray!",
            Self::Reviewing => "The reviewer has started checking the work.",
            Self::Rejected => "The work was checked: the reviewer left remarks.",
        }
    }
}

impl FromStr for HomeworkStatus {
    type Err = WatchError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| WatchError::UnknownVerdict(s.to_owned()))
    }
}

/// Translate one homework item into the message sent to the chat.
///
/// # Errors
///
/// - [`WatchError::NoSuchHomework`] if `homework_name` is absent.
/// - [`WatchError::MissingStatus`] if `status` is absent.
/// - [`WatchError::UnknownVerdict`] if `status` is not a known value.
pub fn parse_status(homework: &Value) -> Result<String> {
    info!("parsing homework status");
    let name = homework
        .get("homework_name")
        .and_then(Value::as_str)
        .ok_or(WatchError::NoSuchHomework)?;
    let raw_status = homework.get("status").ok_or(WatchError::MissingStatus)?;
    let status = match raw_status {
        Value::String(s) => s.parse::<HomeworkStatus>()?,
        other => return Err(WatchError::UnknownVerdict(other.to_string())),
    };
    Ok(format!(
        "Changed review status of \"{name}\". {}",
        status.verdict()
    ))
}
