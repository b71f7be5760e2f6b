//! Homework status API: fetching and response shape validation.

use crate::config::WatchConfig;
use crate::error::{Result, WatchError};
use crate::http::{build_client, describe_error};
use reqwest::StatusCode;
use serde_json::Value;
use tracing::info;

/// Client for the homework status endpoint.
pub struct StatusClient {
    endpoint: String,
    token: String,
    client: reqwest::Client,
}

impl StatusClient {
    /// Create a client from the watcher config.
    ///
    /// # Errors
    ///
    /// Returns [`WatchError::Config`] if the HTTP client cannot be built.
    pub fn new(config: &WatchConfig) -> Result<Self> {
        Ok(Self {
            endpoint: config.endpoint.clone(),
            token: config.credentials.practicum_token.clone(),
            client: build_client(config)?,
        })
    }

    /// Fetch the homework statuses updated since the poll window start.
    ///
    /// The timestamp argument is ignored: the window is always reset to the
    /// current time before the request is sent.
    ///
    /// # Errors
    ///
    /// Returns [`WatchError::Connection`] on transport failures and on any
    /// status other than 200, and [`WatchError::InvalidJson`] when the body
    /// does not decode.
    pub async fn get_api_answer(&self, _timestamp: i64) -> Result<Value> {
        let from_date = chrono::Utc::now().timestamp();
        info!(from_date, "requesting homework statuses");

        let response = self
            .client
            .get(&self.endpoint)
            .header("Authorization", format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(|e| {
                WatchError::Connection(format!(
                    "request to {} failed: {}",
                    self.endpoint,
                    describe_error(e)
                ))
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(WatchError::Connection(format!(
                "{} answered with status {status}",
                self.endpoint
            )));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| WatchError::InvalidJson(e.to_string()))
    }
}

/// Check that `response` is an object carrying a `homeworks` list and return it.
///
/// # Errors
///
/// - [`WatchError::EmptyResponse`] if `response` is not an object.
/// - [`WatchError::MissingHomeworks`] if the key is absent.
/// - [`WatchError::NotAList`] if the value under the key is not a list.
pub fn check_response(response: &Value) -> Result<&[Value]> {
    info!("checking API response");
    let object = response
        .as_object()
        .ok_or_else(|| WatchError::EmptyResponse(json_type(response).to_owned()))?;
    let homeworks = object
        .get("homeworks")
        .ok_or(WatchError::MissingHomeworks)?;
    homeworks
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| WatchError::NotAList(json_type(homeworks).to_owned()))
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
