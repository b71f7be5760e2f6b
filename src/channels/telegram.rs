use crate::channels::traits::{Notifier, OutboundMessage};
use crate::config::WatchConfig;
use crate::error::Result;
use crate::http::{build_client, describe_error};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

/// Telegram Bot API envelope. Only the fields we act on.
#[derive(Debug, Deserialize)]
struct TelegramResponse {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

/// Telegram channel adapter using the Bot API over HTTPS.
pub struct TelegramNotifier {
    bot_token: String,
    api_url: String,
    client: reqwest::Client,
}

impl TelegramNotifier {
    /// Create an adapter from the watcher config.
    ///
    /// # Errors
    ///
    /// Returns a config error if the HTTP client cannot be built.
    pub fn new(config: &WatchConfig) -> Result<Self> {
        Ok(Self {
            bot_token: config.credentials.telegram_token.clone(),
            api_url: config.telegram_api_url.clone(),
            client: build_client(config)?,
        })
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{method}", self.api_url, self.bot_token)
    }

    async fn read_envelope(response: reqwest::Response) -> anyhow::Result<TelegramResponse> {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        if !status.is_success() {
            anyhow::bail!("telegram request failed ({status}): {body}");
        }
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    fn id(&self) -> &'static str {
        "telegram"
    }

    async fn send(&self, message: OutboundMessage) -> anyhow::Result<()> {
        if self.bot_token.trim().is_empty() {
            anyhow::bail!("telegram bot token is empty");
        }
        let body = json!({
            "chat_id": message.chat_id,
            "text": message.text,
        });
        let response = self
            .client
            .post(self.method_url("sendMessage"))
            .json(&body)
            .send()
            .await
            .map_err(|e| anyhow::anyhow!("telegram request failed: {}", describe_error(e)))?;

        let envelope = Self::read_envelope(response).await?;
        if !envelope.ok {
            anyhow::bail!(
                "telegram rejected message: {}",
                envelope.description.unwrap_or_default()
            );
        }
        Ok(())
    }

    async fn health_check(&self) -> anyhow::Result<bool> {
        if self.bot_token.trim().is_empty() {
            return Ok(false);
        }
        let response = self
            .client
            .get(self.method_url("getMe"))
            .send()
            .await
            .map_err(|e| anyhow::anyhow!("telegram health check failed: {}", describe_error(e)))?;
        Ok(Self::read_envelope(response).await.is_ok_and(|e| e.ok))
    }
}
