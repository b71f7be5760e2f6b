use async_trait::async_trait;

/// Outbound message delivered to the notification channel.
#[derive(Debug, Clone)]
pub struct OutboundMessage {
    pub chat_id: String,
    pub text: String,
}

/// Notification channel contract. New channels only need to implement this trait.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Stable channel identifier (e.g. `telegram`).
    fn id(&self) -> &'static str;

    /// Deliver one message. Called at most once per verdict.
    async fn send(&self, message: OutboundMessage) -> anyhow::Result<()>;

    /// Best-effort health probe.
    async fn health_check(&self) -> anyhow::Result<bool>;
}
