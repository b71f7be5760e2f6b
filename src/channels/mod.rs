//! Outbound notification channels.
//!
//! Delivery is fire-and-forget: [`send_message`] makes a single attempt and
//! never returns the failure to the poll loop.

pub mod telegram;
pub mod traits;

use crate::channels::traits::{Notifier, OutboundMessage};
use tracing::{debug, error};

pub use telegram::TelegramNotifier;

/// Deliver `text` to `chat_id`, logging and swallowing any delivery error.
///
/// Returns `true` when the channel accepted the message.
pub async fn send_message(notifier: &dyn Notifier, chat_id: &str, text: &str) -> bool {
    let message = OutboundMessage {
        chat_id: chat_id.to_owned(),
        text: text.to_owned(),
    };
    match notifier.send(message).await {
        Ok(()) => {
            debug!(channel = notifier.id(), "message delivered: {text}");
            true
        }
        Err(e) => {
            error!(channel = notifier.id(), "message {text:?} not delivered: {e}");
            false
        }
    }
}
