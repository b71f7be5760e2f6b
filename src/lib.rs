//! homework-bot: relays homework review verdicts to a Telegram chat.
//!
//! A single loop polls the review status API, validates the response,
//! turns the most recent homework into a verdict message and delivers it:
//! Status API → `check_response` → `parse_status` → Telegram
//!
//! # Architecture
//!
//! - **api**: authenticated GET against the status endpoint plus shape checks
//! - **verdict**: status table and message formatting
//! - **channels**: notifier trait and the Telegram adapter
//! - **watcher**: the poll loop and its error policy

pub mod api;
pub mod channels;
pub mod config;
pub mod error;
pub mod http;
pub mod logging;
pub mod verdict;
pub mod watcher;

pub use config::{Credentials, WatchConfig};
pub use error::{ErrorClass, Result, WatchError};
pub use watcher::{CycleOutcome, WatchState, Watcher};
