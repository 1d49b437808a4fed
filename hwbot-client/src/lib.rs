//! Homework Bot HTTP Clients
//!
//! Thin, typed HTTP clients for the two remote services the bot talks to:
//! - [`PracticumClient`]: the homework status API, queried with a `from_date` cursor
//! - [`TelegramClient`]: the Telegram Bot API, used to deliver chat messages
//!
//! Both clients make exactly one attempt per call. Retry cadence belongs to
//! the caller.
//!
//! # Example
//!
//! ```no_run
//! use hwbot_client::{PracticumClient, TelegramClient, http_client};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let http = http_client(Duration::from_secs(30))?;
//!     let practicum = PracticumClient::with_client(
//!         "https://practicum.yandex.ru/api/user_api/homework_statuses/",
//!         "practicum-token",
//!         http.clone(),
//!     );
//!     let telegram = TelegramClient::with_client("telegram-token", "12345", http);
//!
//!     let body = practicum.fetch(0).await?;
//!     telegram.send_message(&body.to_string()).await?;
//!     Ok(())
//! }
//! ```

pub mod error;
mod practicum;
mod telegram;

// Re-export commonly used types
pub use error::{FetchError, FetchResult, NotifyError};
pub use practicum::PracticumClient;
pub use telegram::{DEFAULT_TELEGRAM_API_URL, TelegramClient};

use reqwest::Client;
use std::time::Duration;

/// Build an HTTP client whose requests give up after `timeout`
///
/// The same client can be shared by both API clients; `reqwest::Client` is
/// reference counted internally.
pub fn http_client(timeout: Duration) -> reqwest::Result<Client> {
    Client::builder().timeout(timeout).build()
}
