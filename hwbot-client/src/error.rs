//! Error types for the homework bot clients

use thiserror::Error;

/// Result type alias for status API requests
pub type FetchResult<T> = std::result::Result<T, FetchError>;

/// Errors that can occur while querying the homework status API
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request never produced a usable body (DNS, timeout, refused
    /// connection, or a payload that is not JSON)
    #[error("status API request failed: {0}")]
    Network(String),

    /// The API answered with a non-success status code
    #[error("status API returned HTTP {0}")]
    BadStatus(u16),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

/// Errors that can occur while delivering a chat message
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotifyError {
    /// The message never reached the messaging backend
    #[error("failed to reach Telegram: {0}")]
    Transport(String),

    /// The messaging backend refused the message
    #[error("Telegram rejected the message (status {status}): {description}")]
    Rejected {
        /// HTTP status code
        status: u16,
        /// Description reported by the backend
        description: String,
    },
}

impl NotifyError {
    /// Create a rejection error from status code and description
    pub fn rejected(status: u16, description: impl Into<String>) -> Self {
        Self::Rejected {
            status,
            description: description.into(),
        }
    }
}

impl From<reqwest::Error> for NotifyError {
    fn from(err: reqwest::Error) -> Self {
        // Request URLs embed the bot token.
        Self::Transport(err.without_url().to_string())
    }
}
