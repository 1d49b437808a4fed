//! Notifications repository
//!
//! Delivers text messages to the configured chat.

use async_trait::async_trait;
use hwbot_client::{NotifyError, TelegramClient};

/// Repository trait for outbound chat messages
#[async_trait]
pub trait NotificationRepository: Send + Sync {
    /// Sends a message to the configured destination
    ///
    /// Failures are returned, never treated as fatal by callers.
    ///
    /// # Arguments
    /// * `text` - Message body
    async fn notify(&self, text: &str) -> Result<(), NotifyError>;
}

#[async_trait]
impl NotificationRepository for TelegramClient {
    async fn notify(&self, text: &str) -> Result<(), NotifyError> {
        self.send_message(text).await
    }
}
