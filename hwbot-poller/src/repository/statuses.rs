//! Statuses repository
//!
//! Fetches raw homework status payloads from the status API.

use async_trait::async_trait;
use hwbot_client::{FetchError, PracticumClient};
use serde_json::Value;

/// Repository trait for homework status queries
#[async_trait]
pub trait StatusRepository: Send + Sync {
    /// Fetches status changes since `from_date`
    ///
    /// Returns the decoded body without checking its shape.
    ///
    /// # Arguments
    /// * `from_date` - Unix timestamp (seconds) bounding the query window
    async fn fetch_statuses(&self, from_date: i64) -> Result<Value, FetchError>;
}

#[async_trait]
impl StatusRepository for PracticumClient {
    async fn fetch_statuses(&self, from_date: i64) -> Result<Value, FetchError> {
        self.fetch(from_date).await
    }
}
