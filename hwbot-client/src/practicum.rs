//! Homework status API client

use reqwest::Client;
use reqwest::header::AUTHORIZATION;
use serde_json::Value;
use tracing::debug;

use crate::error::{FetchError, FetchResult};

/// HTTP client for the Practicum homework status endpoint
#[derive(Clone)]
pub struct PracticumClient {
    /// Full URL of the status endpoint
    endpoint: String,
    /// Value of the `Authorization` header (`OAuth <token>`)
    auth_header: String,
    /// HTTP client instance
    client: Client,
}

impl PracticumClient {
    /// Create a new status API client with a default HTTP client
    ///
    /// # Arguments
    /// * `endpoint` - Full URL of the status endpoint
    /// * `token` - OAuth token issued by Practicum
    pub fn new(endpoint: impl Into<String>, token: impl AsRef<str>) -> Self {
        Self::with_client(endpoint, token, Client::new())
    }

    /// Create a new status API client with a custom HTTP client
    ///
    /// Use this to bound request time, see [`crate::http_client`].
    pub fn with_client(endpoint: impl Into<String>, token: impl AsRef<str>, client: Client) -> Self {
        Self {
            endpoint: endpoint.into(),
            auth_header: format!("OAuth {}", token.as_ref()),
            client,
        }
    }

    /// Fetch homework status changes since `from_date`
    ///
    /// # Arguments
    /// * `from_date` - Unix timestamp (seconds) bounding the query window
    ///
    /// # Returns
    /// The decoded JSON body. Its shape is not checked here.
    pub async fn fetch(&self, from_date: i64) -> FetchResult<Value> {
        debug!("Requesting homework statuses from_date={}", from_date);

        let response = self
            .client
            .get(&self.endpoint)
            .header(AUTHORIZATION, &self.auth_header)
            .query(&[("from_date", from_date)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::BadStatus(status.as_u16()));
        }

        response
            .json()
            .await
            .map_err(|e| FetchError::Network(format!("malformed response body: {}", e)))
    }
}

impl std::fmt::Debug for PracticumClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PracticumClient")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}
