//! Telegram Bot API client

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::NotifyError;

/// Public Telegram Bot API base URL
pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";

/// Sends text messages to a single Telegram chat
#[derive(Clone)]
pub struct TelegramClient {
    /// Bot API base URL, without trailing slash
    api_url: String,
    /// Bot token
    token: String,
    /// Destination chat identifier
    chat_id: String,
    /// HTTP client instance
    client: Client,
}

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}

/// Envelope every Bot API method answers with
#[derive(Debug, Deserialize)]
struct ApiReply {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

impl TelegramClient {
    /// Create a new Telegram client with a default HTTP client
    ///
    /// # Arguments
    /// * `token` - Bot token issued by BotFather
    /// * `chat_id` - Chat the messages are delivered to
    pub fn new(token: impl Into<String>, chat_id: impl Into<String>) -> Self {
        Self::with_client(token, chat_id, Client::new())
    }

    /// Create a new Telegram client with a custom HTTP client
    pub fn with_client(
        token: impl Into<String>,
        chat_id: impl Into<String>,
        client: Client,
    ) -> Self {
        Self {
            api_url: DEFAULT_TELEGRAM_API_URL.to_string(),
            token: token.into(),
            chat_id: chat_id.into(),
            client,
        }
    }

    /// Point the client at a different Bot API server
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Send `text` to the configured chat
    ///
    /// A non-success status or an `"ok": false` reply is reported as
    /// [`NotifyError::Rejected`].
    pub async fn send_message(&self, text: &str) -> Result<(), NotifyError> {
        let url = format!("{}/bot{}/sendMessage", self.api_url, self.token);
        let response = self
            .client
            .post(&url)
            .json(&SendMessageRequest {
                chat_id: &self.chat_id,
                text,
            })
            .send()
            .await?;

        let status = response.status();
        let reply = response.json::<ApiReply>().await.ok();

        match reply {
            Some(ApiReply { ok: true, .. }) if status.is_success() => {
                debug!("Message delivered to chat {}", self.chat_id);
                Ok(())
            }
            Some(ApiReply { description, .. }) => Err(NotifyError::rejected(
                status.as_u16(),
                description.unwrap_or_else(|| "no description".to_string()),
            )),
            None => Err(NotifyError::rejected(
                status.as_u16(),
                "unreadable Bot API reply",
            )),
        }
    }
}

impl std::fmt::Debug for TelegramClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramClient")
            .field("api_url", &self.api_url)
            .field("chat_id", &self.chat_id)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_server;
    use axum::extract::{Path, State};
    use axum::http::StatusCode;
    use axum::routing::post;
    use axum::{Json, Router};
    use serde_json::{Value, json};
    use std::sync::{Arc, Mutex};

    type Inbox = Arc<Mutex<Vec<Value>>>;

    async fn send_message(
        State(inbox): State<Inbox>,
        Path(bot): Path<String>,
        Json(body): Json<Value>,
    ) -> (StatusCode, Json<Value>) {
        if bot != "botgood-token" {
            return (
                StatusCode::UNAUTHORIZED,
                Json(json!({"ok": false, "error_code": 401, "description": "Unauthorized"})),
            );
        }
        if body["chat_id"] == json!("blocked") {
            return (
                StatusCode::OK,
                Json(json!({"ok": false, "description": "bot was blocked by the user"})),
            );
        }

        inbox.lock().unwrap().push(body);
        (StatusCode::OK, Json(json!({"ok": true, "result": {"message_id": 1}})))
    }

    async fn spawn_api() -> (String, Inbox) {
        let inbox = Inbox::default();
        let router = Router::new()
            .route("/{bot}/sendMessage", post(send_message))
            .with_state(Arc::clone(&inbox));
        (test_server::spawn(router).await, inbox)
    }

    #[tokio::test]
    async fn test_send_message_delivers_text() {
        let (base, inbox) = spawn_api().await;
        let client = TelegramClient::new("good-token", "42").with_api_url(format!("{}/", base));

        client.send_message("hello").await.unwrap();

        let inbox = inbox.lock().unwrap();
        assert_eq!(inbox.len(), 1);
        assert_eq!(inbox[0], json!({"chat_id": "42", "text": "hello"}));
    }

    #[tokio::test]
    async fn test_send_message_rejected_token() {
        let (base, inbox) = spawn_api().await;
        let client = TelegramClient::new("bad-token", "42").with_api_url(base);

        let err = client.send_message("hello").await.unwrap_err();
        assert_eq!(err, NotifyError::rejected(401, "Unauthorized"));
        assert!(inbox.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_send_message_not_ok_reply() {
        let (base, _inbox) = spawn_api().await;
        let client = TelegramClient::new("good-token", "blocked").with_api_url(base);

        let err = client.send_message("hello").await.unwrap_err();
        assert!(matches!(err, NotifyError::Rejected { status: 200, .. }));
    }

    #[tokio::test]
    async fn test_send_message_transport_error_hides_token() {
        let base = test_server::closed_port().await;
        let client = TelegramClient::new("good-token", "42").with_api_url(base);

        let err = client.send_message("hello").await.unwrap_err();
        assert!(matches!(err, NotifyError::Transport(_)));
        assert!(!err.to_string().contains("good-token"));
    }

    #[test]
    fn test_debug_hides_token() {
        let client = TelegramClient::new("good-token", "42");
        let debug = format!("{:?}", client);

        assert!(debug.contains(DEFAULT_TELEGRAM_API_URL));
        assert!(debug.contains("\"42\""));
        assert!(!debug.contains("good-token"));
    }
}
