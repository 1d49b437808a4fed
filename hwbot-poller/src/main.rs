//! Homework Status Poller
//!
//! A long-running worker that watches homework review results and forwards
//! status changes to a Telegram chat.
//!
//! Architecture:
//! - Configuration: Load credentials and timing from environment variables or `.env`
//! - Repositories: Status API and Telegram access behind traits
//! - Scheduler: The poll cycle, cursor management and failure de-duplication
//!
//! The poller queries the status API every poll interval, announces each
//! reported status change, and tells the chat when polling keeps failing.

mod config;
mod repository;
mod scheduler;

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Config, ConfigError};
use crate::scheduler::StatusPoller;
use hwbot_client::{PracticumClient, TelegramClient, http_client};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hwbot_poller=debug,hwbot_client=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting homework status poller");

    config::load_dotenv(None);

    // Missing credentials are the only fatal condition
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            error!(fatal = true, "Configuration unavailable: {}", e);
            std::process::exit(1);
        }
    };
    info!(
        "Loaded configuration: endpoint={}, chat_id={}",
        config.endpoint, config.telegram_chat_id
    );

    let http = http_client(config.request_timeout).context("Failed to build HTTP client")?;

    let practicum =
        PracticumClient::with_client(config.endpoint.clone(), &config.practicum_token, http.clone());
    let telegram = TelegramClient::with_client(
        config.telegram_token.clone(),
        config.telegram_chat_id.clone(),
        http,
    )
    .with_api_url(config.telegram_api_url.clone());

    info!("Clients initialized");

    let mut poller = StatusPoller::new(
        Arc::new(practicum),
        Arc::new(telegram),
        config.poll_interval,
        chrono::Utc::now().timestamp(),
    );

    poller.run().await;

    Ok(())
}

/// Loads configuration from environment variables and checks completeness
fn load_config() -> Result<Config, ConfigError> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
