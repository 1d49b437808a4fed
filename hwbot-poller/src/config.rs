//! Poller configuration
//!
//! Credentials, endpoints and timing for the status poller. Everything is read
//! once at startup; a missing credential is fatal and never retried.
//! Values may come from the process environment or from a `.env` file.

use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

/// Default homework status endpoint
pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Default time between poll cycles
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(600);

/// Default bound on a single HTTP request
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Environment variables that must be set and non-empty
pub const REQUIRED_VARS: [&str; 3] = ["PRACTICUM_TOKEN", "TELEGRAM_TOKEN", "TELEGRAM_CHAT_ID"];

/// Configuration problems detected at startup
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Required settings are absent or empty
    #[error("missing required configuration: {}", .0.join(", "))]
    Missing(Vec<&'static str>),

    /// A setting is present but unusable
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Poller configuration
#[derive(Clone)]
pub struct Config {
    /// OAuth token for the status API
    pub practicum_token: String,

    /// Telegram bot token
    pub telegram_token: String,

    /// Chat that receives notifications
    pub telegram_chat_id: String,

    /// Status endpoint URL
    pub endpoint: String,

    /// Telegram Bot API base URL
    pub telegram_api_url: String,

    /// Pause between the end of one cycle and the start of the next
    pub poll_interval: Duration,

    /// Upper bound for each HTTP request
    pub request_timeout: Duration,
}

impl Config {
    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - PRACTICUM_TOKEN (required)
    /// - TELEGRAM_TOKEN (required)
    /// - TELEGRAM_CHAT_ID (required)
    /// - PRACTICUM_ENDPOINT (optional, default: the public Practicum endpoint)
    /// - TELEGRAM_API_URL (optional, default: https://api.telegram.org)
    /// - RETRY_PERIOD (optional, seconds, default: 600)
    /// - REQUEST_TIMEOUT (optional, seconds, default: 30)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Creates configuration from an arbitrary variable lookup
    ///
    /// Unparseable optional values fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |name: &str| lookup(name).map(|v| v.trim().to_string());

        let missing: Vec<&'static str> = REQUIRED_VARS
            .into_iter()
            .filter(|name| value(*name).is_none_or(|v| v.is_empty()))
            .collect();
        if !missing.is_empty() {
            return Err(ConfigError::Missing(missing));
        }

        let seconds = |name: &str, default: Duration| {
            value(name)
                .and_then(|s| s.parse::<u64>().ok())
                .map(Duration::from_secs)
                .unwrap_or(default)
        };

        Ok(Self {
            practicum_token: value("PRACTICUM_TOKEN").unwrap_or_default(),
            telegram_token: value("TELEGRAM_TOKEN").unwrap_or_default(),
            telegram_chat_id: value("TELEGRAM_CHAT_ID").unwrap_or_default(),
            endpoint: value("PRACTICUM_ENDPOINT")
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            telegram_api_url: value("TELEGRAM_API_URL")
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| hwbot_client::DEFAULT_TELEGRAM_API_URL.to_string()),
            poll_interval: seconds("RETRY_PERIOD", DEFAULT_POLL_INTERVAL),
            request_timeout: seconds("REQUEST_TIMEOUT", DEFAULT_REQUEST_TIMEOUT),
        })
    }

    /// Validates the configuration
    ///
    /// Every required field is checked for presence, then URLs and
    /// durations are checked for usability.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("PRACTICUM_TOKEN", self.practicum_token.as_str()),
            ("TELEGRAM_TOKEN", self.telegram_token.as_str()),
            ("TELEGRAM_CHAT_ID", self.telegram_chat_id.as_str()),
            ("PRACTICUM_ENDPOINT", self.endpoint.as_str()),
            ("TELEGRAM_API_URL", self.telegram_api_url.as_str()),
        ];

        let missing: Vec<&'static str> = required
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| name)
            .collect();
        if !missing.is_empty() {
            return Err(ConfigError::Missing(missing));
        }

        for (name, url) in [
            ("PRACTICUM_ENDPOINT", &self.endpoint),
            ("TELEGRAM_API_URL", &self.telegram_api_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::Invalid(format!(
                    "{} must start with http:// or https://",
                    name
                )));
            }
        }

        if self.poll_interval.is_zero() {
            return Err(ConfigError::Invalid(
                "RETRY_PERIOD must be greater than 0".to_string(),
            ));
        }

        if self.request_timeout.is_zero() {
            return Err(ConfigError::Invalid(
                "REQUEST_TIMEOUT must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Loads a `.env` file into the process environment
///
/// With no `path`, the file is searched for in the working directory and its
/// parents. Variables already set in the environment take precedence. A
/// missing file is not an error.
///
/// # Returns
/// The path of the loaded file, if any
pub fn load_dotenv(path: Option<&Path>) -> Option<PathBuf> {
    let loaded = match path {
        Some(path) => dotenvy::from_path(path).map(|()| path.to_path_buf()),
        None => dotenvy::dotenv(),
    };

    match loaded {
        Ok(path) => {
            debug!("Loaded environment from {}", path.display());
            Some(path)
        }
        Err(e) if e.not_found() => {
            debug!("No .env file found, using process environment only");
            None
        }
        Err(e) => {
            warn!("Failed to read .env file: {}", e);
            None
        }
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("practicum_token", &"<redacted>")
            .field("telegram_token", &"<redacted>")
            .field("telegram_chat_id", &self.telegram_chat_id)
            .field("endpoint", &self.endpoint)
            .field("telegram_api_url", &self.telegram_api_url)
            .field("poll_interval", &self.poll_interval)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    fn complete() -> Vec<(&'static str, &'static str)> {
        vec![
            ("PRACTICUM_TOKEN", "practicum"),
            ("TELEGRAM_TOKEN", "telegram"),
            ("TELEGRAM_CHAT_ID", "42"),
        ]
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&complete())).unwrap();

        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.telegram_api_url, "https://api.telegram.org");
        assert_eq!(config.poll_interval, Duration::from_secs(600));
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_required_vars() {
        let err = Config::from_lookup(lookup(&[("TELEGRAM_TOKEN", "telegram")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Missing(vec!["PRACTICUM_TOKEN", "TELEGRAM_CHAT_ID"])
        );
        assert!(err.to_string().contains("PRACTICUM_TOKEN, TELEGRAM_CHAT_ID"));
    }

    #[test]
    fn test_empty_required_var_is_missing() {
        let mut vars = complete();
        vars[2] = ("TELEGRAM_CHAT_ID", "  ");

        let err = Config::from_lookup(lookup(&vars)).unwrap_err();
        assert_eq!(err, ConfigError::Missing(vec!["TELEGRAM_CHAT_ID"]));
    }

    #[test]
    fn test_optional_overrides() {
        let mut vars = complete();
        vars.push(("RETRY_PERIOD", "5"));
        vars.push(("REQUEST_TIMEOUT", "not-a-number"));
        vars.push(("PRACTICUM_ENDPOINT", "http://localhost:9000/statuses/"));

        let config = Config::from_lookup(lookup(&vars)).unwrap();
        assert_eq!(config.poll_interval, Duration::from_secs(5));
        assert_eq!(config.request_timeout, DEFAULT_REQUEST_TIMEOUT);
        assert_eq!(config.endpoint, "http://localhost:9000/statuses/");
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::from_lookup(lookup(&complete())).unwrap();

        config.endpoint = "not-a-url".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
        config.endpoint = DEFAULT_ENDPOINT.to_string();

        config.poll_interval = Duration::ZERO;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
        config.poll_interval = DEFAULT_POLL_INTERVAL;

        config.practicum_token = String::new();
        assert_eq!(
            config.validate(),
            Err(ConfigError::Missing(vec!["PRACTICUM_TOKEN"]))
        );
    }

    #[test]
    fn test_dotenv_file_feeds_from_env() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(
            &path,
            "PRACTICUM_TOKEN=file-practicum\n\
             TELEGRAM_TOKEN=file-telegram\n\
             TELEGRAM_CHAT_ID=7\n\
             HWBOT_DOTENV_MARKER=loaded\n",
        )
        .unwrap();

        assert_eq!(load_dotenv(Some(path.as_path())), Some(path.clone()));
        assert_eq!(
            std::env::var("HWBOT_DOTENV_MARKER").as_deref(),
            Ok("loaded")
        );

        let config = Config::from_env().unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_dotenv_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load_dotenv(Some(dir.path().join(".env").as_path())), None);
    }

    #[test]
    fn test_debug_redacts_tokens() {
        let config = Config::from_lookup(lookup(&complete())).unwrap();
        let debug = format!("{:?}", config);

        assert!(!debug.contains("practicum\""));
        assert!(!debug.contains("\"telegram\""));
        assert!(debug.contains("<redacted>"));
    }
}
