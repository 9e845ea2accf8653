//! Client configuration

use crate::{ClientResult, HttpClient};
use std::env;

/// Backend used when `STORE_ADMIN_URL` is unset
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
/// Request timeout in seconds
pub const DEFAULT_TIMEOUT: u64 = 30;

/// Client configuration for the store backend
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:8000")
    pub base_url: String,

    /// Bearer token from a previous login
    pub token: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Log level (trace, debug, info, warn, error)
    pub log_level: Option<String>,

    /// Directory for daily rolling log files, stdout when unset
    pub log_dir: Option<String>,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: DEFAULT_TIMEOUT,
            log_level: None,
            log_dir: None,
        }
    }

    /// Load configuration from environment variables
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | STORE_ADMIN_URL | http://127.0.0.1:8000 |
    /// | STORE_ADMIN_TIMEOUT | 30 |
    /// | STORE_ADMIN_TOKEN | - |
    /// | RUST_LOG | - |
    /// | STORE_ADMIN_LOG_DIR | - |
    ///
    /// Call `dotenvy::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Self {
        let timeout = env::var("STORE_ADMIN_TIMEOUT")
            .ok()
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT);

        Self {
            base_url: env::var("STORE_ADMIN_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            token: env::var("STORE_ADMIN_TOKEN").ok().filter(|t| !t.is_empty()),
            timeout,
            log_level: env::var("RUST_LOG").ok(),
            log_dir: env::var("STORE_ADMIN_LOG_DIR").ok().filter(|d| !d.is_empty()),
        }
    }

    /// Set the authentication token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout = timeout_secs;
        self
    }

    pub fn with_log_dir(mut self, dir: impl Into<String>) -> Self {
        self.log_dir = Some(dir.into());
        self
    }

    /// Build an HTTP client for this configuration
    pub fn build_http_client(&self) -> ClientResult<HttpClient> {
        HttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
