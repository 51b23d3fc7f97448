//! Configuration for API sessions

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{ApiError, Result};
use crate::locale::Locale;

/// Default `User-Agent` header sent with every request.
pub const DEFAULT_USER_AGENT: &str = concat!("bnet-core/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Account key sent as the `apikey` query parameter
    pub api_key: String,

    /// Locale; also selects the regional host
    pub locale: Locale,

    /// Overrides the locale's host root (proxies, mock servers)
    pub base_url: Option<String>,

    /// Connection timeout
    pub connect_timeout: Duration,

    /// Request timeout
    pub request_timeout: Duration,

    /// `User-Agent` header value
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            locale: Locale::EnUs,
            base_url: None,
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    /// Configuration for an account key and locale code with default timeouts.
    pub fn new(api_key: impl Into<String>, locale: &str) -> Result<Self> {
        Ok(Self {
            api_key: api_key.into(),
            locale: locale.parse()?,
            ..Self::default()
        })
    }

    /// Create configuration from environment variables
    ///
    /// `BNET_API_KEY` is required. `BNET_LOCALE`, `BNET_BASE_URL`,
    /// `BNET_CONNECT_TIMEOUT` and `BNET_REQUEST_TIMEOUT` (seconds) are optional.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("BNET_API_KEY")
            .ok()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| ApiError::Config("BNET_API_KEY is not set".to_string()))?;

        let locale = match std::env::var("BNET_LOCALE") {
            Ok(code) => code.parse()?,
            Err(_) => Locale::EnUs,
        };

        Ok(Self {
            api_key,
            locale,
            base_url: std::env::var("BNET_BASE_URL").ok(),
            connect_timeout: Duration::from_secs(
                std::env::var("BNET_CONNECT_TIMEOUT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(10),
            ),
            request_timeout: Duration::from_secs(
                std::env::var("BNET_REQUEST_TIMEOUT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(30),
            ),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        })
    }

    /// Point the session at a different host root.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Host root requests are sent to.
    pub fn root_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(self.locale.root_url())
    }
}
