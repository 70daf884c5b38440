use crate::constants::{
    DEFAULT_BASE_API_URL, DEFAULT_CLIENT_TIMEOUT_SECS, DEFAULT_PAGE_SIZE, DEFAULT_RECORD_VERSION,
    ENV_BASE_API_URL, ENV_CLIENT_TIMEOUT, ENV_DEFAULT_PAGE_SIZE, ENV_LEGACY_BASE_API_URL,
    ENV_RECORD_VERSION,
};
use crate::error::ConfigError;
use crate::utils::config::{get_env, get_env_or_default, try_get_env_or_default};
use crate::utils::duration::parse_duration;
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Main configuration for the Fake API client
///
/// The configuration is read-only once handed to a [`crate::application::client::Client`].
pub struct Config {
    /// Base URL of the API, without trailing slash (e.g. `http://localhost:8080/v1`)
    pub base_url: String,
    /// Request timeout applied by the HTTP client
    pub client_timeout: Duration,
    /// Record version sent as `?version=` when deleting
    pub record_version: String,
    /// Page size used when a page number is given without a size
    pub default_page_size: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_API_URL.to_string(),
            client_timeout: Duration::from_secs(DEFAULT_CLIENT_TIMEOUT_SECS),
            record_version: DEFAULT_RECORD_VERSION.to_string(),
            default_page_size: DEFAULT_PAGE_SIZE.to_string(),
        }
    }
}

impl Config {
    /// Loads the configuration from the environment (and a `.env` file, if present)
    ///
    /// Unset or empty variables fall back to their defaults:
    ///
    /// | Variable | Default |
    /// |---|---|
    /// | `BASE_API_URL` (or legacy `FAKE_API_BASE_URL_V1`) | `http://localhost:8080/v1` |
    /// | `HTTP_CLIENT_REQ_TIME_OUT` | `1m` |
    /// | `HTTP_RECORD_VERSION` | `0` |
    /// | `HTTP_DEFAULT_PAGE_SIZE` | `2` |
    ///
    /// # Returns
    /// * `Ok(Config)` - The loaded configuration
    /// * `Err(ConfigError)` - If the timeout is present but not a valid duration
    pub fn from_env() -> Result<Self, ConfigError> {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let base_url = get_env(ENV_BASE_API_URL)
            .or_else(|| get_env(ENV_LEGACY_BASE_API_URL))
            .unwrap_or_else(|| DEFAULT_BASE_API_URL.to_string());

        let client_timeout = try_get_env_or_default(
            ENV_CLIENT_TIMEOUT,
            "time duration",
            Duration::from_secs(DEFAULT_CLIENT_TIMEOUT_SECS),
            parse_duration,
        )?;

        let config = Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client_timeout,
            record_version: get_env_or_default(
                ENV_RECORD_VERSION,
                DEFAULT_RECORD_VERSION.to_string(),
            ),
            default_page_size: get_env_or_default(
                ENV_DEFAULT_PAGE_SIZE,
                DEFAULT_PAGE_SIZE.to_string(),
            ),
        };
        debug!("Configuration loaded: {}", config);
        Ok(config)
    }

    /// Base URL of the API
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Request timeout applied by the HTTP client
    pub fn client_timeout(&self) -> Duration {
        self.client_timeout
    }

    /// Record version sent when deleting
    pub fn record_version(&self) -> &str {
        &self.record_version
    }

    /// Page size used when only a page number is given
    pub fn default_page_size(&self) -> &str {
        &self.default_page_size
    }

    /// Replaces the base URL
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Replaces the request timeout
    #[must_use]
    pub fn with_client_timeout(mut self, timeout: Duration) -> Self {
        self.client_timeout = timeout;
        self
    }

    /// Replaces the record version sent on delete
    #[must_use]
    pub fn with_record_version(mut self, version: impl Into<String>) -> Self {
        self.record_version = version.into();
        self
    }

    /// Replaces the default page size
    #[must_use]
    pub fn with_default_page_size(mut self, page_size: impl Into<String>) -> Self {
        self.default_page_size = page_size.into();
        self
    }
}
