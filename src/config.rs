use std::time::Duration;

use super::error::{EdinetError, Result};

/// Environment variable holding the EDINET API subscription key.
pub const API_KEY_ENV: &str = "EDINET_API_KEY";

/// Base URL of the EDINET API, version 2.
pub const DEFAULT_BASE_URL: &str = "https://api.edinet-fsa.go.jp/api/v2";

/// Configuration for the Edinet client
#[derive(Debug, Clone)]
pub struct EdinetConfig {
    /// Subscription key sent with every request
    pub api_key: String,
    /// Rate limit in requests per second
    pub rate_limit: u32,
    /// HTTP request timeout
    pub timeout: Duration,
    /// Base URL of the EDINET API
    pub base_url: String,
}

impl EdinetConfig {
    /// Creates a configuration with default rate limit, timeout, and base URL.
    ///
    /// # Basic usage
    ///
    /// ```rust
    /// use edinetkit::EdinetConfig;
    /// use std::time::Duration;
    ///
    /// let config = EdinetConfig {
    ///     rate_limit: 1,
    ///     timeout: Duration::from_secs(60),
    ///     ..EdinetConfig::new("your-subscription-key")
    /// };
    /// assert_eq!(config.base_url, "https://api.edinet-fsa.go.jp/api/v2");
    /// ```
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            rate_limit: 3,
            timeout: Duration::from_secs(60),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Reads the API key from `EDINET_API_KEY`.
    ///
    /// # Errors
    ///
    /// Returns `EdinetError::ConfigError` when the variable is unset or blank.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV).unwrap_or_default();
        Self::from_api_key(&api_key)
    }

    /// Like [`EdinetConfig::new`], but rejects a blank key with `EdinetError::ConfigError`.
    pub fn from_api_key(api_key: &str) -> Result<Self> {
        let api_key = api_key.trim();
        if api_key.is_empty() {
            return Err(EdinetError::ConfigError(format!("{} is not set", API_KEY_ENV)));
        }
        Ok(Self::new(api_key))
    }
}
