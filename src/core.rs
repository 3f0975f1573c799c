use governor::{
    Quota, RateLimiter, clock::DefaultClock, middleware::NoOpMiddleware, state::InMemoryState,
    state::NotKeyed,
};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::num::NonZeroU32;
use std::sync::Arc;

use super::config::EdinetConfig;
use super::error::{EdinetError, Result};

const SUBSCRIPTION_KEY_HEADER: &str = "ocp-apim-subscription-key";

type Governor = RateLimiter<NotKeyed, InMemoryState, DefaultClock, NoOpMiddleware>;

#[derive(Debug, Clone)]
pub struct Edinet {
    /// HTTP client carrying the subscription key header
    pub(crate) client: reqwest::Client,

    /// Token bucket rate limiter shared by all requests of this client
    pub(crate) rate_limiter: Arc<Governor>,

    /// Base URL of the EDINET API
    pub(crate) base_url: String,
}

/// HTTP client for the EDINET disclosure API with built-in rate limiting.
///
/// `Edinet` is the entry point for listing the documents submitted on a given day and for
/// downloading a filing's XBRL archive. Every request carries the subscription key in the
/// `Ocp-Apim-Subscription-Key` header and waits for a token from a per-client bucket
/// before it is sent:
///
/// ```text
/// Token Bucket (capacity: rate_limit tokens)
/// ┌──────────────────────────┐
/// │ ████████████████████████ │  ← Tokens refill at rate_limit/sec
/// └──────────────────────────┘
///      ↓ consume on request
/// ```
///
/// Failed requests are not retried. A 404 is reported as `EdinetError::NotFound`, any
/// other non-success status as `EdinetError::InvalidResponse`, and the caller decides
/// whether to skip the filing and move on.
///
/// # Examples
///
/// ```rust
/// # use edinetkit::Edinet;
/// let edinet = Edinet::new("your-subscription-key")?;
/// # Ok::<(), edinetkit::EdinetError>(())
/// ```
///
/// With custom configuration:
///
/// ```rust
/// # use edinetkit::{Edinet, EdinetConfig};
/// # use std::time::Duration;
/// let config = EdinetConfig {
///     rate_limit: 1,
///     timeout: Duration::from_secs(120),
///     ..EdinetConfig::new("your-subscription-key")
/// };
/// let edinet = Edinet::with_config(config)?;
/// # Ok::<(), edinetkit::EdinetError>(())
/// ```
impl Edinet {
    /// Creates a client with the default rate limit, timeout, and base URL.
    pub fn new(api_key: &str) -> Result<Self> {
        Self::with_config(EdinetConfig::new(api_key))
    }

    /// Creates a client from an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns `EdinetError::ConfigError` if the API key is not a valid header value,
    /// the rate limit is zero, or the HTTP client cannot be built.
    pub fn with_config(config: EdinetConfig) -> Result<Self> {
        let mut key = HeaderValue::from_str(&config.api_key)
            .map_err(|e| EdinetError::ConfigError(format!("Invalid API key: {}", e)))?;
        key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(HeaderName::from_static(SUBSCRIPTION_KEY_HEADER), key);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|e| EdinetError::ConfigError(format!("Failed to build HTTP client: {}", e)))?;

        let rate_limiter = Arc::new(RateLimiter::direct(Quota::per_second(
            NonZeroU32::new(config.rate_limit).ok_or_else(|| {
                EdinetError::ConfigError("Rate limit must be greater than zero".to_string())
            })?,
        )));

        tracing::debug!(
            "EDINET client ready: {} ({} req/s)",
            config.base_url,
            config.rate_limit
        );

        Ok(Edinet {
            client,
            rate_limiter,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetches binary data, such as a document archive.
    ///
    /// # Errors
    ///
    /// * `EdinetError::NotFound` - The resource doesn't exist (HTTP 404)
    /// * `EdinetError::RequestError` - Network failure
    /// * `EdinetError::InvalidResponse` - Any other non-success status code
    pub async fn get_bytes(&self, url: &str) -> Result<Vec<u8>> {
        self.rate_limiter.until_ready().await;

        let response = self.client.get(url).send().await?;
        match response.status() {
            status if status.is_success() => Ok(response.bytes().await?.to_vec()),
            reqwest::StatusCode::NOT_FOUND => Err(EdinetError::NotFound),
            status => Err(EdinetError::InvalidResponse(format!(
                "Unexpected status code: {} for URL: {}",
                status, url
            ))),
        }
    }

    /// Fetches text content, such as the JSON document list.
    ///
    /// EDINET answers some failures with a 200 and an HTML error page. For `.json` URLs a
    /// body that does not look like JSON is therefore rejected as `InvalidResponse`, with
    /// a short preview of what came back.
    ///
    /// # Errors
    ///
    /// * `EdinetError::NotFound` - The resource doesn't exist (HTTP 404)
    /// * `EdinetError::RequestError` - Network failure
    /// * `EdinetError::InvalidResponse` - Any other non-success status code, or HTML where
    ///   JSON was expected
    pub async fn get(&self, url: &str) -> Result<String> {
        self.rate_limiter.until_ready().await;

        let response = self.client.get(url).send().await?;
        match response.status() {
            status if status.is_success() => {
                let body = response.text().await?;
                if is_json_url(url) && !looks_like_json(&body) {
                    return Err(EdinetError::InvalidResponse(format!(
                        "Expected JSON from {}, got: {}",
                        url,
                        preview(&body)
                    )));
                }
                Ok(body)
            }
            reqwest::StatusCode::NOT_FOUND => Err(EdinetError::NotFound),
            status => {
                let error_body = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Failed to read error body".to_string());

                Err(EdinetError::InvalidResponse(format!(
                    "Unexpected status code: {} for URL: {}. Response preview: {}",
                    status,
                    url,
                    preview(&error_body)
                )))
            }
        }
    }

    /// Returns the base URL of the EDINET API.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

fn is_json_url(url: &str) -> bool {
    url.split('?').next().is_some_and(|path| path.ends_with(".json"))
}

fn looks_like_json(body: &str) -> bool {
    let body = body.trim_start();
    body.starts_with('{') || body.starts_with('[')
}

fn preview(body: &str) -> String {
    body.chars().take(200).collect()
}
