//! HTTP client for the showtimes listing service
//!
//! This module provides a thin blocking-free HTTP layer over `reqwest`.
//! Every request is a single synchronous-in-spirit GET: there is no
//! retry, no backoff and no rate limiting, so a transport failure or a
//! non-2xx status surfaces directly to the caller.

use std::time::Duration;

use crate::error::Result;

/// Base URL of the listing service
const DEFAULT_BASE_URL: &str = "http://www.google.com";

/// Default User-Agent mimicking a modern browser
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Request timeout. The upstream service documents no limit, so one
/// explicit value is fixed here for the whole crate.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the listing service (default: `http://www.google.com`)
    pub base_url: String,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// HTTP client for the listing service
///
/// Joins relative paths onto the configured base URL and returns the
/// response body as a string. Non-2xx statuses become errors via
/// `error_for_status`.
pub struct MovieClient {
    /// Underlying HTTP client
    client: reqwest::Client,
    /// Base URL all paths are joined onto
    base_url: String,
}

impl MovieClient {
    /// Create a new client with default configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration.
    ///
    /// Overriding `base_url` is how tests point the scraper at a mock
    /// server.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(DEFAULT_USER_AGENT)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url,
        })
    }

    /// Base URL this client is bound to.
    ///
    /// Listing-page links are resolved against this to form absolute
    /// detail-page URLs.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch HTML content from a path on the listing service.
    ///
    /// # Arguments
    /// * `path` - Relative path including the query string
    ///   (e.g., "/movies?hl=en&near=Taipei&sort=1")
    ///
    /// # Errors
    /// `ShowtimesError::Http` on connection failure or non-2xx status.
    pub async fn fetch(&self, path: &str) -> Result<String> {
        let url = format!("{}{}", self.base_url, path);
        log::debug!("GET {}", url);

        let response = self.client.get(&url).send().await?.error_for_status()?;
        Ok(response.text().await?)
    }
}
