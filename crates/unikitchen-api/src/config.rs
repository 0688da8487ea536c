//! Public configuration for the recipe API client.
//!
//! This module provides a stable public API for configuring the client.
//! The base URL is only parsed when the client is built.

use std::time::Duration;

use tracing::warn;

/// Environment variable holding the service origin.
pub const BASE_URL_ENV: &str = "UNIKITCHEN_API_URL";

/// Environment variable holding the request timeout in seconds.
pub const TIMEOUT_ENV: &str = "UNIKITCHEN_TIMEOUT_SECS";

/// Configuration for the recipe API client.
///
/// Use the builder pattern methods to customize the client configuration.
///
/// # Example
///
/// ```
/// use unikitchen_api::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::new()
///     .with_base_url("https://kitchen.example.org")
///     .with_timeout(Duration::from_secs(10));
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Origin of the recipe service; endpoint paths are appended to it
    pub(crate) base_url: String,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// Request timeout applied to every call
    pub(crate) timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            user_agent: concat!("unikitchen-api/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overridden by `UNIKITCHEN_API_URL` and `UNIKITCHEN_TIMEOUT_SECS`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`ClientConfig::from_env`], reading variables through `lookup`.
    ///
    /// Blank values are ignored. An unparsable timeout keeps the default and
    /// logs a warning.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(url) = lookup(BASE_URL_ENV).filter(|v| !v.trim().is_empty()) {
            config.base_url = url.trim().to_string();
        }

        if let Some(timeout) = lookup(TIMEOUT_ENV).and_then(|v| parse_timeout_secs(&v)) {
            config.timeout = timeout;
        }

        config
    }

    /// Set the origin of the recipe service.
    ///
    /// Defaults to `http://localhost:8080`. A path prefix such as
    /// `https://host/kitchen` is kept in front of every endpoint.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 30 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The configured base URL, unparsed.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub const fn timeout(&self) -> Duration {
        self.timeout
    }
}

/// Whole seconds from an environment value; `None` for blank or bad input.
fn parse_timeout_secs(raw: &str) -> Option<Duration> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse::<u64>() {
        Ok(secs) => Some(Duration::from_secs(secs)),
        Err(e) => {
            warn!(
                variable = TIMEOUT_ENV,
                value = trimmed,
                error = %e,
                "ignoring unparsable timeout, keeping default"
            );
            None
        }
    }
}
