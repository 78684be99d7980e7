//! Configuration types for the Strava API SDK.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`StravaConfig`]: The configuration struct holding the API endpoint settings
//! - [`StravaConfigBuilder`]: A builder for constructing [`StravaConfig`] instances
//!
//! The base URL defaults to the public Strava v1 endpoint and can be
//! overridden, which is also how the integration tests point the client at
//! a local mock server.
//!
//! # Example
//!
//! ```rust
//! use strava_api::StravaConfig;
//!
//! let config = StravaConfig::builder()
//!     .base_url("http://www.strava.com/api/v1")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url(), "http://www.strava.com/api/v1");
//! ```

use crate::error::ConfigError;

/// The public Strava v1 API endpoint.
pub const DEFAULT_BASE_URL: &str = "http://www.strava.com/api/v1";

/// Configuration for the Strava API SDK.
///
/// Holds the base endpoint URL and an optional user-agent prefix. Validated
/// on construction; instances are immutable afterwards.
///
/// # Thread Safety
///
/// `StravaConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StravaConfig {
    base_url: String,
    user_agent_prefix: Option<String>,
}

impl StravaConfig {
    /// Creates a new builder for constructing a `StravaConfig`.
    #[must_use]
    pub fn builder() -> StravaConfigBuilder {
        StravaConfigBuilder::new()
    }

    /// Returns the base API URL, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the user-agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

impl Default for StravaConfig {
    /// Returns a configuration pointing at the production endpoint.
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent_prefix: None,
        }
    }
}

/// Builder for [`StravaConfig`].
///
/// # Example
///
/// ```rust
/// use strava_api::StravaConfig;
///
/// let config = StravaConfig::builder()
///     .base_url("https://mock.example.com/api/v1")
///     .user_agent_prefix("MyApp/1.0")
///     .build()
///     .unwrap();
/// ```
#[derive(Clone, Debug, Default)]
pub struct StravaConfigBuilder {
    base_url: Option<String>,
    user_agent_prefix: Option<String>,
}

impl StravaConfigBuilder {
    /// Creates a new builder with no fields set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base API URL.
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Sets a prefix prepended to the `User-Agent` header.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the configuration, validating all fields.
    ///
    /// Trailing slashes on the base URL are normalized away so that paths
    /// can always be appended verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyBaseUrl`] if the base URL is empty, or
    /// [`ConfigError::InvalidBaseUrl`] if it lacks an `http`/`https` scheme.
    pub fn build(self) -> Result<StravaConfig, ConfigError> {
        let base_url = self.base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        if base_url.is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ConfigError::InvalidBaseUrl { url: base_url });
        }

        let base_url = base_url.trim_end_matches('/').to_string();

        Ok(StravaConfig {
            base_url,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_uses_production_endpoint() {
        let config = StravaConfig::default();
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_builder_defaults_to_production_endpoint() {
        let config = StravaConfig::builder().build().unwrap();
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_builder_accepts_custom_base_url() {
        let config = StravaConfig::builder()
            .base_url("https://localhost:8080/api/v1")
            .build()
            .unwrap();
        assert_eq!(config.base_url(), "https://localhost:8080/api/v1");
    }

    #[test]
    fn test_builder_normalizes_trailing_slash() {
        let config = StravaConfig::builder()
            .base_url("https://localhost:8080/api/v1/")
            .build()
            .unwrap();
        assert_eq!(config.base_url(), "https://localhost:8080/api/v1");
    }

    #[test]
    fn test_builder_rejects_empty_base_url() {
        let result = StravaConfig::builder().base_url("").build();
        assert!(matches!(result, Err(ConfigError::EmptyBaseUrl)));
    }

    #[test]
    fn test_builder_rejects_missing_scheme() {
        let result = StravaConfig::builder().base_url("www.strava.com/api/v1").build();
        assert!(matches!(result, Err(ConfigError::InvalidBaseUrl { url }) if url.contains("strava")));
    }

    #[test]
    fn test_config_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StravaConfig>();
    }
}
