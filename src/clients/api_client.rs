//! HTTP client for Strava API communication.
//!
//! This module provides the [`ApiClient`] type, the single transport
//! primitive every resource composes with: fetch one path, decode the JSON
//! body, optionally select a top-level result key.

use std::collections::HashMap;

use serde_json::Value;

use crate::clients::errors::ApiError;
use crate::config::StravaConfig;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making read-only requests to the Strava API.
///
/// The client handles:
/// - Base URI resolution from [`StravaConfig`]
/// - Default headers including `User-Agent` and `Accept`
/// - JSON decoding and top-level result-key extraction
///
/// There is deliberately no retry logic, timeout configuration, or partial
/// result recovery: any failure is fatal to the calling operation and
/// surfaces unchanged as an [`ApiError`].
///
/// # Thread Safety
///
/// `ApiClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use strava_api::{ApiClient, StravaConfig};
///
/// let client = ApiClient::new(&StravaConfig::default());
/// let rides = client.load("/rides?athleteId=103227", Some("rides")).await?;
/// ```
#[derive(Debug)]
pub struct ApiClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URI (e.g., `http://www.strava.com/api/v1`).
    base_url: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify ApiClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiClient>();
};

impl ApiClient {
    /// Creates a new client for the configured endpoint.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(config: &StravaConfig) -> Self {
        // Build User-Agent header
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent = format!("{user_agent_prefix}Strava API Library v{SDK_VERSION} | Rust");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: config.base_url().to_string(),
            default_headers,
        }
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Performs one GET against `base_url + path` and decodes the JSON body.
    ///
    /// With `result_key = Some(key)`, returns the value at that top-level
    /// key; with `None`, returns the whole decoded body. The path carries
    /// its own query string, if any.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the connection fails, the response status is
    /// not 2xx, the body is not valid JSON, or `result_key` is absent from
    /// the decoded object. The error carries the requested path.
    pub async fn load(&self, path: &str, result_key: Option<&str>) -> Result<Value, ApiError> {
        let url = format!("{}{path}", self.base_url);
        tracing::debug!("GET {url}");

        let mut request = self.client.get(&url);
        for (key, value) in &self.default_headers {
            request = request.header(key, value);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::request(path, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::request(path, format!("HTTP status {status}")));
        }

        let text = response
            .text()
            .await
            .map_err(|e| ApiError::request(path, e))?;

        let body: Value =
            serde_json::from_str(&text).map_err(|e| ApiError::parse(path, e))?;

        match result_key {
            None => Ok(body),
            Some(key) => body.get(key).cloned().ok_or_else(|| {
                ApiError::parse(path, format!("missing key '{key}' in response"))
            }),
        }
    }
}

impl Default for ApiClient {
    /// Creates a client for the production endpoint.
    fn default() -> Self {
        Self::new(&StravaConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_BASE_URL;

    #[test]
    fn test_client_construction_with_default_config() {
        let client = ApiClient::default();
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = ApiClient::default();
        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.contains("Strava API Library v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = StravaConfig::builder()
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();
        let client = ApiClient::new(&config);

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyApp/1.0 | "));
        assert!(user_agent.contains("Strava API Library"));
    }

    #[test]
    fn test_accept_header_is_json() {
        let client = ApiClient::default();
        assert_eq!(
            client.default_headers().get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ApiClient>();
    }
}
