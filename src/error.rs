//! Error types for SDK configuration.
//!
//! Transport and resource errors live next to the code that raises them
//! ([`crate::clients::ApiError`], [`crate::resources::MissingFieldError`]);
//! this module only covers fail-fast configuration validation.

use thiserror::Error;

/// Errors that can occur while building a [`StravaConfig`](crate::StravaConfig).
///
/// Each variant carries an actionable message; configuration is validated
/// on construction so these never surface during API calls.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Base URL cannot be empty.
    #[error("Base URL cannot be empty. Please provide a valid Strava API endpoint.")]
    EmptyBaseUrl,

    /// Base URL is not a usable HTTP endpoint.
    #[error("Invalid base URL '{url}'. Expected an http:// or https:// URL (e.g., 'http://www.strava.com/api/v1').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },
}
