//! Transport-level error type for the Strava API SDK.
//!
//! Exactly one error kind crosses the network boundary: [`ApiError`]. It
//! covers connection failures, non-2xx statuses, undecodable bodies, and a
//! requested result key missing from a decoded response. Callers get the
//! request path plus a human-readable cause and nothing more structured;
//! the upstream API does not offer anything stabler to dispatch on.

use thiserror::Error;

/// Error returned when an API request fails.
///
/// Carries the requested path and a cause description. Transport failures
/// are phrased `request failed: …`; decoding failures are phrased
/// `parsing response failed: …`.
///
/// # Example
///
/// ```rust
/// use strava_api::ApiError;
///
/// let error = ApiError::request("/rides/77", "HTTP status 404 Not Found");
/// assert_eq!(
///     error.to_string(),
///     "/rides/77: request failed: HTTP status 404 Not Found"
/// );
/// ```
#[derive(Debug, Error)]
#[error("{path}: {cause}")]
pub struct ApiError {
    /// The request path, including any query string.
    pub path: String,
    /// Human-readable failure description.
    pub cause: String,
}

impl ApiError {
    /// Creates an error for a failed request (network error or bad status).
    #[must_use]
    pub fn request(path: impl Into<String>, detail: impl std::fmt::Display) -> Self {
        Self {
            path: path.into(),
            cause: format!("request failed: {detail}"),
        }
    }

    /// Creates an error for a response that could not be decoded as expected.
    #[must_use]
    pub fn parse(path: impl Into<String>, detail: impl std::fmt::Display) -> Self {
        Self {
            path: path.into(),
            cause: format!("parsing response failed: {detail}"),
        }
    }
}

// Verify ApiError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiError>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_error_includes_path_and_cause() {
        let error = ApiError::request("/rides?athleteId=1", "connection refused");
        let message = error.to_string();
        assert!(message.starts_with("/rides?athleteId=1: "));
        assert!(message.contains("request failed: connection refused"));
    }

    #[test]
    fn test_parse_error_includes_path_and_cause() {
        let error = ApiError::parse("/streams/9", "expected value at line 1 column 1");
        let message = error.to_string();
        assert!(message.starts_with("/streams/9: "));
        assert!(message.contains("parsing response failed"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ApiError::request("/rides/1", "boom");
        let _: &dyn std::error::Error = &error;
    }
}
