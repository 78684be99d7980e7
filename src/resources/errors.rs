//! Resource-level error types.
//!
//! Two failure classes are kept deliberately distinct:
//!
//! - [`ApiError`](crate::clients::ApiError): the fetch itself failed
//!   (transport or parsing). The lazy field stays unpopulated and a later
//!   access retries the fetch.
//! - [`MissingFieldError`]: the fetch succeeded but an accessor's expected
//!   key is absent from the cached snapshot. This is a data-shape problem,
//!   not a transport one.
//!
//! [`ResourceError`] unions the two for operations that can surface both,
//! such as [`Athlete::ride_stats`](crate::resources::Athlete::ride_stats).

use thiserror::Error;

use crate::clients::ApiError;

/// Error returned when an expected field is missing from a fetched snapshot.
///
/// # Example
///
/// ```rust
/// use strava_api::MissingFieldError;
///
/// let error = MissingFieldError {
///     resource: "RideDetail",
///     field: "movingTime",
/// };
/// assert_eq!(
///     error.to_string(),
///     "RideDetail: missing field 'movingTime' in response"
/// );
/// ```
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("{resource}: missing field '{field}' in response")]
pub struct MissingFieldError {
    /// The resource type whose snapshot is incomplete.
    pub resource: &'static str,
    /// The source key (or dotted key path) that was expected.
    pub field: &'static str,
}

/// Error type for resource operations that both fetch and read snapshots.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// An API fetch failed (transport or parsing).
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A fetched snapshot is missing an expected field.
    #[error(transparent)]
    MissingField(#[from] MissingFieldError),
}

// Verify ResourceError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
};
