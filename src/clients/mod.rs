//! HTTP client types for Strava API communication.
//!
//! This module provides the transport layer the resource graph is built on:
//!
//! - [`ApiClient`]: the async HTTP client performing fetch-and-decode
//! - [`ApiError`]: the single error kind crossing the network boundary
//!
//! The resource types in [`crate::resources`] borrow an [`ApiClient`] for
//! every lazy fetch; the client itself holds no per-resource state.
//!
//! # Example
//!
//! ```rust,ignore
//! use strava_api::{ApiClient, StravaConfig};
//!
//! let client = ApiClient::new(&StravaConfig::default());
//!
//! // Whole body
//! let stream = client.load("/streams/77", None).await?;
//!
//! // Payload under a top-level result key
//! let ride = client.load("/rides/77", Some("ride")).await?;
//! ```

mod api_client;
mod errors;

pub use api_client::{ApiClient, SDK_VERSION};
pub use errors::ApiError;
