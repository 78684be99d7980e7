//! # Strava API Rust SDK
//!
//! A Rust SDK for the read-only Strava v1 API, exposing a small, lazily
//! populated object graph: athlete, ride, ride detail, ride data stream,
//! segment, and segment detail.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`StravaConfig`] and [`StravaConfigBuilder`]
//! - An async HTTP transport primitive, [`ApiClient`], that fetches one
//!   path and decodes the JSON body
//! - A resource graph ([`Athlete`] → [`Ride`] → [`RideDetail`] /
//!   [`RideStream`] / [`Segment`] → [`SegmentDetail`]) where every
//!   sub-resource is a lazy, memoized, one-shot fetch
//! - A deliberately small error surface: one transport error kind
//!   ([`ApiError`]) and one data-shape error kind ([`MissingFieldError`])
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use strava_api::{ApiClient, Athlete, StravaConfig};
//!
//! let client = ApiClient::new(&StravaConfig::default());
//! let athlete = Athlete::new(103227);
//!
//! // Weekly summary (one listing fetch + one detail fetch per ride)
//! let stats = athlete.ride_stats(&client, 7).await?;
//! println!("Ridden {} rides, {} minutes moving", stats.rides, stats.moving_time / 60.0);
//!
//! // Walk the graph; each arrow fetches lazily and caches per instance
//! for ride in athlete.rides(&client).await? {
//!     println!("Ride: {}", ride.name());
//!     for segment in ride.segments(&client).await? {
//!         let detail = segment.detail(&client).await?;
//!         println!("  {}: {} s moving", segment.name(), detail.moving_time()?);
//!     }
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: configuration is instance-based and the client is
//!   passed explicitly into every fetching accessor
//! - **Fail-fast validation**: configuration validates on construction
//! - **Immutable snapshots**: fetched records never mutate; accessors only
//!   project values out of them
//! - **Errors propagate unchanged**: no retries, no local recovery; a
//!   failed lazy fetch caches nothing, so the next access retries
//! - **Thread-safe**: all types are `Send + Sync`; concurrent first access
//!   of a sub-resource awaits a single in-flight fetch

pub mod clients;
pub mod config;
pub mod error;
pub mod resources;

// Re-export public types at crate root for convenience
pub use clients::{ApiClient, ApiError};
pub use config::{StravaConfig, StravaConfigBuilder, DEFAULT_BASE_URL};
pub use error::ConfigError;
pub use resources::{
    Athlete, MissingFieldError, ResourceError, Ride, RideDetail, RideStats, RideStream, Segment,
    SegmentDetail,
};
