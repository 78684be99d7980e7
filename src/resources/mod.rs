//! The lazily loaded Strava resource graph.
//!
//! # Overview
//!
//! Resources form a tree, each level populated from the remote API on first
//! access:
//!
//! ```text
//! Athlete ──rides()──▶ Ride ──detail()───▶ RideDetail
//!                           ──stream()───▶ RideStream
//!                           ──segments()─▶ Segment ──detail()─▶ SegmentDetail
//! ```
//!
//! Every arrow is a lazy, memoized, one-shot fetch: a sub-resource is
//! fetched at most once per owning instance, snapshots are immutable after
//! construction, and ownership is strictly tree-shaped (no back-references,
//! no sharing). The one exception to memoization is the athlete's ride
//! *listing*, which re-fetches on every call because its date filter varies.
//!
//! Fetching accessors borrow an [`ApiClient`](crate::clients::ApiClient);
//! the shared "fetch and decode" behavior lives there rather than in a base
//! type.
//!
//! # Key Types
//!
//! - [`Athlete`]: root entry point; ride listings and summary statistics
//! - [`Ride`]: id + name from the listing; lazy detail/stream/segments
//! - [`RideDetail`]: strict snapshot of a ride's full attributes
//! - [`RideStream`]: tolerant snapshot of a ride's time-series data
//! - [`Segment`]: one effort over a route, from embedded listing data
//! - [`SegmentDetail`]: merged effort + route snapshots
//! - [`MissingFieldError`], [`ResourceError`]: data-shape failures, kept
//!   distinct from transport failures

mod athlete;
mod errors;
mod ride;
mod ride_detail;
mod ride_stream;
mod segment;
mod segment_detail;

pub use athlete::{Athlete, RideStats};
pub use errors::{MissingFieldError, ResourceError};
pub use ride::Ride;
pub use ride_detail::RideDetail;
pub use ride_stream::RideStream;
pub use segment::Segment;
pub use segment_detail::SegmentDetail;
