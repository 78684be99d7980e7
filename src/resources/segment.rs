//! A single ride segment, built from a ride's effort listing.

use serde::Deserialize;
use tokio::sync::OnceCell;

use crate::clients::{ApiClient, ApiError};
use crate::resources::segment_detail::SegmentDetail;

/// The embedded `segment` object inside an effort-listing entry.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct SegmentRef {
    pub id: u64,
    pub name: String,
}

/// One entry of a ride's `/rides/<id>/efforts` listing.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct EffortEntry {
    pub id: u64,
    pub elapsed_time: f64,
    pub segment: SegmentRef,
}

/// Information about a single ride segment.
///
/// Constructed in memory from an effort-listing entry, with no network
/// call: identity is the *effort* id, the elapsed time and route name come
/// from the embedded data, and the route id is captured for the later
/// detail fetch.
///
/// The full data lives in a [`SegmentDetail`], combining what the upstream
/// API calls an "effort" and a "segment" — both pertain to the same portion
/// of a ride, so they share one interface. That merge costs two API round
/// trips, which is exactly why it is lazy: reading the name or id here
/// never fetches.
#[derive(Debug)]
pub struct Segment {
    id: u64,
    route_id: u64,
    name: String,
    time: f64,
    detail: OnceCell<SegmentDetail>,
}

impl Segment {
    pub(crate) fn from_effort(entry: EffortEntry) -> Self {
        Self {
            id: entry.id,
            route_id: entry.segment.id,
            name: entry.segment.name,
            time: entry.elapsed_time,
            detail: OnceCell::new(),
        }
    }

    /// Returns the effort's identifier.
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }

    /// Returns the route's name, from the embedded listing data. No fetch.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the elapsed time in seconds, from the embedded listing data.
    /// No fetch.
    #[must_use]
    pub const fn time(&self) -> f64 {
        self.time
    }

    /// Returns the detail record, fetching it on first access.
    ///
    /// The first call performs the two underlying fetches (effort and
    /// segment records); subsequent calls return the memoized instance.
    /// On failure nothing is cached and a later call retries.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if either underlying fetch fails.
    pub async fn detail(&self, client: &ApiClient) -> Result<&SegmentDetail, ApiError> {
        self.detail
            .get_or_try_init(|| SegmentDetail::fetch(client, self.route_id, self.id))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_segment_built_from_effort_entry() {
        let entry: EffortEntry = serde_json::from_value(json!({
            "id": 9_001,
            "elapsed_time": 312.0,
            "segment": {"id": 615, "name": "Hawk Hill"}
        }))
        .unwrap();

        let segment = Segment::from_effort(entry);
        assert_eq!(segment.id(), 9_001);
        assert_eq!(segment.name(), "Hawk Hill");
        assert!((segment.time() - 312.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_effort_entry_requires_embedded_segment() {
        let result: Result<EffortEntry, _> = serde_json::from_value(json!({
            "id": 9_001,
            "elapsed_time": 312.0
        }));
        assert!(result.is_err());
    }
}
