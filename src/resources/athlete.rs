//! The athlete root resource: ride listings and summary statistics.

use chrono::{Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{ApiClient, ApiError};
use crate::resources::errors::ResourceError;
use crate::resources::ride::Ride;

/// One entry of the `/rides?athleteId=<id>` listing.
#[derive(Debug, Clone, Deserialize)]
struct RideSummary {
    id: u64,
    name: String,
}

/// Summary statistics over a window of rides.
///
/// Accumulators default to zero, so an empty window yields all-zero stats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RideStats {
    /// Number of rides in the window.
    pub rides: u64,
    /// Total moving time in seconds.
    pub moving_time: f64,
    /// Total distance in meters.
    pub distance: f64,
}

/// A single athlete, the entry point into the resource graph.
///
/// Note that the athlete's name is not available at this level: the
/// upstream API only exposes it on ride and effort records, and fetching
/// one of those would be too heavy a query for the top-level object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Athlete {
    id: u64,
}

impl Athlete {
    /// Creates a handle for the athlete with the given id. No fetch.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self { id }
    }

    /// Returns the athlete's identifier.
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }

    /// Lists all of the athlete's rides.
    ///
    /// Never cached: every call re-fetches the listing. Each entry becomes
    /// a [`Ride`] with only its id and name populated.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the fetch fails or a listing entry cannot be
    /// decoded.
    pub async fn rides(&self, client: &ApiClient) -> Result<Vec<Ride>, ApiError> {
        self.list_rides(client, None).await
    }

    /// Lists the athlete's rides starting on or after `start`.
    ///
    /// Never cached, like [`Self::rides`] — the date filter varies per call.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the fetch fails or a listing entry cannot be
    /// decoded.
    pub async fn rides_since(
        &self,
        client: &ApiClient,
        start: NaiveDate,
    ) -> Result<Vec<Ride>, ApiError> {
        self.list_rides(client, Some(start)).await
    }

    /// Finds a ride by id in the unfiltered listing.
    ///
    /// Returns `Ok(None)` — not an error — when no entry matches.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the listing fetch fails.
    pub async fn ride(&self, client: &ApiClient, ride_id: u64) -> Result<Option<Ride>, ApiError> {
        Ok(self
            .rides(client)
            .await?
            .into_iter()
            .find(|ride| ride.id() == ride_id))
    }

    /// Computes ride count, total moving time, and total distance over the
    /// past `days` days (conventionally 7), using the system clock for
    /// "today."
    ///
    /// # Errors
    ///
    /// See [`Self::ride_stats_as_of`].
    pub async fn ride_stats(
        &self,
        client: &ApiClient,
        days: u32,
    ) -> Result<RideStats, ResourceError> {
        self.ride_stats_as_of(client, Utc::now().date_naive(), days)
            .await
    }

    /// Computes ride statistics for the `days`-day window ending at `today`.
    ///
    /// `today` is injected so the operation is deterministic and testable.
    /// Each ride in the window forces one detail fetch, serially — the cost
    /// is O(rides in window) round trips, with no batching.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Api`] if a listing or detail fetch fails,
    /// or [`ResourceError::MissingField`] if a fetched detail lacks
    /// `movingTime` or `distance`.
    pub async fn ride_stats_as_of(
        &self,
        client: &ApiClient,
        today: NaiveDate,
        days: u32,
    ) -> Result<RideStats, ResourceError> {
        let start = today - Duration::days(i64::from(days));
        let mut stats = RideStats::default();

        for ride in self.rides_since(client, start).await? {
            stats.rides += 1;
            let detail = ride.detail(client).await?;
            stats.moving_time += detail.moving_time()?;
            stats.distance += detail.distance()?;
        }

        Ok(stats)
    }

    async fn list_rides(
        &self,
        client: &ApiClient,
        start: Option<NaiveDate>,
    ) -> Result<Vec<Ride>, ApiError> {
        let mut path = format!("/rides?athleteId={}", self.id);
        if let Some(start) = start {
            path.push_str(&format!("&startDate={}", start.format("%Y-%m-%d")));
        }

        let body = client.load(&path, Some("rides")).await?;
        let entries: Vec<RideSummary> =
            serde_json::from_value(body).map_err(|e| ApiError::parse(&path, e))?;

        Ok(entries
            .into_iter()
            .map(|entry| Ride::new(entry.id, entry.name))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_athlete_exposes_id_without_fetch() {
        let athlete = Athlete::new(103_227);
        assert_eq!(athlete.id(), 103_227);
    }

    #[test]
    fn test_ride_stats_defaults_to_zero() {
        let stats = RideStats::default();
        assert_eq!(stats.rides, 0);
        assert!(stats.moving_time.abs() < f64::EPSILON);
        assert!(stats.distance.abs() < f64::EPSILON);
    }

    #[test]
    fn test_ride_stats_serializes_all_fields() {
        let stats = RideStats {
            rides: 3,
            moving_time: 5_400.0,
            distance: 72_000.0,
        };
        let json = serde_json::to_value(stats).unwrap();
        assert_eq!(json["rides"], 3);
        assert_eq!(json["moving_time"], 5_400.0);
        assert_eq!(json["distance"], 72_000.0);
    }
}
