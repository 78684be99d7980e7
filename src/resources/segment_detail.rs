//! Merged effort and segment data for one traversal of a route.

use serde::Deserialize;

use crate::clients::{ApiClient, ApiError};
use crate::resources::errors::MissingFieldError;

/// The decoded `effort` record: instance-specific performance data.
#[derive(Debug, Clone, Deserialize)]
struct EffortAttrs {
    #[serde(rename = "elapsedTime")]
    elapsed_time: Option<f64>,
    #[serde(rename = "movingTime")]
    moving_time: Option<f64>,
    #[serde(rename = "averageSpeed")]
    average_speed: Option<f64>,
    #[serde(rename = "maximumSpeed")]
    maximum_speed: Option<f64>,
    #[serde(rename = "averageWatts")]
    average_watts: Option<f64>,
}

/// The decoded `segment` record: static route data.
#[derive(Debug, Clone, Deserialize)]
struct SegmentAttrs {
    distance: Option<f64>,
    #[serde(rename = "averageGrade")]
    average_grade: Option<f64>,
    #[serde(rename = "climbCategory")]
    climb_category: Option<String>,
    #[serde(rename = "elevationLow")]
    elevation_low: Option<f64>,
    #[serde(rename = "elevationHigh")]
    elevation_high: Option<f64>,
    #[serde(rename = "elevationGain")]
    elevation_gain: Option<f64>,
}

/// Detailed data for one segment traversal, merging the effort record
/// (instance-specific) with the segment record (static route data).
///
/// Constructed with two fetches, `/efforts/<effortId>` keyed `effort` and
/// `/segments/<routeId>` keyed `segment`. Both must succeed: if either
/// fails, construction fails as a whole and no partial object is
/// observable. Identity is the route id.
#[derive(Debug, Clone)]
pub struct SegmentDetail {
    id: u64,
    effort: EffortAttrs,
    segment: SegmentAttrs,
}

impl SegmentDetail {
    const RESOURCE: &'static str = "SegmentDetail";

    /// Fetches both records. The two fetches are independent and
    /// order-insensitive; either failure aborts construction.
    pub(crate) async fn fetch(
        client: &ApiClient,
        route_id: u64,
        effort_id: u64,
    ) -> Result<Self, ApiError> {
        let effort_path = format!("/efforts/{effort_id}");
        let effort_body = client.load(&effort_path, Some("effort")).await?;
        let effort =
            serde_json::from_value(effort_body).map_err(|e| ApiError::parse(&effort_path, e))?;

        let segment_path = format!("/segments/{route_id}");
        let segment_body = client.load(&segment_path, Some("segment")).await?;
        let segment =
            serde_json::from_value(segment_body).map_err(|e| ApiError::parse(&segment_path, e))?;

        Ok(Self {
            id: route_id,
            effort,
            segment,
        })
    }

    /// Returns the route's identifier.
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }

    /// Elapsed time for this effort, in seconds.
    ///
    /// # Errors
    ///
    /// Returns [`MissingFieldError`] if the key is absent.
    pub fn elapsed_time(&self) -> Result<f64, MissingFieldError> {
        self.effort.elapsed_time.ok_or(Self::missing("elapsedTime"))
    }

    /// Moving time for this effort, in seconds.
    ///
    /// # Errors
    ///
    /// Returns [`MissingFieldError`] if the key is absent.
    pub fn moving_time(&self) -> Result<f64, MissingFieldError> {
        self.effort.moving_time.ok_or(Self::missing("movingTime"))
    }

    /// Average speed for this effort, in meters per hour.
    ///
    /// # Errors
    ///
    /// Returns [`MissingFieldError`] if the key is absent.
    pub fn average_speed(&self) -> Result<f64, MissingFieldError> {
        self.effort
            .average_speed
            .ok_or(Self::missing("averageSpeed"))
    }

    /// Maximum speed for this effort, in meters per hour.
    ///
    /// # Errors
    ///
    /// Returns [`MissingFieldError`] if the key is absent.
    pub fn maximum_speed(&self) -> Result<f64, MissingFieldError> {
        self.effort
            .maximum_speed
            .ok_or(Self::missing("maximumSpeed"))
    }

    /// Average power for this effort, in watts.
    ///
    /// # Errors
    ///
    /// Returns [`MissingFieldError`] if the key is absent.
    pub fn average_watts(&self) -> Result<f64, MissingFieldError> {
        self.effort
            .average_watts
            .ok_or(Self::missing("averageWatts"))
    }

    /// Route distance, in meters.
    ///
    /// # Errors
    ///
    /// Returns [`MissingFieldError`] if the key is absent.
    pub fn distance(&self) -> Result<f64, MissingFieldError> {
        self.segment.distance.ok_or(Self::missing("distance"))
    }

    /// Average grade of the route, in percent.
    ///
    /// # Errors
    ///
    /// Returns [`MissingFieldError`] if the key is absent.
    pub fn average_grade(&self) -> Result<f64, MissingFieldError> {
        self.segment
            .average_grade
            .ok_or(Self::missing("averageGrade"))
    }

    /// Climb category of the route.
    ///
    /// # Errors
    ///
    /// Returns [`MissingFieldError`] if the key is absent.
    pub fn climb_category(&self) -> Result<&str, MissingFieldError> {
        self.segment
            .climb_category
            .as_deref()
            .ok_or(Self::missing("climbCategory"))
    }

    /// Route elevations as `(low, high, gain)`, in meters.
    ///
    /// # Errors
    ///
    /// Returns [`MissingFieldError`] naming the first absent key.
    pub fn elevations(&self) -> Result<(f64, f64, f64), MissingFieldError> {
        let low = self
            .segment
            .elevation_low
            .ok_or(Self::missing("elevationLow"))?;
        let high = self
            .segment
            .elevation_high
            .ok_or(Self::missing("elevationHigh"))?;
        let gain = self
            .segment
            .elevation_gain
            .ok_or(Self::missing("elevationGain"))?;
        Ok((low, high, gain))
    }

    const fn missing(field: &'static str) -> MissingFieldError {
        MissingFieldError {
            resource: Self::RESOURCE,
            field,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn detail_from(effort: serde_json::Value, segment: serde_json::Value) -> SegmentDetail {
        SegmentDetail {
            id: 615,
            effort: serde_json::from_value(effort).unwrap(),
            segment: serde_json::from_value(segment).unwrap(),
        }
    }

    #[test]
    fn test_accessors_split_across_the_two_snapshots() {
        let detail = detail_from(
            json!({
                "elapsedTime": 300.0,
                "movingTime": 290.0,
                "averageSpeed": 21_000.0,
                "maximumSpeed": 34_000.0,
                "averageWatts": 280.5
            }),
            json!({
                "distance": 1_800.0,
                "averageGrade": 6.2,
                "climbCategory": "4",
                "elevationLow": 120.0,
                "elevationHigh": 232.0,
                "elevationGain": 112.0
            }),
        );

        assert!((detail.elapsed_time().unwrap() - 300.0).abs() < f64::EPSILON);
        assert!((detail.moving_time().unwrap() - 290.0).abs() < f64::EPSILON);
        assert!((detail.average_speed().unwrap() - 21_000.0).abs() < f64::EPSILON);
        assert!((detail.maximum_speed().unwrap() - 34_000.0).abs() < f64::EPSILON);
        assert!((detail.average_watts().unwrap() - 280.5).abs() < f64::EPSILON);
        assert!((detail.distance().unwrap() - 1_800.0).abs() < f64::EPSILON);
        assert!((detail.average_grade().unwrap() - 6.2).abs() < f64::EPSILON);
        assert_eq!(detail.climb_category().unwrap(), "4");
        assert_eq!(detail.elevations().unwrap(), (120.0, 232.0, 112.0));
    }

    #[test]
    fn test_missing_keys_fail_per_accessor() {
        let detail = detail_from(json!({"elapsedTime": 300.0}), json!({"distance": 1_800.0}));

        assert!(detail.elapsed_time().is_ok());
        assert_eq!(detail.moving_time().unwrap_err().field, "movingTime");
        assert!(detail.distance().is_ok());
        assert_eq!(detail.elevations().unwrap_err().field, "elevationLow");
    }
}
