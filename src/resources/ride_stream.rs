//! Detailed data points (time series) for a single ride.

use serde::Deserialize;
use serde_json::Value;

use crate::clients::{ApiClient, ApiError};

/// The decoded stream body. Not every rider has hardware to track every
/// data point, so each series defaults to empty when absent.
#[derive(Debug, Clone, Default, Deserialize)]
struct RideStreamAttrs {
    #[serde(default)]
    altitude: Vec<f64>,
    // The response key really is spelled this way upstream; reading the
    // correctly spelled key would change observable behavior against the
    // live service.
    #[serde(default, rename = "altitiude_original")]
    altitude_original: Vec<f64>,
    #[serde(default)]
    cadence: Vec<f64>,
    #[serde(default)]
    distance: Vec<f64>,
    #[serde(default)]
    grade_smooth: Vec<f64>,
    #[serde(default)]
    heartrate: Vec<f64>,
    #[serde(default)]
    latlng: Vec<[f64; 2]>,
    #[serde(default)]
    moving: Vec<bool>,
    #[serde(default)]
    outlier: Vec<bool>,
    #[serde(default)]
    resting: Vec<bool>,
    #[serde(default)]
    temp: Vec<f64>,
    #[serde(default)]
    time: Vec<f64>,
    #[serde(default)]
    total_elevation: Vec<f64>,
    #[serde(default)]
    velocity_smooth: Vec<f64>,
    #[serde(default)]
    watts_calc: Vec<f64>,
}

/// The time-series payload for a single ride.
///
/// Fetched exactly once, from `/streams/<id>` (the whole body is the series
/// mapping), when [`Ride::stream`](crate::resources::Ride::stream) is first
/// accessed.
///
/// Every accessor is tolerant: a series absent from the snapshot reads as
/// an empty slice, never an error, and "key absent" is indistinguishable
/// from "key present but empty."
#[derive(Debug, Clone)]
pub struct RideStream {
    id: u64,
    raw: Value,
    attrs: RideStreamAttrs,
}

impl RideStream {
    /// Fetches and decodes the stream body for ride `id`.
    pub(crate) async fn fetch(client: &ApiClient, id: u64) -> Result<Self, ApiError> {
        let path = format!("/streams/{id}");
        let raw = client.load(&path, None).await?;
        let attrs =
            serde_json::from_value(raw.clone()).map_err(|e| ApiError::parse(&path, e))?;
        Ok(Self { id, raw, attrs })
    }

    /// Returns the ride's identifier.
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }

    /// Altitude samples in meters.
    #[must_use]
    pub fn altitude(&self) -> &[f64] {
        &self.attrs.altitude
    }

    /// Uncorrected altitude samples.
    ///
    /// Reads the literal response key `altitiude_original` — the upstream
    /// service's field name is misspelled and is preserved here for
    /// compatibility rather than fixed.
    #[must_use]
    pub fn altitude_original(&self) -> &[f64] {
        &self.attrs.altitude_original
    }

    /// Cadence samples in rpm.
    #[must_use]
    pub fn cadence(&self) -> &[f64] {
        &self.attrs.cadence
    }

    /// Cumulative distance samples in meters.
    #[must_use]
    pub fn distance(&self) -> &[f64] {
        &self.attrs.distance
    }

    /// Smoothed grade samples in percent.
    #[must_use]
    pub fn grade_smooth(&self) -> &[f64] {
        &self.attrs.grade_smooth
    }

    /// Heart rate samples in bpm.
    #[must_use]
    pub fn heartrate(&self) -> &[f64] {
        &self.attrs.heartrate
    }

    /// Position samples as `[latitude, longitude]` pairs.
    #[must_use]
    pub fn latlng(&self) -> &[[f64; 2]] {
        &self.attrs.latlng
    }

    /// Per-sample moving flags.
    #[must_use]
    pub fn moving(&self) -> &[bool] {
        &self.attrs.moving
    }

    /// Per-sample outlier flags.
    #[must_use]
    pub fn outlier(&self) -> &[bool] {
        &self.attrs.outlier
    }

    /// Per-sample resting flags.
    #[must_use]
    pub fn resting(&self) -> &[bool] {
        &self.attrs.resting
    }

    /// Temperature samples in degrees Celsius.
    #[must_use]
    pub fn temp(&self) -> &[f64] {
        &self.attrs.temp
    }

    /// Elapsed time samples in seconds.
    #[must_use]
    pub fn time(&self) -> &[f64] {
        &self.attrs.time
    }

    /// Cumulative elevation gain samples in meters.
    #[must_use]
    pub fn total_elevation(&self) -> &[f64] {
        &self.attrs.total_elevation
    }

    /// Smoothed velocity samples in meters per second.
    #[must_use]
    pub fn velocity_smooth(&self) -> &[f64] {
        &self.attrs.velocity_smooth
    }

    /// Calculated power samples in watts.
    #[must_use]
    pub fn watts_calc(&self) -> &[f64] {
        &self.attrs.watts_calc
    }

    /// The full decoded response body, for series not covered by the named
    /// accessors.
    #[must_use]
    pub const fn raw_data(&self) -> &Value {
        &self.raw
    }
}
