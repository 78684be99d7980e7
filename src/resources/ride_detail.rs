//! Full attributes of a single ride.

use serde::Deserialize;

use crate::clients::{ApiClient, ApiError};
use crate::resources::errors::MissingFieldError;

/// A nested `{id, name}` reference inside a ride record.
#[derive(Debug, Clone, Deserialize)]
struct EntityRef {
    id: Option<u64>,
    name: Option<String>,
}

/// The decoded `ride` record. Every field is optional at decode time;
/// the accessors decide what is required.
#[derive(Debug, Clone, Deserialize)]
struct RideDetailAttrs {
    athlete: Option<EntityRef>,
    bike: Option<EntityRef>,
    location: Option<String>,
    distance: Option<f64>,
    #[serde(rename = "movingTime")]
    moving_time: Option<f64>,
}

/// Detailed data for a single ride.
///
/// Fetched exactly once, from `/rides/<id>` under the `ride` result key,
/// when [`Ride::detail`](crate::resources::Ride::detail) is first accessed.
/// The snapshot is immutable after construction.
///
/// Unlike [`RideStream`](crate::resources::RideStream), the accessors here
/// do not default: a missing key is a [`MissingFieldError`].
#[derive(Debug, Clone)]
pub struct RideDetail {
    id: u64,
    attrs: RideDetailAttrs,
}

impl RideDetail {
    const RESOURCE: &'static str = "RideDetail";

    /// Fetches and decodes the detail record for `id`.
    pub(crate) async fn fetch(client: &ApiClient, id: u64) -> Result<Self, ApiError> {
        let path = format!("/rides/{id}");
        let body = client.load(&path, Some("ride")).await?;
        let attrs = serde_json::from_value(body).map_err(|e| ApiError::parse(&path, e))?;
        Ok(Self { id, attrs })
    }

    /// Returns the ride's identifier.
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }

    /// Returns the athlete's name.
    ///
    /// # Errors
    ///
    /// Returns [`MissingFieldError`] if the nested key is absent.
    pub fn athlete(&self) -> Result<&str, MissingFieldError> {
        self.attrs
            .athlete
            .as_ref()
            .and_then(|a| a.name.as_deref())
            .ok_or(Self::missing("athlete.name"))
    }

    /// Returns the athlete's identifier.
    ///
    /// # Errors
    ///
    /// Returns [`MissingFieldError`] if the nested key is absent.
    pub fn athlete_id(&self) -> Result<u64, MissingFieldError> {
        self.attrs
            .athlete
            .as_ref()
            .and_then(|a| a.id)
            .ok_or(Self::missing("athlete.id"))
    }

    /// Returns the bike's name.
    ///
    /// # Errors
    ///
    /// Returns [`MissingFieldError`] if the nested key is absent.
    pub fn bike(&self) -> Result<&str, MissingFieldError> {
        self.attrs
            .bike
            .as_ref()
            .and_then(|b| b.name.as_deref())
            .ok_or(Self::missing("bike.name"))
    }

    /// Returns the bike's identifier.
    ///
    /// # Errors
    ///
    /// Returns [`MissingFieldError`] if the nested key is absent.
    pub fn bike_id(&self) -> Result<u64, MissingFieldError> {
        self.attrs
            .bike
            .as_ref()
            .and_then(|b| b.id)
            .ok_or(Self::missing("bike.id"))
    }

    /// Returns the ride's location.
    ///
    /// # Errors
    ///
    /// Returns [`MissingFieldError`] if the key is absent.
    pub fn location(&self) -> Result<&str, MissingFieldError> {
        self.attrs
            .location
            .as_deref()
            .ok_or(Self::missing("location"))
    }

    /// Returns the ride's distance in meters.
    ///
    /// # Errors
    ///
    /// Returns [`MissingFieldError`] if the key is absent.
    pub fn distance(&self) -> Result<f64, MissingFieldError> {
        self.attrs.distance.ok_or(Self::missing("distance"))
    }

    /// Returns the ride's moving time in seconds (source key `movingTime`).
    ///
    /// # Errors
    ///
    /// Returns [`MissingFieldError`] if the key is absent.
    pub fn moving_time(&self) -> Result<f64, MissingFieldError> {
        self.attrs.moving_time.ok_or(Self::missing("movingTime"))
    }

    const fn missing(field: &'static str) -> MissingFieldError {
        MissingFieldError {
            resource: Self::RESOURCE,
            field,
        }
    }
}
