//! A single ride and its lazily loaded sub-resources.

use tokio::sync::OnceCell;

use crate::clients::{ApiClient, ApiError};
use crate::resources::ride_detail::RideDetail;
use crate::resources::ride_stream::RideStream;
use crate::resources::segment::{EffortEntry, Segment};

/// Information about a single ride.
///
/// Only the id and name are known at construction (they come from the
/// athlete's ride listing); everything else is a lazily fetched
/// sub-resource, saving an API round trip when all the caller wants is the
/// id or name.
///
/// Each sub-resource is fetched at most once per `Ride` instance and owned
/// exclusively by it. A failed fetch caches nothing, so the next access
/// retries. Under concurrent first access, duplicate callers await the same
/// in-flight fetch rather than issuing a second one.
#[derive(Debug)]
pub struct Ride {
    id: u64,
    name: String,
    detail: OnceCell<RideDetail>,
    stream: OnceCell<RideStream>,
    segments: OnceCell<Vec<Segment>>,
}

impl Ride {
    /// Creates a ride from its listing entry. No fetch.
    #[must_use]
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            detail: OnceCell::new(),
            stream: OnceCell::new(),
            segments: OnceCell::new(),
        }
    }

    /// Returns the ride's identifier.
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }

    /// Returns the ride's name, as supplied by the listing. No fetch.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the ride's detail record, fetching it on first access.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the fetch fails; nothing is cached in that
    /// case and a later call retries.
    pub async fn detail(&self, client: &ApiClient) -> Result<&RideDetail, ApiError> {
        self.detail
            .get_or_try_init(|| RideDetail::fetch(client, self.id))
            .await
    }

    /// Returns the ride's data stream, fetching it on first access.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the fetch fails; nothing is cached in that
    /// case and a later call retries.
    pub async fn stream(&self, client: &ApiClient) -> Result<&RideStream, ApiError> {
        self.stream
            .get_or_try_init(|| RideStream::fetch(client, self.id))
            .await
    }

    /// Returns the ride's segments, fetching the effort listing on first
    /// access.
    ///
    /// One fetch of `/rides/<id>/efforts` builds every [`Segment`] from the
    /// embedded listing data; no per-segment network call happens here. A
    /// successfully loaded empty listing is cached like any other result
    /// and does not re-fetch.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the fetch fails or an entry cannot be
    /// decoded; nothing is cached in that case and a later call retries.
    pub async fn segments(&self, client: &ApiClient) -> Result<&[Segment], ApiError> {
        let segments = self
            .segments
            .get_or_try_init(|| async {
                let path = format!("/rides/{}/efforts", self.id);
                let body = client.load(&path, Some("efforts")).await?;
                let entries: Vec<EffortEntry> =
                    serde_json::from_value(body).map_err(|e| ApiError::parse(&path, e))?;
                Ok::<_, ApiError>(entries.into_iter().map(Segment::from_effort).collect())
            })
            .await?;
        Ok(segments.as_slice())
    }
}

// Verify Ride is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Ride>();
};
