//! Fetches raw real-time feed bytes over an injected transport.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use super::transport::{BoxError, FeedTransport};

/// Where the two live feeds are served from, fixed at construction time.
///
/// Deserializable so deployments can keep the URLs in a config file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedEndpoints {
    pub trip_updates_url: String,
    pub vehicle_positions_url: String,
}

/// The only faults the real-time boundary raises. Callers (the periodic
/// scheduler, in practice) decide whether a failed fetch is worth retrying.
#[derive(Debug, Error)]
pub enum FeedError {
    /// The server answered, but not with status 200.
    #[error("feed responded with HTTP status {code}")]
    HttpStatus { code: u16 },
    /// The request never produced a response. Connection refusals, timeouts,
    /// and TLS failures all land here; `source` carries the specifics.
    #[error("feed transport failed: {source}")]
    Transport {
        #[source]
        source: BoxError,
    },
}

/// One-shot byte fetcher for the trip-update and vehicle-position feeds.
///
/// Performs exactly one attempt per call, with no retry, backoff, or timeout
/// policy of its own. Holds no mutable state, so one fetcher may be shared
/// across threads freely (given a transport that is itself `Sync`).
pub struct FeedFetcher<T> {
    endpoints: FeedEndpoints,
    transport: T,
}

impl<T: FeedTransport> FeedFetcher<T> {
    pub fn new(endpoints: FeedEndpoints, transport: T) -> Self {
        Self {
            endpoints,
            transport,
        }
    }

    pub fn endpoints(&self) -> &FeedEndpoints {
        &self.endpoints
    }

    /// Issues a single GET against `url` and returns the raw body.
    ///
    /// Success requires status 200 exactly; every other status, redirects
    /// and `204 No Content` included, is an [`FeedError::HttpStatus`].
    pub fn fetch(&self, url: &str) -> Result<Vec<u8>, FeedError> {
        let reply = self
            .transport
            .get(url)
            .map_err(|source| FeedError::Transport { source })?;
        if reply.status != 200 {
            return Err(FeedError::HttpStatus { code: reply.status });
        }
        debug!(url, bytes = reply.body.len(), "feed fetched");
        Ok(reply.body)
    }

    /// Fetches the trip-update feed configured at construction.
    pub fn fetch_trip_updates(&self) -> Result<Vec<u8>, FeedError> {
        self.fetch(&self.endpoints.trip_updates_url)
    }

    /// Fetches the vehicle-position feed configured at construction.
    pub fn fetch_vehicle_positions(&self) -> Result<Vec<u8>, FeedError> {
        self.fetch(&self.endpoints.vehicle_positions_url)
    }
}
