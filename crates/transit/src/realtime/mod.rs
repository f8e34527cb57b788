//! Real-time feed boundary.
//!
//! Two independently configured feeds (trip updates and vehicle positions)
//! are fetched as opaque byte payloads; decoding them belongs to the
//! consumer. The transport is injected behind [`FeedTransport`], so tests
//! script exchanges without a network and production uses [`HttpTransport`].

mod fetcher;
mod http;
mod transport;

pub use fetcher::{FeedEndpoints, FeedError, FeedFetcher};
pub use http::HttpTransport;
pub use transport::{BoxError, FeedTransport, TransportReply};
