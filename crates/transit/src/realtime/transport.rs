//! Pluggable transport seam for the feed fetcher.

/// Error type transports report; the fetcher wraps it without inspecting it.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Raw outcome of one HTTP exchange, before any status policy is applied.
#[derive(Clone, Debug)]
pub struct TransportReply {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Issues a single GET request.
///
/// Implementations report transport-level failures (refused connections,
/// timeouts, TLS trouble) as errors. A response with a non-success status is
/// not a transport error; it comes back as a [`TransportReply`] and the
/// fetcher decides what to make of it.
pub trait FeedTransport {
    fn get(&self, url: &str) -> Result<TransportReply, BoxError>;
}
