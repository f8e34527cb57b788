//! Default [`FeedTransport`] backed by a blocking reqwest client.

use std::time::Duration;

use super::transport::{BoxError, FeedTransport, TransportReply};

pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    /// Builds a transport with no client-side deadline. The periodic
    /// scheduler driving the fetches owns timeout enforcement, so a caller
    /// that needs bounded latency must wrap the call itself.
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(None::<Duration>)
            .build()?;
        Ok(Self { client })
    }

    /// Wraps an already-configured client, deadlines and all.
    pub fn with_client(client: reqwest::blocking::Client) -> Self {
        Self { client }
    }
}

impl FeedTransport for HttpTransport {
    fn get(&self, url: &str) -> Result<TransportReply, BoxError> {
        let response = self.client.get(url).send()?;
        let status = response.status().as_u16();
        let body = response.bytes()?.to_vec();
        Ok(TransportReply { status, body })
    }
}
