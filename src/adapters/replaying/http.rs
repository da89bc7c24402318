//! Replaying adapter for the `HttpTransport` port.

use std::sync::Mutex;

use super::{extract_result, next_output};
use crate::api::request::ApiRequest;
use crate::cassette::format::ports;
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::http::{HttpTransport, RawResponse, TransportFuture};

/// Serves recorded responses instead of touching the network.
///
/// Requests are not matched against the recording; responses come back in
/// the order they were recorded.
pub struct ReplayingHttpTransport {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingHttpTransport {
    /// Create a replaying transport backed by the given replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl HttpTransport for ReplayingHttpTransport {
    fn send<'a>(&'a self, _request: &'a ApiRequest) -> TransportFuture<'a> {
        let output = next_output(&self.replayer, ports::HTTP, "send");
        Box::pin(async move { extract_result::<RawResponse>(output, "http::send") })
    }
}
