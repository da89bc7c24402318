//! Recording adapter for the `HttpTransport` port.

use std::collections::BTreeMap;

use serde::Serialize;

use super::record_result;
use crate::api::request::{ApiRequest, HttpMethod};
use crate::cassette::format::ports;
use crate::cassette::session::SharedRecorder;
use crate::ports::{HttpTransport, TransportFuture};

/// Header whose value never reaches a cassette.
const REDACTED_HEADER: &str = "authorization";

/// Records requests and responses while delegating to an inner transport.
pub struct RecordingHttpTransport {
    inner: Box<dyn HttpTransport>,
    recorder: SharedRecorder,
}

impl RecordingHttpTransport {
    /// Creates a new recording transport wrapping the given implementation.
    pub fn new(inner: Box<dyn HttpTransport>, recorder: SharedRecorder) -> Self {
        Self { inner, recorder }
    }
}

/// The request as stored in a cassette, credentials removed.
#[derive(Serialize)]
struct RecordedRequest<'a> {
    method: HttpMethod,
    url: &'a str,
    headers: BTreeMap<&'a str, &'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    body: Option<&'a str>,
}

impl<'a> RecordedRequest<'a> {
    fn redacted(request: &'a ApiRequest) -> Self {
        let headers = request
            .headers
            .iter()
            .map(|(name, value)| {
                let value = if name.eq_ignore_ascii_case(REDACTED_HEADER) {
                    "<redacted>"
                } else {
                    value.as_str()
                };
                (name.as_str(), value)
            })
            .collect();
        Self { method: request.method, url: &request.url, headers, body: request.body.as_deref() }
    }
}

impl HttpTransport for RecordingHttpTransport {
    fn send<'a>(&'a self, request: &'a ApiRequest) -> TransportFuture<'a> {
        Box::pin(async move {
            let result = self.inner.send(request).await;
            record_result(
                &self.recorder,
                ports::HTTP,
                "send",
                &RecordedRequest::redacted(request),
                &result,
            );
            result
        })
    }
}
