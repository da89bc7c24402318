//! Live adapter for the `HttpTransport` port using `reqwest`.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method};

use crate::api::request::{ApiRequest, HttpMethod};
use crate::ports::http::{HttpTransport, RawResponse, TransportFuture};

/// Sends requests to the real Tempo API.
///
/// No timeout is configured; requests rely on the `reqwest` defaults.
pub struct LiveHttpTransport {
    client: Client,
}

impl LiveHttpTransport {
    /// Creates a new live transport.
    #[must_use]
    pub fn new() -> Self {
        Self { client: Client::new() }
    }
}

impl Default for LiveHttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

fn to_reqwest_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Delete => Method::DELETE,
        HttpMethod::Head => Method::HEAD,
        HttpMethod::Connect => Method::CONNECT,
        HttpMethod::Patch => Method::PATCH,
    }
}

fn to_header_map(
    request: &ApiRequest,
) -> Result<HeaderMap, Box<dyn std::error::Error + Send + Sync>> {
    let mut headers = HeaderMap::new();
    for (name, value) in &request.headers {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| format!("invalid header name {name:?}: {e}"))?;
        let value =
            HeaderValue::from_str(value).map_err(|e| format!("invalid header value: {e}"))?;
        headers.insert(name, value);
    }
    Ok(headers)
}

impl HttpTransport for LiveHttpTransport {
    fn send<'a>(&'a self, request: &'a ApiRequest) -> TransportFuture<'a> {
        Box::pin(async move {
            let headers = to_header_map(request)?;
            let mut builder = self
                .client
                .request(to_reqwest_method(request.method), &request.url)
                .headers(headers);
            if let Some(body) = &request.body {
                builder = builder.body(body.clone());
            }

            let response = builder
                .send()
                .await
                .map_err(|e| format!("request to {} failed: {e}", request.url))?;
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .map_err(|e| format!("failed to read response from {}: {e}", request.url))?;

            let response = RawResponse { status, body: Some(body) };
            Ok::<_, Box<dyn std::error::Error + Send + Sync>>(response)
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    #[test]
    fn maps_every_method() {
        assert_eq!(to_reqwest_method(HttpMethod::Get), Method::GET);
        assert_eq!(to_reqwest_method(HttpMethod::Connect), Method::CONNECT);
        assert_eq!(to_reqwest_method(HttpMethod::Patch), Method::PATCH);
    }

    #[test]
    fn invalid_header_value_is_rejected_before_sending() {
        let request = ApiRequest {
            method: HttpMethod::Get,
            url: "https://api.tempo.io".to_string(),
            headers: BTreeMap::from([("X-Bad".to_string(), "line\nbreak".to_string())]),
            body: None,
        };
        assert!(to_header_map(&request).is_err());
    }

    #[tokio::test]
    async fn connection_failure_is_an_error() {
        let request = ApiRequest {
            method: HttpMethod::Get,
            url: "http://127.0.0.1:9/core/3/worklogs".to_string(),
            headers: BTreeMap::new(),
            body: None,
        };
        let result = LiveHttpTransport::new().send(&request).await;
        assert!(result.is_err());
    }
}
