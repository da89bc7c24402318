//! HTTP transport port.

use std::error::Error;
use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};

use crate::api::request::ApiRequest;

/// Boxed future returned by [`HttpTransport::send`], keeping the trait dyn-compatible.
pub type TransportFuture<'a> =
    Pin<Box<dyn Future<Output = Result<RawResponse, Box<dyn Error + Send + Sync>>> + Send + 'a>>;

/// A response as the transport saw it, before classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body, if the server sent one.
    pub body: Option<String>,
}

/// Sends a resolved request over the wire.
pub trait HttpTransport: Send + Sync {
    /// Performs exactly one round-trip. Non-2xx statuses are not errors here.
    ///
    /// # Errors
    ///
    /// Returns an error on connection, DNS or timeout failures.
    fn send<'a>(&'a self, request: &'a ApiRequest) -> TransportFuture<'a>;
}
