//! Generic Tempo call helper.
//!
//! One call dispatches one request, classifies the status and either runs the
//! success continuation or routes the failed result to the matching error
//! handler. There are no retries; callers wrap the call if they want them.

use serde_json::Value;
use tracing::{debug, warn};

use crate::api::handlers::ErrorHandlers;
use crate::api::request::ApiRequest;
use crate::api::response::{ApiResponse, ApiResult};
use crate::error::{Result, TempoError};
use crate::ports::http::HttpTransport;

/// Name used in unhandled-status error messages.
pub const SERVICE_NAME: &str = "Tempo";

/// Dispatches requests through an [`HttpTransport`].
pub struct ApiClient<'a> {
    transport: &'a dyn HttpTransport,
}

impl<'a> ApiClient<'a> {
    /// Creates a client for the Tempo service.
    #[must_use]
    pub fn new(transport: &'a dyn HttpTransport) -> Self {
        Self { transport }
    }

    /// Sends `request` and routes the response.
    ///
    /// On 2xx, `on_success` runs once with the parsed body (or `{}` when the
    /// body is not JSON) and the handlers are not consulted. Otherwise the
    /// handler for the exact status, or the wildcard handler, runs once with
    /// the full result.
    ///
    /// # Errors
    ///
    /// Returns [`TempoError::Transport`] when the round-trip fails,
    /// [`TempoError::Api`] for a non-2xx status with no handler, and any
    /// error the continuation or handler returns.
    pub async fn call<T, F>(
        &self,
        request: &ApiRequest,
        handlers: &ErrorHandlers<'_, T>,
        on_success: F,
    ) -> Result<ApiResponse<T>>
    where
        F: FnOnce(&Value) -> Result<T>,
    {
        debug!(method = %request.method, url = %request.url, "dispatching request");
        let raw = self
            .transport
            .send(request)
            .await
            .map_err(|e| TempoError::Transport(e.to_string()))?;
        let result = ApiResult::from_raw(raw);
        debug!(status = result.status, "received response");

        let outcome = if result.is_success() {
            on_success(&result.json_or_empty())?
        } else if let Some(handler) = handlers.lookup(result.status) {
            warn!(status = result.status, "routing failed response to error handler");
            handler(&result)?
        } else {
            return Err(TempoError::Api {
                service: SERVICE_NAME.to_string(),
                status: result.status,
                body: result.body,
            });
        };

        Ok(ApiResponse { result, outcome })
    }

    /// Like [`ApiClient::call`], with the parsed JSON as the success outcome.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::call`].
    pub async fn call_json(
        &self,
        request: &ApiRequest,
        handlers: &ErrorHandlers<'_, Value>,
    ) -> Result<ApiResponse<Value>> {
        self.call(request, handlers, |json| Ok(json.clone())).await
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    use serde_json::json;

    use super::*;
    use crate::api::request::HttpMethod;
    use crate::ports::http::{RawResponse, TransportFuture};

    type BoxError = Box<dyn std::error::Error + Send + Sync>;

    /// Serves one canned response and counts dispatches.
    struct CannedTransport {
        response: std::result::Result<RawResponse, String>,
        sent: Mutex<Vec<ApiRequest>>,
    }

    impl CannedTransport {
        fn status(status: u16, body: &str) -> Self {
            Self {
                response: Ok(RawResponse { status, body: Some(body.to_string()) }),
                sent: Mutex::new(Vec::new()),
            }
        }

        fn failing(message: &str) -> Self {
            Self { response: Err(message.to_string()), sent: Mutex::new(Vec::new()) }
        }

        fn dispatch_count(&self) -> usize {
            self.sent.lock().unwrap().len()
        }
    }

    impl HttpTransport for CannedTransport {
        fn send<'a>(&'a self, request: &'a ApiRequest) -> TransportFuture<'a> {
            self.sent.lock().unwrap().push(request.clone());
            let response = self.response.clone().map_err(Into::<BoxError>::into);
            Box::pin(async move { response })
        }
    }

    fn request() -> ApiRequest {
        ApiRequest {
            method: HttpMethod::Get,
            url: "https://api.tempo.io/core/3/worklogs".to_string(),
            headers: BTreeMap::new(),
            body: None,
        }
    }

    #[tokio::test]
    async fn success_runs_continuation_once_and_skips_handlers() {
        let transport = CannedTransport::status(201, r#"{"id":7}"#);
        let client = ApiClient::new(&transport);
        let continuation_calls = Cell::new(0);
        let handler_calls = Cell::new(0);
        let handlers = ErrorHandlers::new().otherwise(|_| {
            handler_calls.set(handler_calls.get() + 1);
            Ok(Value::Null)
        });

        let response = client
            .call(&request(), &handlers, |json| {
                continuation_calls.set(continuation_calls.get() + 1);
                Ok(json.clone())
            })
            .await
            .unwrap();

        assert_eq!(continuation_calls.get(), 1);
        assert_eq!(handler_calls.get(), 0);
        assert_eq!(response.outcome, json!({"id": 7}));
        assert_eq!(response.result.status, 201);
        assert_eq!(transport.dispatch_count(), 1);
    }

    #[tokio::test]
    async fn success_with_non_json_body_passes_empty_object() {
        let transport = CannedTransport::status(200, "OK");
        let client = ApiClient::new(&transport);
        let response = client.call_json(&request(), &ErrorHandlers::new()).await.unwrap();
        assert_eq!(response.outcome, json!({}));
        assert_eq!(response.result.body, "OK");
        assert!(response.result.json.is_none());
    }

    #[tokio::test]
    async fn success_with_null_body_passes_empty_object() {
        let transport = CannedTransport::status(200, "null");
        let client = ApiClient::new(&transport);
        let response = client.call_json(&request(), &ErrorHandlers::new()).await.unwrap();
        assert_eq!(response.outcome, json!({}));
        assert_eq!(response.result.json, Some(Value::Null));
    }

    #[tokio::test]
    async fn exact_handler_receives_full_result() {
        let transport = CannedTransport::status(404, r#"{"message":"gone"}"#);
        let client = ApiClient::new(&transport);
        let seen = Cell::new(0);
        let handlers = ErrorHandlers::new().on(404, |result: &ApiResult| {
            seen.set(seen.get() + 1);
            assert_eq!(result.status, 404);
            assert_eq!(result.json, Some(json!({"message": "gone"})));
            Ok(Value::Null)
        });

        let response = client.call_json(&request(), &handlers).await.unwrap();
        assert_eq!(seen.get(), 1);
        assert_eq!(response.outcome, Value::Null);
    }

    #[tokio::test]
    async fn wildcard_handles_unlisted_status() {
        let transport = CannedTransport::status(500, "boom");
        let client = ApiClient::new(&transport);
        let handlers = ErrorHandlers::new()
            .on(404, |_| Ok("missing".to_string()))
            .otherwise(|result| Ok(format!("caught {}", result.status)));

        let response = client.call(&request(), &handlers, |_| Ok(String::new())).await.unwrap();
        assert_eq!(response.outcome, "caught 500");
    }

    #[tokio::test]
    async fn unhandled_status_is_fatal_with_status_and_body() {
        let transport = CannedTransport::status(500, "internal error");
        let client = ApiClient::new(&transport);
        let err = client.call_json(&request(), &ErrorHandlers::new()).await.unwrap_err();
        assert!(matches!(err, TempoError::Api { status: 500, .. }));
        assert_eq!(err.to_string(), "Tempo responded with 500\n---\ninternal error");
    }

    #[tokio::test]
    async fn handler_can_escalate() {
        let transport = CannedTransport::status(401, "");
        let client = ApiClient::new(&transport);
        let handlers: ErrorHandlers<'_, Value> =
            ErrorHandlers::new().on(401, |_| Err(TempoError::config("token rejected")));
        let err = client.call_json(&request(), &handlers).await.unwrap_err();
        assert_eq!(err.to_string(), "token rejected");
    }

    #[tokio::test]
    async fn transport_failure_propagates() {
        let transport = CannedTransport::failing("connection refused");
        let client = ApiClient::new(&transport);
        let err = client.call_json(&request(), &ErrorHandlers::new()).await.unwrap_err();
        assert!(
            matches!(err, TempoError::Transport(ref msg) if msg.contains("connection refused"))
        );
        assert_eq!(transport.dispatch_count(), 1);
    }
}
