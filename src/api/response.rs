//! Classified responses.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::ports::http::RawResponse;

/// What came back from one call: status, raw body and parsed JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResult {
    /// HTTP status code.
    pub status: u16,
    /// Raw response body; empty when the server sent none.
    pub body: String,
    /// Parsed body, `None` when the body is not valid JSON.
    pub json: Option<Value>,
}

impl ApiResult {
    /// Builds a result from a transport response, parsing JSON best-effort.
    #[must_use]
    pub fn from_raw(raw: RawResponse) -> Self {
        let body = raw.body.unwrap_or_default();
        let json = serde_json::from_str(&body).ok();
        Self { status: raw.status, body, json }
    }

    /// Whether the status is in `200..=299`.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..=299).contains(&self.status)
    }

    /// Parsed JSON, or an empty object when the body was not JSON or was `null`.
    #[must_use]
    pub fn json_or_empty(&self) -> Value {
        match &self.json {
            None | Some(Value::Null) => Value::Object(serde_json::Map::new()),
            Some(json) => json.clone(),
        }
    }
}

/// The result of a call together with what the continuation or handler produced.
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    /// The raw classified response.
    pub result: ApiResult,
    /// Value returned by the success continuation or the error handler.
    pub outcome: T,
}
