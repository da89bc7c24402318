//! Generic Tempo API call helper: request building, dispatch, error routing.

pub mod client;
pub mod handlers;
pub mod request;
pub mod response;

pub use client::{ApiClient, SERVICE_NAME};
pub use handlers::{ErrorHandler, ErrorHandlers, HandlerKey};
pub use request::{build_body, build_headers, build_url, ApiRequest, HttpMethod, RequestSpec};
pub use response::{ApiResponse, ApiResult};
