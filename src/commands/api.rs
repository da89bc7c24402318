//! `jira-tempo api` command: a raw call with no error handlers.

use std::collections::BTreeMap;
use std::io::Write;

use serde_json::Value;

use crate::api::client::ApiClient;
use crate::api::handlers::ErrorHandlers;
use crate::api::request::{HttpMethod, RequestSpec};
use crate::api::response::ApiResult;
use crate::config::TempoConfig;
use crate::context::ServiceContext;
use crate::error::{Result, TempoError};

/// Parameters of one `api` invocation.
#[derive(Debug, Clone)]
pub struct ApiArgs<'a> {
    /// HTTP method.
    pub method: HttpMethod,
    /// Path joined onto the server url.
    pub path: Option<&'a str>,
    /// Full URL, used without a path.
    pub url: Option<&'a str>,
    /// JSON body text.
    pub body: Option<&'a str>,
    /// `Name: value` header overrides.
    pub headers: &'a [String],
}

/// Splits `Name: value`.
///
/// # Errors
///
/// Returns [`TempoError::Config`] when there is no colon or the name is empty.
pub fn parse_header(header: &str) -> Result<(String, String)> {
    header
        .split_once(':')
        .map(|(name, value)| (name.trim(), value.trim()))
        .filter(|(name, _)| !name.is_empty())
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .ok_or_else(|| {
            TempoError::config(format!("invalid header {header:?}: expected Name: value"))
        })
}

/// Resolves the arguments into a request spec.
///
/// # Errors
///
/// Returns [`TempoError::Config`] for a malformed header.
pub fn request_spec(config: &TempoConfig, args: &ApiArgs<'_>) -> Result<RequestSpec> {
    let headers = args
        .headers
        .iter()
        .map(|header| parse_header(header))
        .collect::<Result<BTreeMap<_, _>>>()?;
    Ok(RequestSpec {
        method: args.method,
        server_url: Some(config.server_url.clone()),
        path: args.path.map(str::to_string),
        url: args.url.map(str::to_string),
        api_token: config.api_token.clone(),
        headers,
        body: args.body.map(|body| Value::String(body.to_string())),
    })
}

/// Execute the `api` command and print the status and body.
///
/// # Errors
///
/// Returns an error for a bad request, transport failures, or any non-2xx
/// status.
pub async fn run(
    ctx: &ServiceContext,
    config: &TempoConfig,
    args: &ApiArgs<'_>,
    out: &mut dyn Write,
) -> Result<ApiResult> {
    let request = request_spec(config, args)?.build()?;
    let response =
        ApiClient::new(ctx.http.as_ref()).call_json(&request, &ErrorHandlers::new()).await?;

    let result = response.result;
    writeln!(out, "{}", result.status)?;
    match &result.json {
        Some(json) => writeln!(out, "{}", serde_json::to_string_pretty(json)?)?,
        None if !result.body.is_empty() => writeln!(out, "{}", result.body)?,
        None => {}
    }
    Ok(result)
}
