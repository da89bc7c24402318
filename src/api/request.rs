//! Request construction: URL resolution, default headers, JSON body.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Result, TempoError};

/// HTTP methods accepted by the Tempo call helper.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    /// `GET`
    #[default]
    Get,
    /// `POST`
    Post,
    /// `PUT`
    Put,
    /// `DELETE`
    Delete,
    /// `HEAD`
    Head,
    /// `CONNECT`
    Connect,
    /// `PATCH`
    Patch,
}

impl HttpMethod {
    /// Upper-case wire name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
            Self::Head => "HEAD",
            Self::Connect => "CONNECT",
            Self::Patch => "PATCH",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = TempoError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            "DELETE" => Ok(Self::Delete),
            "HEAD" => Ok(Self::Head),
            "CONNECT" => Ok(Self::Connect),
            "PATCH" => Ok(Self::Patch),
            _ => Err(TempoError::config(format!("Unrecognised HTTP method: {s}"))),
        }
    }
}

/// A fully resolved request, ready for a transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiRequest {
    /// HTTP method.
    pub method: HttpMethod,
    /// Absolute URL including protocol.
    pub url: String,
    /// Headers sent with the request, ordered by name.
    pub headers: BTreeMap<String, String>,
    /// JSON text body, if any.
    pub body: Option<String>,
}

/// Caller-facing description of a call before resolution.
///
/// Mirrors the knobs the actions expose: either `server_url` + `path` or a
/// full `url`, an optional token, header overrides and a body.
#[derive(Debug, Clone, Default)]
pub struct RequestSpec {
    /// HTTP method.
    pub method: HttpMethod,
    /// Base URL such as `https://api.tempo.io`.
    pub server_url: Option<String>,
    /// Endpoint path appended to `server_url`.
    pub path: Option<String>,
    /// Complete URL, used when `server_url`/`path` are not both present.
    pub url: Option<String>,
    /// Tempo personal token.
    pub api_token: Option<String>,
    /// Header overrides, applied after the defaults.
    pub headers: BTreeMap<String, String>,
    /// Structured body, or a JSON string.
    pub body: Option<Value>,
}

impl RequestSpec {
    /// Creates a spec for `method` against `server_url` + `path`.
    pub fn new(method: HttpMethod, server_url: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method,
            server_url: Some(server_url.into()),
            path: Some(path.into()),
            ..Self::default()
        }
    }

    /// Sets the bearer token.
    #[must_use]
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.api_token = token;
        self
    }

    /// Sets the request body.
    #[must_use]
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Resolves the URL, headers and body into an [`ApiRequest`].
    ///
    /// # Errors
    ///
    /// Returns [`TempoError::Config`] when the URL cannot be resolved or the
    /// body is not valid JSON.
    pub fn build(&self) -> Result<ApiRequest> {
        let url =
            build_url(self.server_url.as_deref(), self.path.as_deref(), self.url.as_deref())?;
        let headers = build_headers(self.api_token.as_deref(), &self.headers);
        let body = build_body(self.body.as_ref())?;
        Ok(ApiRequest { method: self.method, url, headers, body })
    }
}

/// Resolves the target URL.
///
/// `base` and `path` win when both are present and are joined with exactly
/// one slash. Otherwise `full` is used.
///
/// # Errors
///
/// Returns [`TempoError::Config`] when no URL can be resolved or the chosen
/// URL has no protocol separator.
pub fn build_url(base: Option<&str>, path: Option<&str>, full: Option<&str>) -> Result<String> {
    let url = match (base, path, full) {
        (Some(base), Some(path), _) => {
            ensure_protocol(base, "server url")?;
            format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
        }
        (_, _, Some(full)) => {
            ensure_protocol(full, "url")?;
            full.to_string()
        }
        _ => {
            return Err(TempoError::config(
                "missing URL or base+path: provide a server url (e.g. https://api.tempo.io) and \
                 a path, or a full url",
            ))
        }
    };
    Ok(url)
}

fn ensure_protocol(url: &str, what: &str) -> Result<()> {
    if url.contains("//") {
        Ok(())
    } else {
        Err(TempoError::config(format!(
            "Please include the protocol in the {what}, e.g. https://api.tempo.io (got {url:?})"
        )))
    }
}

/// Default headers plus caller overrides. Overrides win on collision.
#[must_use]
pub fn build_headers(
    api_token: Option<&str>,
    overrides: &BTreeMap<String, String>,
) -> BTreeMap<String, String> {
    let mut headers = BTreeMap::new();
    headers.insert("Content-Type".to_string(), "application/json".to_string());
    if let Some(token) = api_token {
        headers.insert("Authorization".to_string(), format!("Bearer {token}"));
    }
    headers.extend(overrides.iter().map(|(k, v)| (k.clone(), v.clone())));
    headers
}

/// Serializes a request body to JSON text.
///
/// Objects and arrays are serialized. A string is sent as-is, but only if it
/// already parses as JSON.
///
/// # Errors
///
/// Returns [`TempoError::Config`] for a string that is not JSON or for a
/// bare scalar.
pub fn build_body(body: Option<&Value>) -> Result<Option<String>> {
    match body {
        None => Ok(None),
        Some(value @ (Value::Object(_) | Value::Array(_))) => Ok(Some(value.to_string())),
        Some(Value::String(text)) => {
            if serde_json::from_str::<Value>(text).is_ok() {
                Ok(Some(text.clone()))
            } else {
                Err(invalid_body())
            }
        }
        Some(_) => Err(invalid_body()),
    }
}

fn invalid_body() -> TempoError {
    TempoError::config("invalid JSON body: provide valid JSON, or an object as request body")
}
