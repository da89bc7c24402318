//! Error model shared by request building, dispatch and the worklog actions.

use thiserror::Error;

/// Result alias used throughout the library.
pub type Result<T> = std::result::Result<T, TempoError>;

/// Failures raised while talking to Tempo.
///
/// `Config` is always raised before anything goes over the wire. `Api` is
/// only produced when no error handler claimed the status code.
#[derive(Debug, Error)]
pub enum TempoError {
    /// Bad URL, method, body or parameter, detected before dispatch.
    #[error("{0}")]
    Config(String),
    /// Connection, DNS or timeout failure from the transport.
    #[error("transport error: {0}")]
    Transport(String),
    /// Non-2xx response that no registered handler claimed.
    #[error("{service} responded with {status}\n---\n{body}")]
    Api {
        /// Name of the remote service.
        service: String,
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },
    /// A response payload did not have the expected shape.
    #[error("serialization error: {0}")]
    Serialization(String),
    /// Local file I/O failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl TempoError {
    /// Builds a [`TempoError::Config`].
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

impl From<serde_json::Error> for TempoError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_message_embeds_status_and_body() {
        let err = TempoError::Api {
            service: "Tempo".to_string(),
            status: 500,
            body: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "Tempo responded with 500\n---\nboom");
    }

    #[test]
    fn config_error_displays_message_verbatim() {
        let err = TempoError::config("missing URL or base+path");
        assert_eq!(err.to_string(), "missing URL or base+path");
    }
}
