//! Resolved runtime settings.

use std::path::PathBuf;

use crate::api::request::{HttpMethod, RequestSpec};

/// Tempo cloud API root used when no server url is configured.
pub const DEFAULT_SERVER_URL: &str = "https://api.tempo.io";

/// Environment variables read by the CLI.
pub mod env_vars {
    /// Bearer token for the Tempo API.
    pub const API_TOKEN: &str = "TEMPO_API_TOKEN";
    /// Atlassian account id used as work-log author.
    pub const ACCOUNT_ID: &str = "TEMPO_ACCOUNT_ID";
    /// Base URL of the Tempo API.
    pub const SERVER_URL: &str = "TEMPO_SERVER_URL";
    /// Directory to record port interactions into.
    pub const RECORD: &str = "TEMPO_RECORD";
    /// Cassette file to replay every port from.
    pub const REPLAY: &str = "TEMPO_REPLAY";
}

/// Which adapters back the service context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PortMode {
    /// Real clock, network and terminal.
    Live,
    /// Live adapters, recorded into a timestamped directory under the path.
    Record(PathBuf),
    /// Everything served from one cassette file.
    Replay(PathBuf),
}

impl PortMode {
    /// Picks the mode from the replay and record settings. Replay wins.
    #[must_use]
    pub fn from_vars(replay: Option<String>, record: Option<String>) -> Self {
        let non_empty = |value: Option<String>| value.filter(|v| !v.trim().is_empty());
        match (non_empty(replay), non_empty(record)) {
            (Some(path), _) => Self::Replay(PathBuf::from(path)),
            (None, Some(dir)) => Self::Record(PathBuf::from(dir)),
            (None, None) => Self::Live,
        }
    }

    /// Reads `TEMPO_REPLAY` and `TEMPO_RECORD`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var(env_vars::REPLAY).ok(),
            std::env::var(env_vars::RECORD).ok(),
        )
    }
}

/// Settings shared by every command.
#[derive(Debug, Clone)]
pub struct TempoConfig {
    /// Base URL requests are joined onto.
    pub server_url: String,
    /// Bearer token; requests go out unauthenticated without one.
    pub api_token: Option<String>,
    /// Where to write the last `{status, body, json}` result.
    pub result_file: Option<PathBuf>,
}

impl TempoConfig {
    /// Collects settings, falling back to [`DEFAULT_SERVER_URL`].
    #[must_use]
    pub fn new(server_url: Option<String>, api_token: Option<String>) -> Self {
        Self {
            server_url: server_url
                .filter(|url| !url.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string()),
            api_token: api_token.filter(|token| !token.is_empty()),
            result_file: None,
        }
    }

    /// Sets the result file.
    #[must_use]
    pub fn with_result_file(mut self, path: Option<PathBuf>) -> Self {
        self.result_file = path;
        self
    }

    /// A request against this server, carrying the token.
    #[must_use]
    pub fn request(&self, method: HttpMethod, path: &str) -> RequestSpec {
        RequestSpec::new(method, self.server_url.as_str(), path).with_token(self.api_token.clone())
    }
}

impl Default for TempoConfig {
    fn default() -> Self {
        Self::new(None, None)
    }
}
