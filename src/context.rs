//! Service context bundling all port trait objects.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;

use crate::adapters::live::{LiveClock, LiveHttpTransport, TerminalPrompt};
use crate::adapters::recording::{RecordingClock, RecordingHttpTransport, RecordingPrompt};
use crate::adapters::replaying::{ReplayingClock, ReplayingHttpTransport, ReplayingPrompt};
use crate::api::request::ApiRequest;
use crate::cassette::config::CassetteConfig;
use crate::cassette::session::RecordingSession;
use crate::ports::clock::Clock;
use crate::ports::http::{HttpTransport, TransportFuture};
use crate::ports::prompt::Prompt;

/// Bundles all port trait objects into a single context.
///
/// Each field provides access to one external boundary. Constructors
/// wire up different adapter implementations (live, replaying, recording).
pub struct ServiceContext {
    /// Clock for today's date.
    pub clock: Box<dyn Clock>,
    /// Transport for Tempo REST calls.
    pub http: Box<dyn HttpTransport>,
    /// Yes/no questions to the operator.
    pub prompt: Box<dyn Prompt>,
}

impl ServiceContext {
    /// Creates a live context: system clock, `reqwest` transport, terminal prompt.
    #[must_use]
    pub fn live() -> Self {
        Self {
            clock: Box::new(LiveClock),
            http: Box::new(LiveHttpTransport::new()),
            prompt: Box::new(TerminalPrompt),
        }
    }

    /// Creates a live context whose interactions are recorded under `root`.
    ///
    /// The returned session must be finished after the context is dropped,
    /// which writes one cassette per port.
    ///
    /// # Errors
    ///
    /// Returns an error if the session directory cannot be created.
    pub fn recording_at(root: PathBuf) -> Result<(Self, RecordingSession), String> {
        let session = RecordingSession::new_in(&root)?;
        let ctx = Self {
            clock: Box::new(RecordingClock::new(Box::new(LiveClock), Arc::clone(&session.clock))),
            http: Box::new(RecordingHttpTransport::new(
                Box::new(LiveHttpTransport::new()),
                Arc::clone(&session.http),
            )),
            prompt: Box::new(RecordingPrompt::new(
                Box::new(TerminalPrompt),
                Arc::clone(&session.prompt),
            )),
        };
        Ok((ctx, session))
    }

    /// Creates a replaying context from a single cassette file.
    ///
    /// Each port gets its own cursor over the same cassette.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, String> {
        info!(cassette = %path.display(), "replaying port interactions");
        Self::replaying_from(&CassetteConfig::monolithic(path))
    }

    /// Creates a replaying context from per-port cassette files.
    ///
    /// Ports without a configured cassette panic with a clear message when
    /// called.
    ///
    /// # Errors
    ///
    /// Returns an error if any configured cassette file cannot be read or parsed.
    pub fn replaying_from(config: &CassetteConfig) -> Result<Self, String> {
        let replayers = config.load_all()?;
        Ok(Self {
            clock: match replayers.clock {
                Some(r) => Box::new(ReplayingClock::new(r)),
                None => Box::new(PanickingClock),
            },
            http: match replayers.http {
                Some(r) => Box::new(ReplayingHttpTransport::new(r)),
                None => Box::new(PanickingHttpTransport),
            },
            prompt: match replayers.prompt {
                Some(r) => Box::new(ReplayingPrompt::new(r)),
                None => Box::new(PanickingPrompt),
            },
        })
    }
}

struct PanickingClock;
impl Clock for PanickingClock {
    fn today(&self) -> NaiveDate {
        panic!("Clock port not configured in CassetteConfig: no cassette loaded for clock");
    }
}

struct PanickingHttpTransport;
impl HttpTransport for PanickingHttpTransport {
    fn send<'a>(&'a self, _request: &'a ApiRequest) -> TransportFuture<'a> {
        panic!("HttpTransport port not configured in CassetteConfig: no cassette loaded for http");
    }
}

struct PanickingPrompt;
impl Prompt for PanickingPrompt {
    fn confirm(&self, _question: &str) -> Result<bool, Box<dyn std::error::Error + Send + Sync>> {
        panic!("Prompt port not configured in CassetteConfig: no cassette loaded for prompt");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::format::{Cassette, Interaction};
    use chrono::Utc;
    use serde_json::json;

    fn write_cassette(path: &Path, interactions: Vec<Interaction>) {
        let cassette = Cassette {
            name: "test".into(),
            recorded_at: Utc::now(),
            tool_version: String::new(),
            interactions,
        };
        std::fs::write(path, serde_yaml::to_string(&cassette).unwrap()).unwrap();
    }

    fn interaction(seq: u64, port: &str, method: &str, output: serde_json::Value) -> Interaction {
        Interaction { seq, port: port.into(), method: method.into(), input: json!(null), output }
    }

    #[test]
    fn replaying_context_from_monolithic_cassette() {
        let dir = std::env::temp_dir().join("jira_tempo_ctx_test_mono");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("full.cassette.yaml");
        write_cassette(
            &path,
            vec![
                interaction(0, "prompt", "confirm", json!({"ok": true})),
                interaction(1, "clock", "today", json!("2024-06-15")),
            ],
        );

        let ctx = ServiceContext::replaying(&path).unwrap();
        assert!(ctx.prompt.confirm("today?").unwrap());
        assert_eq!(ctx.clock.today().to_string(), "2024-06-15");

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn replaying_from_per_port_cassettes() {
        let dir = std::env::temp_dir().join("jira_tempo_ctx_test_ports");
        std::fs::create_dir_all(&dir).unwrap();
        let clock_path = dir.join("clock.cassette.yaml");
        write_cassette(&clock_path, vec![interaction(0, "clock", "today", json!("2024-01-01"))]);

        let config = CassetteConfig { clock: Some(clock_path), ..CassetteConfig::default() };
        let ctx = ServiceContext::replaying_from(&config).unwrap();
        assert_eq!(ctx.clock.today().to_string(), "2024-01-01");

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    #[should_panic(expected = "not configured in CassetteConfig")]
    fn unspecified_port_panics_with_clear_message() {
        let ctx = ServiceContext::replaying_from(&CassetteConfig::default()).unwrap();
        let _ = ctx.prompt.confirm("today?");
    }

    #[test]
    fn missing_cassette_is_an_error() {
        let result = ServiceContext::replaying(Path::new("/nonexistent/tempo.cassette.yaml"));
        assert!(result.is_err());
    }
}
