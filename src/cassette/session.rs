//! Recording session managing per-port cassette recorders.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use chrono::Utc;
use tracing::info;

use super::format::ports;
use super::recorder::CassetteRecorder;

/// Shared handle to one port's recorder.
pub type SharedRecorder = Arc<Mutex<CassetteRecorder>>;

/// Manages per-port `CassetteRecorder` instances for a recording session.
///
/// Each port gets its own recorder writing to a separate cassette file in a
/// timestamped directory under the requested root.
pub struct RecordingSession {
    /// Recorder for clock interactions.
    pub clock: SharedRecorder,
    /// Recorder for HTTP interactions.
    pub http: SharedRecorder,
    /// Recorder for prompt interactions.
    pub prompt: SharedRecorder,
    output_dir: PathBuf,
}

impl RecordingSession {
    /// Create a session writing to `<root>/<timestamp>/`.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory already exists or cannot be created.
    pub fn new_in(root: &Path) -> Result<Self, String> {
        let timestamp = Utc::now().format("%Y-%m-%dT%H-%M-%S").to_string();
        let output_dir = root.join(&timestamp);

        if output_dir.exists() {
            return Err(format!("Cassette directory already exists: {}", output_dir.display()));
        }
        std::fs::create_dir_all(&output_dir)
            .map_err(|e| format!("Failed to create cassette directory: {e}"))?;
        info!(dir = %output_dir.display(), "recording port interactions");

        let make_recorder = |port: &str| -> SharedRecorder {
            let path = output_dir.join(format!("{port}.cassette.yaml"));
            Arc::new(Mutex::new(CassetteRecorder::new(path, format!("{timestamp}-{port}"))))
        };

        Ok(Self {
            clock: make_recorder(ports::CLOCK),
            http: make_recorder(ports::HTTP),
            prompt: make_recorder(ports::PROMPT),
            output_dir,
        })
    }

    /// Directory the cassettes are written to.
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Finish all recorders and write cassette files to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if an adapter still holds a recorder or a cassette
    /// file cannot be written.
    pub fn finish(self) -> Result<PathBuf, String> {
        fn finish_one(recorder: SharedRecorder, port: &str) -> Result<(), String> {
            let recorder = Arc::try_unwrap(recorder)
                .map_err(|_| format!("Recording adapter for {port} still has references"))?
                .into_inner()
                .map_err(|e| format!("Recorder lock for {port} poisoned: {e}"))?;
            recorder.finish().map_err(|e| format!("Failed to write {port} cassette: {e}"))?;
            Ok(())
        }

        finish_one(self.clock, ports::CLOCK)?;
        finish_one(self.http, ports::HTTP)?;
        finish_one(self.prompt, ports::PROMPT)?;
        Ok(self.output_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_writes_one_cassette_per_port() {
        let root = std::env::temp_dir().join("jira_tempo_session_test");
        let _ = std::fs::remove_dir_all(&root);

        let session = RecordingSession::new_in(&root).unwrap();
        let dir = session.output_dir().to_path_buf();
        assert!(dir.exists());
        session.http.lock().unwrap().record(
            "http",
            "send",
            serde_json::json!({}),
            serde_json::json!({}),
        );

        let finished = session.finish().unwrap();
        assert_eq!(finished, dir);
        for port in ["clock", "http", "prompt"] {
            assert!(dir.join(format!("{port}.cassette.yaml")).exists(), "{port} cassette missing");
        }

        let _ = std::fs::remove_dir_all(&root);
    }

    #[test]
    fn finish_fails_while_an_adapter_holds_a_recorder() {
        let root = std::env::temp_dir().join("jira_tempo_session_held_test");
        let _ = std::fs::remove_dir_all(&root);

        let session = RecordingSession::new_in(&root).unwrap();
        let held = Arc::clone(&session.http);
        let err = session.finish().unwrap_err();
        assert!(err.contains("still has references"));
        drop(held);

        let _ = std::fs::remove_dir_all(&root);
    }
}
