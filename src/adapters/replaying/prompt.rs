//! Replaying adapter for the Prompt port.

use std::sync::Mutex;

use super::{extract_result, next_output};
use crate::cassette::format::ports;
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::prompt::Prompt;

/// Replays recorded answers from a cassette.
pub struct ReplayingPrompt {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingPrompt {
    /// Creates a new replaying prompt from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl Prompt for ReplayingPrompt {
    fn confirm(&self, _question: &str) -> Result<bool, Box<dyn std::error::Error + Send + Sync>> {
        let output = next_output(&self.replayer, ports::PROMPT, "confirm");
        extract_result(output, "prompt::confirm")
    }
}
