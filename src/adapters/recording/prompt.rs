//! Recording adapter for the `Prompt` port.

use serde::Serialize;

use super::record_result;
use crate::cassette::format::ports;
use crate::cassette::session::SharedRecorder;
use crate::ports::Prompt;

/// Records answers while delegating to an inner prompt.
pub struct RecordingPrompt {
    inner: Box<dyn Prompt>,
    recorder: SharedRecorder,
}

impl RecordingPrompt {
    /// Creates a new recording prompt wrapping the given implementation.
    pub fn new(inner: Box<dyn Prompt>, recorder: SharedRecorder) -> Self {
        Self { inner, recorder }
    }
}

#[derive(Serialize)]
struct QuestionInput<'a> {
    question: &'a str,
}

impl Prompt for RecordingPrompt {
    fn confirm(&self, question: &str) -> Result<bool, Box<dyn std::error::Error + Send + Sync>> {
        let result = self.inner.confirm(question);
        let input = QuestionInput { question };
        record_result(&self.recorder, ports::PROMPT, "confirm", &input, &result);
        result
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::cassette::recorder::CassetteRecorder;

    struct AlwaysYes;

    impl Prompt for AlwaysYes {
        fn confirm(
            &self,
            _question: &str,
        ) -> Result<bool, Box<dyn std::error::Error + Send + Sync>> {
            Ok(true)
        }
    }

    #[test]
    fn records_question_and_answer() {
        let dir = std::env::temp_dir().join("jira_tempo_rec_prompt_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("prompt.cassette.yaml");

        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(&path, "test")));
        {
            let prompt = RecordingPrompt::new(Box::new(AlwaysYes), Arc::clone(&recorder));
            assert!(prompt.confirm("Are you logging time for \"today\"? ").unwrap());
        }

        let recorder = Arc::try_unwrap(recorder).unwrap().into_inner().unwrap();
        recorder.finish().unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("confirm"));
        assert!(content.contains("logging time"));
        assert!(content.contains("ok: true"));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
