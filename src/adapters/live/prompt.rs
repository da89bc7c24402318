//! Live confirmation prompt on the controlling terminal.

use std::io::{self, BufRead, IsTerminal, Write};

use tracing::warn;

use crate::ports::prompt::Prompt;

/// Asks on stderr and reads the answer from stdin.
///
/// When stdin is not a terminal (CI, pipes) the answer is "no".
pub struct TerminalPrompt;

/// Interprets a typed answer; `None` means ask again.
fn parse_answer(answer: &str) -> Option<bool> {
    match answer.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

impl Prompt for TerminalPrompt {
    fn confirm(&self, question: &str) -> Result<bool, Box<dyn std::error::Error + Send + Sync>> {
        let stdin = io::stdin();
        if !stdin.is_terminal() {
            warn!(question, "stdin is not a terminal, answering no");
            return Ok(false);
        }

        let mut stderr = io::stderr();
        loop {
            write!(stderr, "{question}(y/n) ")?;
            stderr.flush()?;
            let mut line = String::new();
            if stdin.lock().read_line(&mut line)? == 0 {
                return Ok(false);
            }
            if let Some(answer) = parse_answer(&line) {
                return Ok(answer);
            }
        }
    }
}
