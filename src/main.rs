//! Binary entrypoint for the `jira-tempo` CLI.

use std::process::ExitCode;

use jira_tempo::logging::{init_tracing, DEFAULT_LEVEL};

fn main() -> ExitCode {
    // Best-effort .env load; ignore if missing.
    let _ = dotenvy::dotenv();
    init_tracing(DEFAULT_LEVEL);

    // Recording and replay are handled in commands::dispatch via TEMPO_RECORD/TEMPO_REPLAY.
    match jira_tempo::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
