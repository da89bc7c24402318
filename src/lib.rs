//! Core library entry for the `jira-tempo` CLI.
//!
//! Builds Tempo REST requests, dispatches them through a swappable HTTP
//! transport, routes failed statuses to per-status handlers and renders
//! work-log reports.

pub mod adapters;
pub mod api;
pub mod cassette;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod logging;
pub mod ports;
pub mod table;
pub mod worklog;

use clap::error::ErrorKind;
use clap::Parser;

pub use error::{Result, TempoError};

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> std::result::Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            return err.print().map_err(|e| e.to_string());
        }
        Err(err) => return Err(err.to_string()),
    };
    commands::dispatch(&cli)
}

#[cfg(test)]
mod tests {
    use super::run;

    #[test]
    fn run_errors_on_unknown_subcommand() {
        let result = run(["jira-tempo", "unknown"]);
        assert!(result.is_err());
    }

    #[test]
    fn help_and_version_are_not_errors() {
        assert!(run(["jira-tempo", "--help"]).is_ok());
        assert!(run(["jira-tempo", "--version"]).is_ok());
        assert!(run(["jira-tempo", "log", "--help"]).is_ok());
    }

    #[test]
    fn run_rejects_bad_url_before_dispatch() {
        let result = run(["jira-tempo", "api", "--url", "not-a-url"]);
        let err = result.unwrap_err();
        assert!(err.contains("not-a-url"), "{err}");
    }
}
