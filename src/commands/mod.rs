//! Command dispatch and handlers.

pub mod api;
pub mod log;
pub mod types;
pub mod worklogs;

use std::io::{self, Write};
use std::path::Path;

use tracing::{debug, error, info};

use crate::api::handlers::ErrorHandlers;
use crate::api::response::ApiResult;
use crate::cassette::session::RecordingSession;
use crate::cli::{Cli, Command};
use crate::config::{PortMode, TempoConfig};
use crate::context::ServiceContext;
use crate::error::{Result, TempoError};

/// Dispatch a parsed command to its handler.
///
/// When `TEMPO_REPLAY` names a cassette file, every port is served from it.
/// Otherwise, when `TEMPO_RECORD` is set to a directory path, all port
/// interactions are recorded to per-port cassette files in that directory.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(cli: &Cli) -> std::result::Result<(), String> {
    let config = cli.config();
    match PortMode::from_env() {
        PortMode::Live => dispatch_with_context(&cli.command, &config, &ServiceContext::live()),
        PortMode::Replay(path) => {
            let ctx = ServiceContext::replaying(&path)?;
            dispatch_with_context(&cli.command, &config, &ctx)
        }
        PortMode::Record(root) => {
            let (ctx, session) = ServiceContext::recording_at(root)?;
            let result = dispatch_with_context(&cli.command, &config, &ctx);

            // Finish recording after command completes (even on error).
            // The context holds recorder references until dropped.
            drop(ctx);
            finish_recording(session)?;
            result
        }
    }
}

/// Dispatch a command with the given service context, printing to stdout.
///
/// # Errors
///
/// Returns an error string if the command fails or its result cannot be
/// written to the result file.
pub fn dispatch_with_context(
    command: &Command,
    config: &TempoConfig,
    ctx: &ServiceContext,
) -> std::result::Result<(), String> {
    let mut stdout = io::stdout().lock();
    execute(command, config, ctx, &mut stdout).map_err(|err| err.to_string())
}

/// Run one command to completion on a current-thread runtime.
///
/// # Errors
///
/// Returns the command's error, or an I/O error from writing output.
pub fn execute(
    command: &Command,
    config: &TempoConfig,
    ctx: &ServiceContext,
    out: &mut dyn Write,
) -> Result<()> {
    debug!(?command, server_url = %config.server_url, "dispatching command");
    let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;

    let result = match command {
        Command::Log { ticket, time, date, account_id, attributes, description } => {
            let args = log::LogArgs {
                ticket,
                time,
                date: *date,
                account_id,
                attributes,
                description: description.as_deref(),
            };
            runtime.block_on(log::run(ctx, config, &args, out))?
        }
        Command::Worklogs { ticket } => {
            runtime.block_on(worklogs::run(ctx, config, ticket.as_deref(), out))?
        }
        Command::Types => runtime.block_on(types::run(ctx, config, out))?,
        Command::Api { path, method, url, body, headers } => {
            let args = api::ApiArgs {
                method: *method,
                path: path.as_deref(),
                url: url.as_deref(),
                body: body.as_deref(),
                headers,
            };
            runtime.block_on(api::run(ctx, config, &args, out))?
        }
    };

    if let Some(path) = &config.result_file {
        publish_result(path, &result)?;
    }
    Ok(())
}

/// Writes `{status, body, json}` for scripts that consume the last result.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn publish_result(path: &Path, result: &ApiResult) -> Result<()> {
    let contents = serde_json::to_string_pretty(result)?;
    std::fs::write(path, contents)?;
    debug!(path = %path.display(), status = result.status, "wrote result file");
    Ok(())
}

/// Error handlers for the work-log commands: any failed status is reported
/// and the command ends without an outcome.
pub(crate) fn report_failures<'a, T: 'a>() -> ErrorHandlers<'a, Option<T>> {
    ErrorHandlers::new().otherwise(|result: &ApiResult| {
        error!(status = result.status, body = %result.body, "Tempo request failed");
        Ok(None)
    })
}

/// Maps a prompt failure into the error model.
pub(crate) fn prompt_error(err: impl std::fmt::Display) -> TempoError {
    TempoError::config(format!("could not read answer: {err}"))
}

/// Finish a recording session and report the output directory.
fn finish_recording(session: RecordingSession) -> std::result::Result<(), String> {
    let output_dir = session.finish()?;
    info!(dir = %output_dir.display(), "recording saved");
    eprintln!("Recording saved to: {}", output_dir.display());
    Ok(())
}
