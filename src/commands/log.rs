//! `jira-tempo log` command.

use std::io::Write;

use chrono::NaiveDate;
use tracing::debug;

use super::{prompt_error, report_failures};
use crate::api::client::ApiClient;
use crate::api::request::HttpMethod;
use crate::api::response::ApiResult;
use crate::config::TempoConfig;
use crate::context::ServiceContext;
use crate::error::{Result, TempoError};
use crate::worklog::model::{
    parse_attributes, parse_time_to_seconds, CreatedWorklog, NewWorklog, WORKLOGS_PATH,
};

/// Asked when no date was given.
pub const TODAY_QUESTION: &str = "Are you logging time for \"today\"? ";

/// Parameters of one `log` invocation.
#[derive(Debug, Clone)]
pub struct LogArgs<'a> {
    /// Issue key.
    pub ticket: &'a str,
    /// Hours, optionally suffixed with `h`.
    pub time: &'a str,
    /// Day of the work; asked for when absent.
    pub date: Option<NaiveDate>,
    /// Author account id.
    pub account_id: &'a str,
    /// `key=value` attribute pairs.
    pub attributes: &'a [String],
    /// Description; a default naming the ticket is used when absent.
    pub description: Option<&'a str>,
}

/// Uses `date` if given, otherwise asks whether the work was done today.
///
/// # Errors
///
/// Returns [`TempoError::Config`] when the operator declines or the answer
/// cannot be read.
pub fn resolve_date(ctx: &ServiceContext, date: Option<NaiveDate>) -> Result<NaiveDate> {
    if let Some(date) = date {
        return Ok(date);
    }
    if ctx.prompt.confirm(TODAY_QUESTION).map_err(prompt_error)? {
        Ok(ctx.clock.today())
    } else {
        Err(TempoError::config("date is required"))
    }
}

/// Builds the work-log payload from the command arguments.
///
/// # Errors
///
/// Returns [`TempoError::Config`] for an unparsable time or attribute, or
/// when no date is available.
pub fn build_worklog(ctx: &ServiceContext, args: &LogArgs<'_>) -> Result<NewWorklog> {
    let seconds = parse_time_to_seconds(args.time)?;
    let attributes = parse_attributes(args.attributes)?;
    let date = resolve_date(ctx, args.date)?;
    let description = args
        .description
        .map_or_else(|| format!("Spent time on ticket {}", args.ticket), str::to_string);

    Ok(NewWorklog::new(args.ticket, seconds, date, args.account_id)
        .with_description(Some(description))
        .with_attributes(attributes))
}

/// Execute the `log` command.
///
/// Posts the work-log and prints a confirmation line. A failed status is
/// logged and yields no output.
///
/// # Errors
///
/// Returns an error for invalid arguments, transport failures or an
/// unreadable created work-log.
pub async fn run(
    ctx: &ServiceContext,
    config: &TempoConfig,
    args: &LogArgs<'_>,
    out: &mut dyn Write,
) -> Result<ApiResult> {
    let payload = build_worklog(ctx, args)?;
    debug!(ticket = args.ticket, seconds = payload.time_spent_seconds, "creating work-log");
    let request = config
        .request(HttpMethod::Post, WORKLOGS_PATH)
        .with_body(serde_json::to_value(&payload)?)
        .build()?;

    let response = ApiClient::new(ctx.http.as_ref())
        .call(&request, &report_failures(), |json| {
            Ok(Some(serde_json::from_value::<CreatedWorklog>(json.clone())?))
        })
        .await?;

    if let Some(created) = &response.outcome {
        writeln!(out, "{}", created.summary())?;
    }
    Ok(response.result)
}
