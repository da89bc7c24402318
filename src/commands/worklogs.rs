//! `jira-tempo worklogs` command.

use std::io::Write;

use super::report_failures;
use crate::api::client::ApiClient;
use crate::api::request::HttpMethod;
use crate::api::response::ApiResult;
use crate::config::TempoConfig;
use crate::context::ServiceContext;
use crate::error::Result;
use crate::worklog::model::{issue_worklogs_path, month_worklogs_path, Page, WorklogRecord};
use crate::worklog::report::format_worklog_report;

/// Execute the `worklogs` command.
///
/// Lists one issue's work-logs, or this month's when no ticket is given,
/// grouped by day.
///
/// # Errors
///
/// Returns an error for transport failures or an unexpected list shape.
pub async fn run(
    ctx: &ServiceContext,
    config: &TempoConfig,
    ticket: Option<&str>,
    out: &mut dyn Write,
) -> Result<ApiResult> {
    let path = match ticket {
        Some(ticket) => issue_worklogs_path(ticket)?,
        None => month_worklogs_path(ctx.clock.today()),
    };
    let request = config.request(HttpMethod::Get, &path).build()?;

    let response = ApiClient::new(ctx.http.as_ref())
        .call(&request, &report_failures(), |json| {
            let page: Page<WorklogRecord> = serde_json::from_value(json.clone())?;
            Ok(Some(page.results))
        })
        .await?;

    if let Some(records) = &response.outcome {
        write!(out, "{}", format_worklog_report(records))?;
    }
    Ok(response.result)
}
