//! `jira-tempo types` command.

use std::io::Write;

use super::report_failures;
use crate::api::client::ApiClient;
use crate::api::request::HttpMethod;
use crate::api::response::ApiResult;
use crate::config::TempoConfig;
use crate::context::ServiceContext;
use crate::error::Result;
use crate::worklog::model::{Page, WorklogType, ACCOUNTS_PATH};
use crate::worklog::report::format_worklog_types;

/// Execute the `types` command: print the accounts usable as work-log types.
///
/// # Errors
///
/// Returns an error for transport failures or an unexpected list shape.
pub async fn run(
    ctx: &ServiceContext,
    config: &TempoConfig,
    out: &mut dyn Write,
) -> Result<ApiResult> {
    let request = config.request(HttpMethod::Get, ACCOUNTS_PATH).build()?;
    let response = ApiClient::new(ctx.http.as_ref())
        .call(&request, &report_failures(), |json| {
            let page: Page<WorklogType> = serde_json::from_value(json.clone())?;
            Ok(Some(page.results))
        })
        .await?;

    if let Some(types) = &response.outcome {
        write!(out, "{}", format_worklog_types(types))?;
    }
    Ok(response.result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support;

    #[tokio::test]
    async fn prints_types_table() {
        let body = r#"{"results":[{"id":1,"key":"DEV","name":"Development","status":"OPEN"}]}"#;
        let (ctx, sent) = test_support::context(vec![], vec![(200, body)]);
        let mut out = Vec::new();
        run(&ctx, &TempoConfig::default(), &mut out).await.unwrap();

        assert_eq!(sent.lock().unwrap()[0].url, "https://api.tempo.io/core/3/accounts");
        let printed = String::from_utf8(out).unwrap();
        assert!(printed.contains("Tempo worklog type"));
        assert!(printed.contains("| DEV  | Development |"));
    }
}
