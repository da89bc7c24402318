//! Tempo work-log payloads and parameter parsing.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Result, TempoError};

/// Endpoint for creating and listing work-logs.
pub const WORKLOGS_PATH: &str = "/core/3/worklogs";
/// Endpoint listing the accounts used as work-log types.
pub const ACCOUNTS_PATH: &str = "/core/3/accounts";
/// Upper bound on work-logs fetched for a month listing.
pub const MONTH_LIMIT: u32 = 1000;

const SECONDS_PER_HOUR: f64 = 3600.0;

/// Reference to a JIRA issue inside a Tempo payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueRef {
    /// Issue key, e.g. `PRJ-1000`.
    pub key: String,
}

/// A work-log as returned by `GET /core/3/worklogs`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorklogRecord {
    /// Tempo's id for the work-log.
    pub tempo_worklog_id: u64,
    /// Issue the time was logged against.
    pub issue: IssueRef,
    /// Day the work happened.
    pub start_date: NaiveDate,
    /// Time spent, in seconds.
    pub time_spent_seconds: u32,
}

impl WorklogRecord {
    /// Time spent in hours.
    #[must_use]
    pub fn hours(&self) -> f64 {
        f64::from(self.time_spent_seconds) / SECONDS_PER_HOUR
    }
}

/// A Tempo account, which the plugin presents as a work-log type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorklogType {
    /// Account key.
    pub key: String,
    /// Human-readable account name.
    pub name: String,
}

/// Envelope of Tempo list endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct Page<T> {
    /// Items on this page.
    pub results: Vec<T>,
}

/// Body of `POST /core/3/worklogs`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWorklog {
    /// Issue key to log against.
    pub issue_key: String,
    /// Time spent, in seconds.
    pub time_spent_seconds: u32,
    /// Billable time, in seconds.
    pub billable_seconds: u32,
    /// Day the work happened.
    pub start_date: NaiveDate,
    /// Always midnight; Tempo requires a start time.
    pub start_time: String,
    /// Optional free-text description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Atlassian account id of the author.
    pub author_account_id: String,
    /// Work attributes, sent as a single free-form map.
    pub attributes: Vec<Map<String, Value>>,
}

impl NewWorklog {
    /// Builds a payload where billable time equals time spent.
    #[must_use]
    pub fn new(
        issue_key: impl Into<String>,
        seconds: u32,
        start_date: NaiveDate,
        author_account_id: impl Into<String>,
    ) -> Self {
        Self {
            issue_key: issue_key.into(),
            time_spent_seconds: seconds,
            billable_seconds: seconds,
            start_date,
            start_time: "00:00:00".to_string(),
            description: None,
            author_account_id: author_account_id.into(),
            attributes: Vec::new(),
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Sets the attributes map. An empty map sends no attributes.
    #[must_use]
    pub fn with_attributes(mut self, attributes: Map<String, Value>) -> Self {
        self.attributes = if attributes.is_empty() { Vec::new() } else { vec![attributes] };
        self
    }
}

/// The fields read back from a created work-log.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedWorklog {
    /// Time spent, in seconds.
    pub time_spent_seconds: u32,
    /// Issue the time was logged against.
    pub issue: IssueRef,
    /// Day the work happened.
    pub start_date: NaiveDate,
}

impl CreatedWorklog {
    /// One-line confirmation for the operator, with whole hours.
    #[must_use]
    pub fn summary(&self) -> String {
        let hours = self.time_spent_seconds / 3600;
        format!(
            "Successfully logged \"{}|{hours}h time\" in \"{}\" for \"{}\" date",
            self.time_spent_seconds, self.issue.key, self.start_date
        )
    }
}

/// Converts an hours string such as `"2"`, `"2h"` or `"1.5h"` to seconds.
///
/// # Errors
///
/// Returns [`TempoError::Config`] when the value is not a non-negative number
/// of hours.
pub fn parse_time_to_seconds(time: &str) -> Result<u32> {
    let trimmed = time.trim();
    let number = trimmed
        .strip_suffix('h')
        .or_else(|| trimmed.strip_suffix('H'))
        .unwrap_or(trimmed)
        .trim();
    let hours: f64 = number.parse().map_err(|_| {
        TempoError::config(format!("invalid time {time:?}: expected hours like 2 or 1.5h"))
    })?;
    let seconds = (hours * SECONDS_PER_HOUR).round();
    if !seconds.is_finite() || seconds < 0.0 || seconds > f64::from(u32::MAX) {
        return Err(TempoError::config(format!("invalid time {time:?}: out of range")));
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let seconds = seconds as u32;
    Ok(seconds)
}

/// Parses `key=value` pairs into an attributes map.
///
/// # Errors
///
/// Returns [`TempoError::Config`] for a pair without `=` or with an empty key.
pub fn parse_attributes<S: AsRef<str>>(pairs: &[S]) -> Result<Map<String, Value>> {
    let mut attributes = Map::new();
    for pair in pairs {
        let pair = pair.as_ref();
        let (key, value) = pair
            .split_once('=')
            .filter(|(key, _)| !key.trim().is_empty())
            .ok_or_else(|| {
                TempoError::config(format!("invalid attribute {pair:?}: expected key=value"))
            })?;
        attributes.insert(key.trim().to_string(), Value::String(value.trim().to_string()));
    }
    Ok(attributes)
}

/// Path listing one issue's work-logs.
///
/// # Errors
///
/// Returns [`TempoError::Config`] unless the key is non-empty ASCII letters,
/// digits, `-` or `_`, so it can go into the query string as-is.
pub fn issue_worklogs_path(ticket: &str) -> Result<String> {
    let valid = !ticket.is_empty()
        && ticket.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if !valid {
        return Err(TempoError::config(format!(
            "invalid issue key {ticket:?}: expected letters, digits and dashes like PRJ-1000"
        )));
    }
    Ok(format!("{WORKLOGS_PATH}?issue={ticket}"))
}

/// Path listing this month's work-logs, from the first of the month to `today`.
#[must_use]
pub fn month_worklogs_path(today: NaiveDate) -> String {
    let first = today.with_day(1).unwrap_or(today);
    format!("{WORKLOGS_PATH}?from={first}&to={today}&limit={MONTH_LIMIT}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn time_strings_convert_to_seconds() {
        assert_eq!(parse_time_to_seconds("2").unwrap(), 7200);
        assert_eq!(parse_time_to_seconds("2h").unwrap(), 7200);
        assert_eq!(parse_time_to_seconds(" 1.5h ").unwrap(), 5400);
        assert_eq!(parse_time_to_seconds("0.25H").unwrap(), 900);
        assert_eq!(parse_time_to_seconds("0").unwrap(), 0);
    }

    #[test]
    fn bad_time_strings_are_config_errors() {
        for bad in ["", "h", "two", "-1", "2hh", "NaN"] {
            assert!(
                matches!(parse_time_to_seconds(bad), Err(TempoError::Config(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn attributes_parse_from_pairs() {
        let attrs = parse_attributes(&["_Account_=DEV", "_Type_ = Meeting"]).unwrap();
        assert_eq!(Value::Object(attrs), json!({"_Account_": "DEV", "_Type_": "Meeting"}));
        assert!(parse_attributes(&["novalue"]).is_err());
        assert!(parse_attributes(&["=x"]).is_err());
    }

    #[test]
    fn new_worklog_serializes_tempo_shape() {
        let mut attrs = Map::new();
        attrs.insert("_Account_".to_string(), json!("DEV"));
        let payload = NewWorklog::new("PRJ-1000", 7200, date("2024-01-02"), "acc-1")
            .with_description(Some("pairing".to_string()))
            .with_attributes(attrs);

        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "issueKey": "PRJ-1000",
                "timeSpentSeconds": 7200,
                "billableSeconds": 7200,
                "startDate": "2024-01-02",
                "startTime": "00:00:00",
                "description": "pairing",
                "authorAccountId": "acc-1",
                "attributes": [{"_Account_": "DEV"}]
            })
        );
    }

    #[test]
    fn new_worklog_omits_description_and_empty_attributes() {
        let payload = NewWorklog::new("PRJ-1", 60, date("2024-01-02"), "acc")
            .with_attributes(Map::new());
        let value = serde_json::to_value(&payload).unwrap();
        assert!(value.get("description").is_none());
        assert_eq!(value["attributes"], json!([]));
    }

    #[test]
    fn worklog_record_reads_tempo_fields() {
        let record: WorklogRecord = serde_json::from_value(json!({
            "tempoWorklogId": 42,
            "issue": {"key": "PRJ-9", "self": "https://jira/issue/9"},
            "startDate": "2024-03-05",
            "timeSpentSeconds": 5400,
            "description": "ignored"
        }))
        .unwrap();
        assert_eq!(record.tempo_worklog_id, 42);
        assert_eq!(record.issue.key, "PRJ-9");
        assert!((record.hours() - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn created_worklog_summary() {
        let created: CreatedWorklog = serde_json::from_value(json!({
            "timeSpentSeconds": 7200,
            "issue": {"key": "PRJ-1000"},
            "startDate": "2024-01-02"
        }))
        .unwrap();
        assert_eq!(
            created.summary(),
            "Successfully logged \"7200|2h time\" in \"PRJ-1000\" for \"2024-01-02\" date"
        );
    }

    #[test]
    fn created_worklog_summary_truncates_to_whole_hours() {
        let created = CreatedWorklog {
            time_spent_seconds: 5400,
            issue: IssueRef { key: "PRJ-1".to_string() },
            start_date: date("2024-01-02"),
        };
        assert_eq!(
            created.summary(),
            "Successfully logged \"5400|1h time\" in \"PRJ-1\" for \"2024-01-02\" date"
        );
    }

    #[test]
    fn issue_keys_that_would_alter_the_query_are_rejected() {
        for bad in ["", "PRJ-1&from=2020-01-01", "PRJ 1", "PRJ-1#x", "PRJ/1"] {
            assert!(
                matches!(issue_worklogs_path(bad), Err(TempoError::Config(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn worklogs_path_for_ticket_or_month() {
        assert_eq!(issue_worklogs_path("PRJ-1000").unwrap(), "/core/3/worklogs?issue=PRJ-1000");
        assert_eq!(
            month_worklogs_path(date("2024-05-17")),
            "/core/3/worklogs?from=2024-05-01&to=2024-05-17&limit=1000"
        );
        assert_eq!(
            month_worklogs_path(date("2024-02-01")),
            "/core/3/worklogs?from=2024-02-01&to=2024-02-01&limit=1000"
        );
    }
}
