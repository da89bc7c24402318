//! Tempo work-logs: payloads, parameter parsing and reports.

pub mod model;
pub mod report;

pub use model::{
    issue_worklogs_path, month_worklogs_path, parse_attributes, parse_time_to_seconds,
    CreatedWorklog, IssueRef, NewWorklog, Page, WorklogRecord, WorklogType, ACCOUNTS_PATH,
    WORKLOGS_PATH,
};
pub use report::{format_worklog_report, format_worklog_types, group_worklogs, WorklogGroup};
