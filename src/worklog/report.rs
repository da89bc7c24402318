//! Work-log reports: per-day groups with hour totals.

use crate::table::Table;
use crate::worklog::model::{WorklogRecord, WorklogType};

/// Headings of the work-log report.
pub const REPORT_HEADINGS: [&str; 4] = ["Tempo Id", "Ticket", "Date|Day", "Time(Hours)"];

/// Work-logs sharing one `date|weekday` key.
#[derive(Debug, Clone, PartialEq)]
pub struct WorklogGroup {
    /// `YYYY-MM-DD|Www` key shared by every row.
    pub date_key: String,
    /// `[id, ticket, date key, hours label]` rows in display order.
    pub rows: Vec<[String; 4]>,
    /// Sum of the row hours.
    pub total_hours: f64,
}

fn report_row(record: &WorklogRecord) -> [String; 4] {
    [
        record.tempo_worklog_id.to_string(),
        record.issue.key.clone(),
        format!("{}|{}", record.start_date, record.start_date.format("%a")),
        format!("{}h", record.hours()),
    ]
}

fn hours_from_label(label: &str) -> f64 {
    label.trim_end_matches('h').parse().unwrap_or(0.0)
}

/// Groups work-logs by day, most recent day first.
///
/// Records are stably sorted by date, the whole sequence is reversed and then
/// grouped, so each group keeps the reversed row order and groups appear in
/// the order their key is first seen.
#[must_use]
pub fn group_worklogs(records: &[WorklogRecord]) -> Vec<WorklogGroup> {
    let mut sorted: Vec<&WorklogRecord> = records.iter().collect();
    sorted.sort_by_key(|record| record.start_date);

    let mut groups: Vec<WorklogGroup> = Vec::new();
    for row in sorted.into_iter().map(report_row).rev() {
        match groups.iter_mut().find(|group| group.date_key == row[2]) {
            Some(group) => group.rows.push(row),
            None => groups.push(WorklogGroup {
                date_key: row[2].clone(),
                rows: vec![row],
                total_hours: 0.0,
            }),
        }
    }

    for group in &mut groups {
        group.total_hours = group.rows.iter().fold(0.0, |sum, row| sum + hours_from_label(&row[3]));
    }
    groups
}

/// Renders the "Tempo logs" table with a totals row after each day.
#[must_use]
pub fn format_worklog_report(records: &[WorklogRecord]) -> Table {
    let mut table = Table::new("Tempo logs", REPORT_HEADINGS);
    table.border_bottom = false;
    for group in group_worklogs(records) {
        for row in group.rows {
            table.add_row(row);
        }
        table.add_separator();
        table.add_row(["", "", "", &format!("Total: {}h", group.total_hours)]);
        table.add_separator();
    }
    table
}

/// Renders the accounts available as work-log types.
#[must_use]
pub fn format_worklog_types(types: &[WorklogType]) -> Table {
    let mut table = Table::new("Tempo worklog type", ["Type", "Details"]);
    for worklog_type in types {
        table.add_row([worklog_type.key.as_str(), worklog_type.name.as_str()]);
    }
    table
}
