//! Read-only tabs: summary counts, customers, claims and policy logs.

use api::{PolicyLog, Record};
use chrono::Local;
use dioxus::prelude::*;

use crate::admin::Stats;
use crate::format::format_log_date;

/// Column names in first-seen order across all rows.
fn headers(rows: &[Record]) -> Vec<String> {
    let mut headers: Vec<String> = Vec::new();
    for (key, _) in rows.iter().flat_map(Record::columns) {
        if !headers.contains(&key) {
            headers.push(key);
        }
    }
    headers
}

fn cells(record: &Record, headers: &[String]) -> Vec<String> {
    let columns = record.columns();
    headers
        .iter()
        .map(|h| {
            columns
                .iter()
                .find(|(key, _)| key == h)
                .map(|(_, value)| value.clone())
                .unwrap_or_default()
        })
        .collect()
}

#[component]
pub fn StatsPanel(stats: Stats) -> Element {
    let cards = [
        ("Agents", stats.agents),
        ("Policies", stats.policies),
        ("Customers", stats.customers),
        ("Claims", stats.claims),
        ("Policy logs", stats.policy_logs),
    ];

    rsx! {
        div {
            class: "stats-grid",
            for (label, count) in cards {
                div {
                    class: "stat-card",
                    span { class: "stat-count", "{count}" }
                    span { class: "stat-label", "{label}" }
                }
            }
        }
    }
}

/// Generic table over opaque backend rows.
#[component]
pub fn RecordsTable(title: String, rows: Vec<Record>) -> Element {
    if rows.is_empty() {
        return rsx! {
            p { class: "empty-state", "No {title} found." }
        };
    }
    let headers = headers(&rows);

    rsx! {
        table {
            class: "data-table",
            thead {
                tr {
                    for header in headers.iter() {
                        th { "{header}" }
                    }
                }
            }
            tbody {
                for record in rows.iter() {
                    tr {
                        for cell in cells(record, &headers) {
                            td { "{cell}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn PolicyLogsPanel(logs: Vec<PolicyLog>) -> Element {
    if logs.is_empty() {
        return rsx! {
            p { class: "empty-state", "No policy logs found." }
        };
    }
    let now = Local::now();
    let records: Vec<Record> = logs.iter().map(|log| log.record.clone()).collect();
    let headers = headers(&records);

    rsx! {
        table {
            class: "data-table",
            thead {
                tr {
                    th { "Date" }
                    for header in headers.iter() {
                        th { "{header}" }
                    }
                }
            }
            tbody {
                for log in logs.iter() {
                    tr {
                        td { {format_log_date(log, now)} }
                        for cell in cells(&log.record, &headers) {
                            td { "{cell}" }
                        }
                    }
                }
            }
        }
    }
}
