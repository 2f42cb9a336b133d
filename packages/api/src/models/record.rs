//! Read-only collections: customers, claims and policy logs.
//!
//! Customers and claims are shown as-is, so they stay opaque [`Record`]s.
//! Policy logs get one piece of normalization: the timestamp, which the
//! backend has stored under nine different names, is resolved and parsed once
//! when the log is decoded.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::Deserialize;
use serde_json::Value;

use super::fields::first_present;

/// Candidate timestamp keys of a policy log, in lookup order.
pub const LOG_DATE_KEYS: [&str; 9] = [
    "createdDate",
    "date",
    "updatedDate",
    "created_at",
    "timestamp",
    "policyDate",
    "startDate",
    "endDate",
    "issueDate",
];

/// An opaque backend row.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Record(pub Value);

impl Record {
    /// Top-level scalar fields, for generic table rendering.
    pub fn columns(&self) -> Vec<(String, String)> {
        match &self.0 {
            Value::Object(map) => map
                .iter()
                .filter(|(_, v)| !v.is_object() && !v.is_array())
                .map(|(k, v)| {
                    let text = match v {
                        Value::String(s) => s.clone(),
                        Value::Null => String::new(),
                        other => other.to_string(),
                    };
                    (k.clone(), text)
                })
                .collect(),
            _ => Vec::new(),
        }
    }
}

/// Resolved timestamp of a policy log.
#[derive(Debug, Clone, PartialEq)]
pub enum LogTimestamp {
    /// None of the candidate keys held a value.
    Missing,
    At(DateTime<Utc>),
    /// A value was present but is not a date.
    Unparseable(String),
}

/// A policy log entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub struct PolicyLog {
    pub timestamp: LogTimestamp,
    pub record: Record,
}

impl From<Value> for PolicyLog {
    fn from(raw: Value) -> Self {
        let timestamp = match first_present(&raw, &LOG_DATE_KEYS) {
            None => LogTimestamp::Missing,
            Some(value) => parse_timestamp(value),
        };
        Self {
            timestamp,
            record: Record(raw),
        }
    }
}

/// Parse a backend timestamp: epoch milliseconds, RFC 3339/2822, ISO with a
/// colon-less offset, a local date-time without offset, or a date. ISO dates
/// are UTC midnight; slash and month-name dates are local midnight.
pub fn parse_timestamp(value: &Value) -> LogTimestamp {
    let parsed = match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .and_then(|ms| Utc.timestamp_millis_opt(ms).single()),
        Value::String(s) => parse_date_text(s.trim()),
        _ => None,
    };
    match parsed {
        Some(at) => LogTimestamp::At(at),
        None => LogTimestamp::Unparseable(value.to_string()),
    }
}

/// Date-only spellings read as local midnight.
const LOCAL_DATE_FORMATS: [&str; 3] = ["%Y/%m/%d", "%m/%d/%Y", "%b %d, %Y"];

fn parse_date_text(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(at) = DateTime::parse_from_rfc3339(text) {
        return Some(at.with_timezone(&Utc));
    }
    if let Ok(at) = DateTime::parse_from_rfc2822(text) {
        return Some(at.with_timezone(&Utc));
    }
    // Offset without a colon, e.g. `+0000`
    if let Ok(at) = DateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f%z") {
        return Some(at.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return local_to_utc(naive);
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
    }
    LOCAL_DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .and_then(local_to_utc)
}

fn local_to_utc(naive: NaiveDateTime) -> Option<DateTime<Utc>> {
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|at| at.with_timezone(&Utc))
}
