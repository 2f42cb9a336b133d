//! Display formatting for dates.

use api::{LogTimestamp, PolicyLog};
use chrono::{DateTime, Local, TimeZone};

pub const INVALID_DATE: &str = "Invalid Date";

/// `"Mar 5, 2024"`
pub fn format_day<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format("%b %-d, %Y").to_string()
}

/// `"Mar 5, 2024, 03:45 PM"`
pub fn format_date_time<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format("%b %-d, %Y, %I:%M %p").to_string()
}

/// Date shown for a policy log: its own timestamp in local time, or today
/// when the log carries none.
pub fn format_log_date(log: &PolicyLog, now: DateTime<Local>) -> String {
    match &log.timestamp {
        LogTimestamp::Missing => format_day(&now),
        LogTimestamp::At(at) => format_date_time(&at.with_timezone(&Local)),
        LogTimestamp::Unparseable(_) => INVALID_DATE.to_string(),
    }
}
