use std::fmt::Display;

use chrono::{DateTime, Local, TimeZone, Utc};

/// Short age of a check-in: "12m ago" under an hour, "3h ago" under a day,
/// otherwise the local calendar date as M/D/YYYY.
pub fn format_relative(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    format_relative_in(timestamp, now, &Local)
}

/// Local date and time of a check-in, for the patterns timeline.
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    format_timestamp_in(timestamp, &Local)
}

pub fn format_relative_in<Tz>(timestamp: DateTime<Utc>, now: DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let minutes = (now - timestamp).num_minutes();

    if minutes < 60 {
        format!("{minutes}m ago")
    } else if minutes < 1440 {
        format!("{}h ago", minutes / 60)
    } else {
        timestamp.with_timezone(tz).format("%-m/%-d/%Y").to_string()
    }
}

pub fn format_timestamp_in<Tz>(timestamp: DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    timestamp.with_timezone(tz).format("%-m/%-d/%Y %H:%M").to_string()
}
