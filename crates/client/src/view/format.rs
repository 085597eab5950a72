//! Timestamp formatting for display.

use std::fmt::Display;

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};

/// Shown for absent or unreadable timestamps.
pub const PLACEHOLDER: &str = "-";

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse a server timestamp.
///
/// Accepts RFC 3339, RFC 2822 (the backend's HTTP-date form, e.g.
/// `Tue, 01 Oct 2024 08:30:00 GMT`) and naive ISO date-times, which are
/// taken as UTC.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// `YYYY/MM/DD HH:MM` in the local time zone, or `-`.
#[must_use]
pub fn format_date(value: Option<&str>) -> String {
    format_date_in(value, &Local)
}

/// `YYYY/MM/DD HH:MM` in `tz`, or `-`.
#[must_use]
pub fn format_date_in<Tz>(value: Option<&str>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    value
        .and_then(parse_timestamp)
        .map_or_else(
            || PLACEHOLDER.to_string(),
            |dt| dt.with_timezone(tz).format("%Y/%m/%d %H:%M").to_string(),
        )
}

/// Elapsed time since `value` relative to now.
#[must_use]
pub fn format_relative_time(value: Option<&str>) -> String {
    format_relative_time_at(value, Utc::now())
}

/// Elapsed time between `value` and `now`, in the largest whole unit:
/// `N 天前`, `N 小時前`, `N 分鐘前`, else `剛剛`. Future times read as `剛剛`.
#[must_use]
pub fn format_relative_time_at(value: Option<&str>, now: DateTime<Utc>) -> String {
    let Some(then) = value.and_then(parse_timestamp) else {
        return PLACEHOLDER.to_string();
    };

    let seconds = (now - then).num_seconds();
    let minutes = seconds.div_euclid(60);
    let hours = minutes.div_euclid(60);
    let days = hours.div_euclid(24);

    if days > 0 {
        format!("{days} 天前")
    } else if hours > 0 {
        format!("{hours} 小時前")
    } else if minutes > 0 {
        format!("{minutes} 分鐘前")
    } else {
        "剛剛".to_string()
    }
}
