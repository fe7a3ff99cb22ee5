//! Resolution of `--since` time specs into an absolute cutoff instant.
//!
//! Recognized forms, checked in order:
//! 1. `today` - local midnight of the current day
//! 2. `yesterday` - local midnight of the previous day
//! 3. `<N> days ago` - exactly N*24h before now (not truncated to midnight)
//! 4. `<N> hours ago` - exactly N hours before now
//! 5. An ISO-8601 date or datetime

use std::sync::LazyLock;

use chrono::{
    DateTime, Days, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone,
};
use regex_lite::Regex;

use crate::error::GitError;

static RELATIVE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+)\s+(day|hour)s?\s+ago$").expect("relative time pattern is valid")
});

/// Naive datetime layouts tried after RFC 3339, most specific first.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Resolve a time spec against the current local time.
pub fn resolve_since(spec: &str) -> Result<DateTime<Local>, GitError> {
    resolve_since_at(spec, Local::now())
}

/// Resolve a time spec against an explicit `now`.
pub fn resolve_since_at(spec: &str, now: DateTime<Local>) -> Result<DateTime<Local>, GitError> {
    let trimmed = spec.trim();
    let invalid = || GitError::InvalidTimeSpec(spec.to_string());

    match trimmed {
        "today" => return Ok(local_midnight(now.date_naive())),
        "yesterday" => {
            let day = now
                .date_naive()
                .checked_sub_days(Days::new(1))
                .ok_or_else(invalid)?;
            return Ok(local_midnight(day));
        }
        _ => {}
    }

    if let Some(caps) = RELATIVE_PATTERN.captures(trimmed) {
        let amount: i64 = caps[1].parse().map_err(|_| invalid())?;
        let delta = match &caps[2] {
            "day" => TimeDelta::try_days(amount),
            _ => TimeDelta::try_hours(amount),
        }
        .ok_or_else(invalid)?;
        return now.checked_sub_signed(delta).ok_or_else(invalid);
    }

    parse_iso(trimmed).ok_or_else(invalid)
}

/// Parse an ISO-8601 date or datetime. Values without an offset are local time.
fn parse_iso(value: &str) -> Option<DateTime<Local>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Local));
    }

    for format in DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(local_from_naive(naive));
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .map(local_midnight)
}

fn local_midnight(day: NaiveDate) -> DateTime<Local> {
    local_from_naive(day.and_time(NaiveTime::MIN))
}

/// Map a naive local time to an instant, picking the earlier side of a DST
/// fold and treating a DST gap as UTC.
fn local_from_naive(naive: NaiveDateTime) -> DateTime<Local> {
    Local
        .from_local_datetime(&naive)
        .earliest()
        .unwrap_or_else(|| Local.from_utc_datetime(&naive))
}
