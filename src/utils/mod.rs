//! Utility functions and helpers.

pub mod http;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Parse a content timestamp.
///
/// Accepts RFC 3339 (`2024-03-01T10:00:00Z`, `+02:00`), ISO date-times without
/// an offset (`2024-03-01T10:00:00`, `2024-03-01 10:00:00.250`, read as UTC)
/// and bare dates (`2024-03-01`, read as midnight UTC). Returns `None` for
/// anything else.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Parse a timestamp, treating missing or invalid input as the Unix epoch.
pub fn timestamp_or_epoch(raw: Option<&str>) -> DateTime<Utc> {
    raw.and_then(parse_timestamp).unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

/// Integer division rounding up. Zero divisor yields zero.
pub fn div_ceil_or_zero(numerator: usize, denominator: usize) -> usize {
    if denominator == 0 {
        0
    } else {
        numerator.div_ceil(denominator)
    }
}
