//! Lenient timestamp decoding.
//!
//! The backend writes `datetime` values with `isoformat()` (naive, optional
//! microseconds) and plain `date` values as HTTP dates
//! (`Fri, 05 Jan 2024 00:00:00 GMT`). Both end up here.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{de, Deserialize, Deserializer};

/// Parses any of the timestamp shapes the backend is known to emit.
///
/// Offsets are dropped and the wall-clock time is kept, which is what the
/// history table shows to the user.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }

    let iso = raw.replacen(' ', "T", 1);
    if let Ok(dt) = iso.parse::<NaiveDateTime>() {
        return Some(dt);
    }
    // `<input type="datetime-local">` omits seconds
    if let Ok(dt) = NaiveDateTime::parse_from_str(&iso, "%Y-%m-%dT%H:%M") {
        return Some(dt);
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.naive_local());
    }

    None
}

/// Parses a calendar date, accepting everything [`parse_timestamp`] does.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    parse_timestamp(raw).map(|dt| dt.date())
}

/// `deserialize_with` adapter for [`NaiveDateTime`] fields.
pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).ok_or_else(|| de::Error::custom(format!("unrecognised timestamp `{}`", raw)))
}

/// `deserialize_with` adapter for [`NaiveDate`] fields.
pub fn deserialize_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_date(&raw).ok_or_else(|| de::Error::custom(format!("unrecognised date `{}`", raw)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, min, s).unwrap()
    }

    #[test]
    fn test_parse_naive_iso() {
        assert_eq!(parse_timestamp("2024-01-05T10:30:00"), Some(at(2024, 1, 5, 10, 30, 0)));
    }

    #[test]
    fn test_parse_iso_with_microseconds() {
        let parsed = parse_timestamp("2024-01-05T10:30:00.123456").unwrap();
        assert_eq!(parsed.date(), NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
        assert_eq!(parsed.nanosecond(), 123_456_000);
    }

    #[test]
    fn test_parse_space_separated() {
        assert_eq!(parse_timestamp("2024-01-05 10:30:00"), Some(at(2024, 1, 5, 10, 30, 0)));
    }

    #[test]
    fn test_parse_rfc3339_keeps_wall_clock() {
        assert_eq!(parse_timestamp("2024-01-05T10:30:00+05:30"), Some(at(2024, 1, 5, 10, 30, 0)));
    }

    #[test]
    fn test_parse_datetime_local_input() {
        assert_eq!(parse_timestamp("2024-03-01T06:15"), Some(at(2024, 3, 1, 6, 15, 0)));
    }

    #[test]
    fn test_parse_plain_date() {
        assert_eq!(parse_timestamp("2024-01-05"), Some(at(2024, 1, 5, 0, 0, 0)));
    }

    #[test]
    fn test_parse_http_date() {
        assert_eq!(
            parse_date("Fri, 05 Jan 2024 00:00:00 GMT"),
            NaiveDate::from_ymd_opt(2024, 1, 5)
        );
    }

    #[test]
    fn test_parse_garbage() {
        assert_eq!(parse_timestamp(""), None);
        assert_eq!(parse_timestamp("yesterday"), None);
    }
}
