//! Departure date and time parsing.
//!
//! Schedules publish a local departure date (`YYYY-MM-DD`) and a local
//! departure time with its UTC offset (`HH:MM` followed by `Z` or `±HH:MM`).
//! All temporal comparisons in the pricing core happen on the absolute UTC
//! instant derived here; the local fields are only kept for display.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, TimeZone, Utc};

/// Error returned when parsing an invalid date or time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// Parse a calendar date in strict `YYYY-MM-DD` form.
///
/// # Examples
///
/// ```
/// use itinerary_server::domain::parse_date;
///
/// assert!(parse_date("2022-09-14").is_ok());
/// assert!(parse_date("2022-9-14").is_err());
/// assert!(parse_date("2022-02-30").is_err());
/// ```
pub fn parse_date(s: &str) -> Result<NaiveDate, TimeError> {
    let bytes = s.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return Err(TimeError::new("expected YYYY-MM-DD format"));
    }

    let year = parse_digits(&bytes[0..4]).ok_or_else(|| TimeError::new("invalid year digits"))?;
    let month =
        parse_digits(&bytes[5..7]).ok_or_else(|| TimeError::new("invalid month digits"))?;
    let day = parse_digits(&bytes[8..10]).ok_or_else(|| TimeError::new("invalid day digits"))?;

    NaiveDate::from_ymd_opt(year as i32, month, day)
        .ok_or_else(|| TimeError::new("date does not exist"))
}

/// Combine a local departure date and an offset-qualified local time into
/// the absolute UTC departure instant.
///
/// # Examples
///
/// ```
/// use itinerary_server::domain::parse_departure_instant;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2022, 9, 14).unwrap();
///
/// let utc = parse_departure_instant(date, "09:00Z").unwrap();
/// assert_eq!(utc.to_rfc3339(), "2022-09-14T09:00:00+00:00");
///
/// let local = parse_departure_instant(date, "12:00+03:00").unwrap();
/// assert_eq!(local, utc);
/// ```
pub fn parse_departure_instant(date: NaiveDate, s: &str) -> Result<DateTime<Utc>, TimeError> {
    if s.len() < 6 || !s.is_ascii() {
        return Err(TimeError::new("expected HH:MM followed by a UTC offset"));
    }

    let (hhmm, offset) = s.split_at(5);
    let time = parse_hhmm(hhmm)?;
    let offset = parse_offset(offset)?;

    offset
        .from_local_datetime(&date.and_time(time))
        .single()
        .map(|local| local.with_timezone(&Utc))
        .ok_or_else(|| TimeError::new("ambiguous local time"))
}

/// Parse "HH:MM".
fn parse_hhmm(s: &str) -> Result<NaiveTime, TimeError> {
    let bytes = s.as_bytes();
    if bytes.len() != 5 || bytes[2] != b':' {
        return Err(TimeError::new("expected HH:MM format"));
    }

    let hour = parse_digits(&bytes[0..2]).ok_or_else(|| TimeError::new("invalid hour digits"))?;
    if hour > 23 {
        return Err(TimeError::new("hour must be 0-23"));
    }

    let minute =
        parse_digits(&bytes[3..5]).ok_or_else(|| TimeError::new("invalid minute digits"))?;
    if minute > 59 {
        return Err(TimeError::new("minute must be 0-59"));
    }

    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(|| TimeError::new("invalid time"))
}

/// Parse a UTC offset: "Z", "+HH:MM" or "-HH:MM".
fn parse_offset(s: &str) -> Result<FixedOffset, TimeError> {
    if s == "Z" {
        return FixedOffset::east_opt(0).ok_or_else(|| TimeError::new("invalid offset"));
    }

    let bytes = s.as_bytes();
    if bytes.len() != 6 || bytes[3] != b':' {
        return Err(TimeError::new("expected Z or ±HH:MM offset"));
    }

    let sign = match bytes[0] {
        b'+' => 1,
        b'-' => -1,
        _ => return Err(TimeError::new("offset must start with + or -")),
    };

    let hours =
        parse_digits(&bytes[1..3]).ok_or_else(|| TimeError::new("invalid offset hours"))?;
    let minutes =
        parse_digits(&bytes[4..6]).ok_or_else(|| TimeError::new("invalid offset minutes"))?;
    if hours > 18 || minutes > 59 {
        return Err(TimeError::new("offset out of range"));
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60) as i32)
        .ok_or_else(|| TimeError::new("offset out of range"))
}

/// Parse a run of ASCII digits.
fn parse_digits(bytes: &[u8]) -> Option<u32> {
    bytes.iter().try_fold(0u32, |acc, &b| {
        if b.is_ascii_digit() {
            Some(acc * 10 + (b - b'0') as u32)
        } else {
            None
        }
    })
}
