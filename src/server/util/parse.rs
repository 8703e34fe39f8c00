use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

use crate::server::error::AppError;

const DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parses a numeric resource ID from a path segment.
///
/// # Arguments
/// - `value` - The raw path segment
/// - `resource` - Resource name used in the error message, e.g. `"car"`
///
/// # Returns
/// - `Ok(i32)` - Successfully parsed ID
/// - `Err(AppError::BadRequest)` - The segment is not an integer
pub fn parse_id(value: &str, resource: &str) -> Result<i32, AppError> {
    value
        .trim()
        .parse::<i32>()
        .map_err(|_| AppError::BadRequest(format!("Invalid {} ID", resource)))
}

/// A parsed date-time input, remembering whether only a date was given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateInput {
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

impl DateInput {
    /// Parses RFC 3339, `YYYY-MM-DDTHH:MM[:SS]`, `YYYY-MM-DD HH:MM[:SS]` or `YYYY-MM-DD`.
    ///
    /// RFC 3339 values with an offset are converted to UTC.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();

        if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
            return Some(Self::DateTime(dt.naive_utc()));
        }

        for format in DATE_TIME_FORMATS {
            if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
                return Some(Self::DateTime(dt));
            }
        }

        NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .ok()
            .map(Self::Date)
    }

    /// Earliest instant covered by this input.
    pub fn start(self) -> NaiveDateTime {
        match self {
            Self::Date(date) => date.and_time(NaiveTime::MIN),
            Self::DateTime(dt) => dt,
        }
    }

    /// Latest instant covered by this input; a bare date covers the whole day.
    pub fn end(self) -> NaiveDateTime {
        match self {
            Self::Date(date) => date.and_time(end_of_day()),
            Self::DateTime(dt) => dt,
        }
    }
}

/// Parses a date-time field, failing with a 400 naming the field.
///
/// # Arguments
/// - `value` - The raw input
/// - `field` - Field name used in the error message
///
/// # Returns
/// - `Ok(DateInput)` - Parsed value
/// - `Err(AppError::BadRequest)` - Value is not in a supported format
pub fn parse_date_input(value: &str, field: &str) -> Result<DateInput, AppError> {
    DateInput::parse(value).ok_or_else(|| {
        AppError::BadRequest(format!(
            "Invalid {}: expected YYYY-MM-DD or an ISO 8601 date-time",
            field
        ))
    })
}

fn end_of_day() -> NaiveTime {
    NaiveTime::from_hms_nano_opt(23, 59, 59, 999_999_999).unwrap_or(NaiveTime::MIN)
}
