//! Fixed-format date fields.

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::ParseError;
use crate::raw::RawValue;

pub(crate) const YMD_FORMAT: &str = "%Y-%m-%d";
pub(crate) const INSTANT_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// The fixed wire patterns a date field may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    /// A `yyyy-MM-dd` calendar date.
    YearMonthDay,
    /// An ISO-8601 / RFC 3339 date and time with an explicit offset.
    DateTimeUtc,
}

/// A parsed fixed-format date value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateValue {
    Day(NaiveDate),
    Instant(DateTime<Utc>),
}

/// Parse `yyyy-MM-dd` text into a calendar date.
pub fn parse_ymd(text: &str) -> Result<NaiveDate, ParseError> {
    NaiveDate::parse_from_str(text, YMD_FORMAT).map_err(|_| ParseError::InvalidDate)
}

/// Parse RFC 3339 date-time text into a UTC instant.
pub fn parse_instant(text: &str) -> Result<DateTime<Utc>, ParseError> {
    DateTime::parse_from_rfc3339(text)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| ParseError::InvalidDate)
}

/// Parse a fixed-format date field.
///
/// Unlike the loose coercions this fails hard: a fixed-format field that
/// does not match its pattern is a schema violation, not drift. The caller
/// decides whether to skip the record or abort the page.
pub fn parse_date(raw: &RawValue, format: DateFormat) -> Result<DateValue, ParseError> {
    let text = match raw {
        RawValue::Text(s) => s.as_str(),
        _ => return Err(ParseError::NotText),
    };
    match format {
        DateFormat::YearMonthDay => parse_ymd(text).map(DateValue::Day),
        DateFormat::DateTimeUtc => parse_instant(text).map(DateValue::Instant),
    }
}

/// Encode counterpart of [`parse_date`]: renders the value in the pattern
/// it was declared with.
pub fn encode_date(value: &DateValue) -> RawValue {
    let text = match value {
        DateValue::Day(d) => d.format(YMD_FORMAT).to_string(),
        DateValue::Instant(dt) => dt.format(INSTANT_FORMAT).to_string(),
    };
    RawValue::Text(text)
}
