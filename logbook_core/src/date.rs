//! Calendar date helpers.
//!
//! Workout dates are plain `YYYY-MM-DD` calendar dates. They are compared as
//! dates, never as instants, so no timezone shift can move a workout to a
//! neighbouring day.

use crate::{Error, Result};
use chrono::NaiveDate;
use std::fmt::Write;
use uuid::Uuid;

/// Wire format of workout dates
pub const WORKOUT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` date, `None` if the value is not a calendar date
///
/// Only the zero-padded ten character form is accepted. chrono alone would
/// also take `2024-1-5`, a leading sign or surrounding whitespace.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    if !has_date_shape(value) {
        return None;
    }
    NaiveDate::parse_from_str(value, WORKOUT_DATE_FORMAT).ok()
}

fn has_date_shape(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Parse the date of a workout, reporting which workout carried a bad value
pub fn parse_workout_date(id: &Uuid, value: &str) -> Result<NaiveDate> {
    parse_date(value).ok_or_else(|| Error::MalformedDate {
        id: id.to_string(),
        value: value.to_string(),
    })
}

/// Strictly earlier calendar day
pub fn is_before(date: NaiveDate, reference: NaiveDate) -> bool {
    date < reference
}

/// Whole days from `earlier` to `later` (negative if reversed)
pub fn days_between(earlier: NaiveDate, later: NaiveDate) -> i64 {
    (later - earlier).num_days()
}

/// Render a date with `format`, `None` if the format cannot describe a date
///
/// Time-of-day specifiers such as `%H` parse fine but fail when rendered
/// against a `NaiveDate`.
pub fn try_format_date(date: NaiveDate, format: &str) -> Option<String> {
    let mut rendered = String::new();
    write!(rendered, "{}", date.format(format)).ok()?;
    Some(rendered)
}

/// Render a date for display, e.g. with `"%d/%m/%Y"`
///
/// Falls back to `YYYY-MM-DD` when `format` cannot be rendered.
pub fn format_date(date: NaiveDate, format: &str) -> String {
    try_format_date(date, format).unwrap_or_else(|| {
        tracing::warn!(
            "Cannot render date with format {:?}, using {}",
            format,
            WORKOUT_DATE_FORMAT
        );
        date.format(WORKOUT_DATE_FORMAT).to_string()
    })
}
