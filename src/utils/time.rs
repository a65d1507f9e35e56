//! Millisecond timestamps <-> local "YYYY-MM-DD HH:MM" text.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Local, LocalResult, NaiveDateTime, TimeZone, Utc};

pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Parse "YYYY-MM-DD HH:MM" (or with seconds) as local time.
pub fn parse_local(s: &str) -> AppResult<i64> {
    let naive = NaiveDateTime::parse_from_str(s.trim(), DISPLAY_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(s.trim(), "%Y-%m-%d %H:%M:%S"))
        .map_err(|_| AppError::InvalidTimestamp(s.to_string()))?;

    match Local.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Ok(dt.timestamp_millis()),
        // DST fold: take the earlier instant
        LocalResult::Ambiguous(earliest, _) => Ok(earliest.timestamp_millis()),
        LocalResult::None => Err(AppError::InvalidTimestamp(format!(
            "{} does not exist in the local time zone",
            s
        ))),
    }
}

pub fn parse_optional(input: Option<&String>) -> AppResult<Option<i64>> {
    input.map(|s| parse_local(s)).transpose()
}

pub fn format_local(millis: i64) -> String {
    match DateTime::<Utc>::from_timestamp_millis(millis) {
        Some(utc) => utc.with_timezone(&Local).format(DISPLAY_FORMAT).to_string(),
        None => format!("@{}", millis),
    }
}

pub fn format_optional(millis: Option<i64>) -> String {
    millis.map(format_local).unwrap_or_else(|| "--".to_string())
}
