// shared/src/datetime.rs

//! Date/time helpers
//!
//! The promotion service parses dates with a fixed set of formats but
//! emits ISO-8601 (`2024-03-01T00:00:00`), which its own parser rejects.
//! [`normalize_for_form`] rewrites server output into an accepted format
//! so a retrieved record can be submitted back unchanged.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

/// Formats accepted by the service when deserializing a date field
pub const SERVER_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%d"];

const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";
const DATE_FORMAT: &str = "%Y-%m-%d";
const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parse using only the formats the service accepts
pub fn parse_server_datetime(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    for fmt in SERVER_FORMATS {
        if fmt == DATE_FORMAT {
            if let Ok(date) = NaiveDate::parse_from_str(raw, fmt) {
                return Some(date.and_time(NaiveTime::MIN));
            }
        } else if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt);
        }
    }
    None
}

/// Parse anything the service accepts or emits (ISO-8601, with or without offset)
pub fn parse_datetime(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    parse_server_datetime(raw)
        .or_else(|| NaiveDateTime::parse_from_str(raw, ISO_FORMAT).ok())
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.naive_local()))
}

/// ISO-8601 representation, as the service serializes datetimes
pub fn to_iso(dt: &NaiveDateTime) -> String {
    dt.format("%Y-%m-%dT%H:%M:%S").to_string()
}

/// Rewrite a date for a form field.
///
/// Text the service already accepts is returned as-is. Anything else that
/// parses (the ISO form the service emits) becomes `YYYY-MM-DD` at midnight
/// and `YYYY-MM-DD HH:MM:SS` otherwise. Unparsable text is returned unchanged.
pub fn normalize_for_form(raw: &str) -> String {
    if parse_server_datetime(raw).is_some() {
        return raw.to_string();
    }
    match parse_datetime(raw) {
        Some(dt) if dt.time() == NaiveTime::MIN => dt.format(DATE_FORMAT).to_string(),
        Some(dt) => dt.format(DATETIME_FORMAT).to_string(),
        None => raw.to_string(),
    }
}
