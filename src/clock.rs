//! Clock Helpers
//!
//! System clock access and the `datetime-local` input format.

use chrono::{Local, NaiveDateTime, Utc};

/// Value format of `<input type="datetime-local">`
pub const DATETIME_LOCAL_FORMAT: &str = "%Y-%m-%dT%H:%M";

pub fn now_local() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Milliseconds since the Unix epoch
pub fn now_millis() -> u64 {
    u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0)
}

pub fn format_datetime_local(dt: &NaiveDateTime) -> String {
    dt.format(DATETIME_LOCAL_FORMAT).to_string()
}

/// Browsers may include seconds when the step attribute allows it
pub fn parse_datetime_local(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    NaiveDateTime::parse_from_str(value, DATETIME_LOCAL_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))
        .ok()
}

/// Footer tag timestamp as shown on a card
pub fn format_timestamp(dt: &NaiveDateTime) -> String {
    dt.format("%d/%m/%Y %H:%M").to_string()
}
