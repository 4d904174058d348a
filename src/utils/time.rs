//! Timestamp helpers: every stored timestamp uses the same sortable format.

use chrono::{Local, NaiveDateTime};

/// `YYYY-MM-DD HH:MM:SS`, lexicographically sortable.
pub const TS_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Current local time, already formatted for storage.
pub fn now_ts() -> String {
    Local::now().format(TS_FORMAT).to_string()
}

pub fn parse_ts(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, TS_FORMAT).ok()
}

/// Serde helper: write a timestamp in [`TS_FORMAT`], the same text the
/// database and the tables show.
pub fn serialize_ts<S>(ts: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_str(&ts.format(TS_FORMAT))
}
