//! Outbound timestamp formatting
//!
//! Timestamps leave the service as `YYYY-MM-DDTHH:MM:SSZ`: always UTC, whole
//! seconds, literal `Z`. There is no parser, clients never send timestamps.

use chrono::{DateTime, TimeZone, Utc};
use serde::Serializer;

const FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Render `instant` in UTC with sub-second precision discarded.
pub fn format_timestamp<Tz: TimeZone>(instant: &DateTime<Tz>) -> String {
    instant.with_timezone(&Utc).format(FORMAT).to_string()
}

/// Serde adapter for `#[serde(serialize_with = "timefmt::serialize")]`.
pub fn serialize<S>(instant: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_timestamp(instant))
}
