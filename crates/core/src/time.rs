//! Wall-clock helpers.

use chrono::Local;
use std::time::{SystemTime, UNIX_EPOCH};

/// Milliseconds since the Unix epoch.
pub fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

/// Current local time as a short display string, e.g. `"10:00:24 AM"`.
///
/// Transcripts store display strings rather than instants; this matches
/// the seeded message format.
pub fn local_time_string() -> String {
    Local::now().format("%-I:%M:%S %p").to_string()
}
