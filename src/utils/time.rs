use chrono::{DateTime, Utc};

/// Format a message timestamp (milliseconds since the epoch) for a card header
///
/// e.g. `0` -> "Thu Jan 01 1970 00:00:00 UTC". Out-of-range values fall back to
/// the raw number so a bad timestamp never hides the message.
pub fn format_message_timestamp(timestamp_ms: i64) -> String {
    match DateTime::<Utc>::from_timestamp_millis(timestamp_ms) {
        Some(dt) => dt.format("%a %b %d %Y %H:%M:%S UTC").to_string(),
        None => timestamp_ms.to_string(),
    }
}
