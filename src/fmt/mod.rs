//! Line formatting: one timestamped, level-tagged line per write.

use chrono::Local;

use crate::level::Level;

/// Weekday/month/day/time/zone/year, the classic `date(1)` shape.
/// chrono renders `%Z` for [`Local`] as the numeric UTC offset because zone
/// abbreviations are not available from the host; `%e` space-pads the day.
pub const TIMESTAMP_FORMAT: &str = "%a %b %e %H:%M:%S %Z %Y";

/// Formats one log line as `<timestamp> [<LEVEL>] <content>`, without the
/// trailing newline (the sink owns the newline so the append stays a single
/// write).
#[must_use]
pub fn format_line(level: Level, content: &str) -> String {
    let timestamp = Local::now().format(TIMESTAMP_FORMAT);
    format!("{timestamp} [{level}] {content}")
}
