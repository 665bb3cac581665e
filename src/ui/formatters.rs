use chrono::{DateTime, Local, TimeZone, Utc};
use colored::{ColoredString, Colorize};

use crate::core::monitor::IconCategory;

/// Format an instant as local wall-clock time (HH:MM)
pub fn format_clock(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%H:%M").to_string()
}

/// Format an entry timestamp in milliseconds as local wall-clock time
pub fn format_clock_ms(timestamp_ms: i64) -> String {
    match Utc.timestamp_millis_opt(timestamp_ms).single() {
        Some(at) => format_clock(at),
        None => "--:--".to_string(),
    }
}

/// Colorize a reading by its icon category
pub fn paint_reading(text: &str, icon: IconCategory) -> ColoredString {
    match icon {
        IconCategory::Red => text.red().bold(),
        IconCategory::Orange => text.yellow().bold(),
        IconCategory::Green => text.green().bold(),
    }
}
