//! Trip date display.

#[cfg(test)]
#[path = "date_test.rs"]
mod date_test;

use chrono::NaiveDateTime;

/// Format a trip timestamp as a Swiss-German short date (`1.8.2025`).
/// Missing timestamps render as an empty string.
pub fn format_trip_date(value: Option<&NaiveDateTime>) -> String {
    value.map_or_else(String::new, |v| v.format("%-d.%-m.%Y").to_string())
}
