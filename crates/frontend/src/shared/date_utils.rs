//! Utilities for date and time formatting
//!
//! Provides consistent date/time formatting across the application

use chrono::{DateTime, Local, TimeZone};

/// Format a timestamp as DD.MM.YYYY, HH:MM:SS in its own time zone
/// Example: 2024-03-15 14:02:26 -> "15.03.2024, 14:02:26"
pub fn format_local_datetime<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    dt.format("%d.%m.%Y, %H:%M:%S").to_string()
}

/// Current local time formatted for display
pub fn now_display() -> String {
    format_local_datetime(&Local::now())
}
