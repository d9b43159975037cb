//! Shared utility functions for mood crates.

/// Date utility functions
pub mod dates {
    use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_iso(date: &NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }

    /// Parse a date string in "YYYY-MM-DD" format
    pub fn parse_iso(s: &str) -> anyhow::Result<NaiveDate> {
        Ok(NaiveDate::parse_from_str(s, "%Y-%m-%d")?)
    }

    /// Format a timestamp's time-of-day as "HH:MM" for tooltips.
    pub fn format_time_hm(timestamp: &NaiveDateTime) -> String {
        format!("{:02}:{:02}", timestamp.hour(), timestamp.minute())
    }

    /// Number of days in a month, leap-aware.
    pub fn days_in_month(year: i32, month: u32) -> u32 {
        let first = match NaiveDate::from_ymd_opt(year, month, 1) {
            Some(d) => d,
            None => return 0,
        };
        let next = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)
        };
        match next {
            Some(n) => (n - first).num_days() as u32,
            None => 0,
        }
    }

    /// Column index (0-6, Monday-first) of the 1st of the month.
    /// The calendar grid pads this many blank cells before day 1.
    pub fn first_weekday_offset(year: i32, month: u32) -> u32 {
        match NaiveDate::from_ymd_opt(year, month, 1) {
            Some(d) => d.weekday().num_days_from_monday(),
            None => 0,
        }
    }

    /// The (year, month) before the given one, rolling over year ends.
    pub fn prev_month(year: i32, month: u32) -> (i32, u32) {
        if month == 1 {
            (year - 1, 12)
        } else {
            (year, month - 1)
        }
    }

    /// The (year, month) after the given one, rolling over year ends.
    pub fn next_month(year: i32, month: u32) -> (i32, u32) {
        if month == 12 {
            (year + 1, 1)
        } else {
            (year, month + 1)
        }
    }

    /// English month name for grid headers ("?" for out-of-range input).
    pub fn month_name(month: u32) -> &'static str {
        match month {
            1 => "January",
            2 => "February",
            3 => "March",
            4 => "April",
            5 => "May",
            6 => "June",
            7 => "July",
            8 => "August",
            9 => "September",
            10 => "October",
            11 => "November",
            12 => "December",
            _ => "?",
        }
    }

}
