//! Shared utility functions for UKQ crates.

/// Date utility functions
pub mod dates {
    use chrono::{Datelike, NaiveDate, TimeDelta};

    /// Milliseconds in one UTC day.
    pub const MILLIS_PER_DAY: i64 = 86_400_000;

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }

    /// Parse a date string in "YYYY-MM-DD" format
    pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
        Ok(NaiveDate::parse_from_str(s, "%Y-%m-%d")?)
    }

    /// Get the calendar year (UTC) for an epoch-milliseconds timestamp.
    ///
    /// Truncates to the start of the UTC day first: `epoch_day` is the
    /// floored quotient of millis over 86,400,000, and the year is read
    /// off 1970-01-01 plus that many days. Times within the same UTC day
    /// therefore always land in the same year, even right at midnight.
    /// No leap-second adjustment.
    pub fn utc_year_for_millis(millis: i64) -> i32 {
        let epoch_day = millis.div_euclid(MILLIS_PER_DAY);
        let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
        let date = epoch + TimeDelta::try_days(epoch_day).unwrap();
        date.year()
    }

}
