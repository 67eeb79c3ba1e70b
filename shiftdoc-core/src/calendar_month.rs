//! Calendar arithmetic for a single month.

use chrono::{Datelike, NaiveDate};

use crate::vocabulary::SHORT_MONTH_NAMES;

/// A month of a specific year. `month0` is zero-based (January = 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarMonth {
    pub year: i32,
    pub month0: u32,
}

impl CalendarMonth {
    pub fn new(year: i32, month0: u32) -> Self {
        CalendarMonth { year, month0 }
    }

    /// First day of the month, or `None` when the year/month is out of
    /// chrono's range.
    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month0 + 1, 1)
    }

    /// Number of days in the month (0 when the month itself is invalid).
    pub fn days_in_month(&self) -> u32 {
        let Some(first) = self.first_day() else {
            return 0;
        };
        let next = if self.month0 == 11 {
            NaiveDate::from_ymd_opt(self.year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(self.year, self.month0 + 2, 1)
        };
        match next {
            Some(next) => (next - first).num_days() as u32,
            None => 31,
        }
    }

    /// Grid column of day 1, with Sunday = 0.
    pub fn first_weekday_column(&self) -> usize {
        self.first_day()
            .map(|d| d.weekday().num_days_from_sunday() as usize)
            .unwrap_or(0)
    }

    /// Date of a one-based day number, if it exists in this month.
    pub fn date(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month0 + 1, day)
    }

    pub fn short_name(&self) -> &'static str {
        SHORT_MONTH_NAMES
            .get(self.month0 as usize)
            .copied()
            .unwrap_or("")
    }
}
