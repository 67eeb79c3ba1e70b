//! Parsed schedule types.
//!
//! These are the output of [`parse_schedule`](crate::parse::parse_schedule)
//! and the input of shift generation. Field names serialize in camelCase so
//! the JSON matches what the import pipeline expects.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

use crate::calendar_month::CalendarMonth;
use crate::token::AppointmentTime;

/// A content problem found while reading a schedule document.
///
/// Diagnostics are data, not failures: a schedule may carry diagnostics and
/// still hold the days that could be recovered.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseDiagnostic {
    #[error("Empty document")]
    EmptyDocument,

    #[error("Could not parse header: {0}")]
    UnparseableHeader(String),

    #[error("Unknown month: {0}")]
    UnknownMonth(String),

    #[error("Could not determine year")]
    MissingYear,

    #[error("Could not find calendar header")]
    MissingCalendarHeader,
}

impl Serialize for ParseDiagnostic {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One calendar day that produces a shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleDay {
    pub date: NaiveDate,
    pub appointment_type: String,
    pub appointment_time: AppointmentTime,
    /// Always false: closed days never become a `ScheduleDay`.
    pub is_closed: bool,
    /// Always false: admin days never become a `ScheduleDay`.
    pub is_admin: bool,
}

impl ScheduleDay {
    pub fn new(
        date: NaiveDate,
        appointment_type: impl Into<String>,
        appointment_time: AppointmentTime,
    ) -> Self {
        ScheduleDay {
            date,
            appointment_type: appointment_type.into(),
            appointment_time,
            is_closed: false,
            is_admin: false,
        }
    }
}

/// Everything recovered from one schedule document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedSchedule {
    /// Zero-based month (January = 0).
    pub month: u32,
    pub year: i32,
    pub location_code: String,
    /// Ascending by date, at most one entry per date.
    pub days: Vec<ScheduleDay>,
    pub errors: Vec<ParseDiagnostic>,
}

impl ParsedSchedule {
    /// A schedule with no header fields and a single diagnostic.
    pub fn failed(diagnostic: ParseDiagnostic) -> Self {
        ParsedSchedule {
            month: 0,
            year: 0,
            location_code: String::new(),
            days: Vec::new(),
            errors: vec![diagnostic],
        }
    }

    /// True when no diagnostics were raised.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Diagnostics as the plain strings shown to an operator.
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.to_string()).collect()
    }

    /// One-based month number, for display.
    pub fn month_number(&self) -> u32 {
        self.month + 1
    }

    pub fn calendar_month(&self) -> CalendarMonth {
        CalendarMonth::new(self.year, self.month)
    }

    /// Number of recovered days per appointment type, ordered by type.
    pub fn appointment_counts(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for day in &self.days {
            *counts.entry(day.appointment_type.as_str()).or_insert(0) += 1;
        }
        counts
    }
}
