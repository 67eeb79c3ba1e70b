//! Fixed vocabularies used while reading schedule documents.

use crate::token::AppointmentTime;

/// English month names, indexed by zero-based month.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Three-letter month abbreviations used in generated shift titles.
pub const SHORT_MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Activity codes that suppress shift generation for their day.
pub const NO_SHIFT_CODES: [&str; 2] = ["CLOSED", "ADMIN"];

/// Number of columns in the calendar grid (Sunday through Saturday).
pub const DAYS_IN_WEEK: usize = 7;

/// Time used when an appointment code carries no explicit time.
pub const DEFAULT_APPOINTMENT_TIME: AppointmentTime = AppointmentTime { hour: 9, minute: 0 };

/// Zero-based index of a month name, ignoring case.
pub fn month_index(name: &str) -> Option<u32> {
    MONTH_NAMES
        .iter()
        .position(|m| m.eq_ignore_ascii_case(name))
        .map(|i| i as u32)
}

/// Whether `code` is one of the reserved no-shift codes, ignoring case and
/// surrounding whitespace.
pub fn is_no_shift_code(code: &str) -> bool {
    let code = code.trim();
    NO_SHIFT_CODES.iter().any(|c| c.eq_ignore_ascii_case(code))
}
