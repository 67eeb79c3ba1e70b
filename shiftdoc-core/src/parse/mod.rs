//! Schedule document parsing.
//!
//! Data flows strictly forward:
//! raw text -> tokens -> header + calendar body -> activities per day
//! -> schedule days. Every content problem becomes a
//! [`ParseDiagnostic`] on the returned schedule.

mod classify;
mod grid;
mod header;
mod locate;

pub use classify::{classify_days, select_appointment};
pub use grid::{DayActivities, WeekRow, reconstruct_grid};
pub use header::{Header, parse_header, resolve_month};
pub use locate::find_calendar_body;

use tracing::{info, warn};

use crate::schedule::{ParseDiagnostic, ParsedSchedule};
use crate::token::tokenize;

/// Parse the raw text of a monthly clinic calendar.
///
/// Never fails: header and structural problems stop parsing early and are
/// reported in [`ParsedSchedule::errors`], keeping whatever header fields
/// were recovered.
pub fn parse_schedule(text: &str) -> ParsedSchedule {
    let tokens = tokenize(text);
    if tokens.is_empty() {
        warn!("schedule document is empty");
        return ParsedSchedule::failed(ParseDiagnostic::EmptyDocument);
    }

    let header = match parse_header(&tokens) {
        Ok(header) => header,
        Err(diagnostic) => {
            warn!(%diagnostic, "could not read schedule header");
            return ParsedSchedule::failed(diagnostic);
        }
    };

    let mut schedule = ParsedSchedule {
        month: header.month,
        year: 0,
        location_code: header.location_code,
        days: Vec::new(),
        errors: Vec::new(),
    };

    let Some(year) = header.year else {
        warn!(location = %schedule.location_code, "schedule header has no year");
        schedule.errors.push(ParseDiagnostic::MissingYear);
        return schedule;
    };
    schedule.year = year;

    let Some(body_start) = find_calendar_body(&tokens) else {
        warn!("no day-of-week header row in schedule");
        schedule.errors.push(ParseDiagnostic::MissingCalendarHeader);
        return schedule;
    };

    let month = schedule.calendar_month();
    let buckets = reconstruct_grid(&tokens[body_start..], month);
    schedule.days = classify_days(&buckets, month);

    info!(
        location = %schedule.location_code,
        month = schedule.month_number(),
        year = schedule.year,
        days = schedule.days.len(),
        "parsed schedule"
    );

    schedule
}
