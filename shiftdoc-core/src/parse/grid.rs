//! Rebuilding the weekly calendar grid from the flattened body tokens.
//!
//! The body is a run of week blocks. Each block is one or more day numbers
//! followed by the activity tokens of that week, with nothing marking where
//! one day's activities end and the next day's begin. Activities are handed
//! out to the week's occupied columns left to right, one or two per column:
//!
//! ```text
//!  tokens: 1 2 3 CLOSED DE-8:30 MM-9:30 CONSULTS
//!
//!  col:    Sun Mon Tue Wed Thu     Fri             Sat
//!  day:                    1       2               3
//!  acts:                   CLOSED  DE-8:30 MM-9:30 CONSULTS
//! ```
//!
//! A timed activity pulls the following activity into the same cell when
//! that one is timed too. Cells holding more than two activities, or weeks
//! with blank cells after the first week, cannot be recovered this way.

use std::collections::BTreeMap;

use tracing::debug;

use crate::calendar_month::CalendarMonth;
use crate::token::{Activity, Token};
use crate::vocabulary::DAYS_IN_WEEK;

/// Activities recovered per day number, across all weeks.
pub type DayActivities = BTreeMap<u32, Vec<Activity>>;

/// One row of the calendar: the day number occupying each weekday column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeekRow {
    pub columns: [Option<u32>; DAYS_IN_WEEK],
}

impl WeekRow {
    /// Lay out a week's day numbers on the grid.
    ///
    /// A week starting at day 1 begins on the month's first weekday column;
    /// every other week is assumed to begin on Sunday. Days that would fall
    /// past Saturday are dropped.
    pub fn place(days: &[u32], first_weekday_column: usize) -> Self {
        let mut row = WeekRow::default();
        let start = match days.first() {
            Some(1) => first_weekday_column,
            _ => 0,
        };

        for (offset, &day) in days.iter().enumerate() {
            let column = start + offset;
            if column >= DAYS_IN_WEEK {
                debug!(day, column, "dropping day number past the last grid column");
                continue;
            }
            row.columns[column] = Some(day);
        }
        row
    }

    /// Day numbers in column order, skipping empty cells.
    pub fn days(&self) -> impl Iterator<Item = u32> + '_ {
        self.columns.iter().flatten().copied()
    }

    /// Hand the week's activities out to its occupied columns.
    pub fn assign(&self, activities: &[Activity], buckets: &mut DayActivities) {
        let mut queue = activities.iter().peekable();

        for day in self.days() {
            let Some(activity) = queue.next() else {
                break;
            };
            let bucket = buckets.entry(day).or_default();
            bucket.push(activity.clone());

            if !activity.is_no_shift()
                && activity.has_time()
                && let Some(second) = queue.next_if(|next| next.has_time())
            {
                bucket.push(second.clone());
            }
        }

        let leftover: Vec<String> = queue.map(|a| a.to_string()).collect();
        if !leftover.is_empty() {
            debug!(?leftover, "activities left after every column was served");
        }
    }
}

/// Walk the calendar body week by week and collect activities per day.
pub fn reconstruct_grid(body: &[&str], month: CalendarMonth) -> DayActivities {
    let tokens: Vec<Token> = body.iter().map(|raw| Token::classify(raw)).collect();
    let first_weekday_column = month.first_weekday_column();
    let mut buckets = DayActivities::new();
    let mut pos = 0;

    while pos < tokens.len() {
        let days = take_day_numbers(&tokens[pos..]);
        if days.is_empty() {
            debug!(token = body[pos], "skipping token outside any week block");
            pos += 1;
            continue;
        }
        pos += days.len();

        let activities = take_activities(&tokens[pos..]);
        pos += activities.len();

        let row = WeekRow::place(&days, first_weekday_column);
        debug!(?days, activities = activities.len(), "week block");
        row.assign(&activities, &mut buckets);
    }

    buckets
}

/// Leading run of day-number tokens.
fn take_day_numbers(tokens: &[Token]) -> Vec<u32> {
    tokens
        .iter()
        .map_while(|token| match token {
            Token::DayNumber(day) => Some(*day),
            _ => None,
        })
        .collect()
}

/// Leading run of activity tokens.
fn take_activities(tokens: &[Token]) -> Vec<Activity> {
    tokens
        .iter()
        .map_while(|token| match token {
            Token::Activity(activity) => Some(activity.clone()),
            _ => None,
        })
        .collect()
}
