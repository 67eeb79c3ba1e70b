//! Turning per-day activities into schedule days.

use tracing::debug;

use crate::calendar_month::CalendarMonth;
use crate::parse::grid::DayActivities;
use crate::schedule::ScheduleDay;
use crate::token::Activity;
use crate::vocabulary::DEFAULT_APPOINTMENT_TIME;

/// Build the schedule days for a month, in ascending date order.
///
/// Days with no activities, days carrying a no-shift code, and days with no
/// appointment code are skipped. Day numbers that do not exist in the month
/// never produce a day.
pub fn classify_days(buckets: &DayActivities, month: CalendarMonth) -> Vec<ScheduleDay> {
    let mut days = Vec::new();

    for day in 1..=month.days_in_month() {
        let Some(activities) = buckets.get(&day).filter(|acts| !acts.is_empty()) else {
            continue;
        };

        if activities.iter().any(Activity::is_no_shift) {
            debug!(day, "no-shift day");
            continue;
        }

        let Some(selected) = select_appointment(activities) else {
            continue;
        };
        let Some(date) = month.date(day) else {
            continue;
        };

        days.push(ScheduleDay::new(
            date,
            selected.code.trim().to_ascii_uppercase(),
            selected.time.unwrap_or(DEFAULT_APPOINTMENT_TIME),
        ));
    }

    days
}

/// Pick the day's appointment: the earliest timed appointment code, or the
/// first untimed one when no code on the day carries a time.
///
/// Ties between equal times keep the first seen.
pub fn select_appointment(activities: &[Activity]) -> Option<&Activity> {
    let mut selected: Option<&Activity> = None;

    for candidate in activities.iter().filter(|a| !a.is_no_shift()) {
        selected = match (selected, candidate.time) {
            (None, _) => Some(candidate),
            (Some(current), Some(time)) => match current.time {
                Some(current_time) if current_time <= time => Some(current),
                _ => Some(candidate),
            },
            (Some(current), None) => Some(current),
        };
    }

    selected
}
