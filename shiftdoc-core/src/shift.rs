//! Shift window generation.
//!
//! Each schedule day becomes one shift draft that starts a fixed offset
//! before the selected appointment and lasts a fixed duration. Drafts are
//! handed to the import pipeline, which assigns real zone and shift-type
//! identifiers.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::calendar_month::CalendarMonth;
use crate::error::{ShiftDocError, ShiftDocResult};
use crate::schedule::{ParsedSchedule, ScheduleDay};

pub const DEFAULT_SHIFT_DURATION_MINUTES: i64 = 120;
pub const DEFAULT_OFFSET_BEFORE_MINUTES: i64 = 30;

/// Upper bound for both the shift duration and the offset (one day).
pub const MAX_WINDOW_MINUTES: i64 = 24 * 60;

fn default_shift_duration_minutes() -> i64 {
    DEFAULT_SHIFT_DURATION_MINUTES
}

fn default_offset_before_minutes() -> i64 {
    DEFAULT_OFFSET_BEFORE_MINUTES
}

/// How appointment days are turned into shift windows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftWindowConfig {
    #[serde(default)]
    pub zone_name: String,

    #[serde(default)]
    pub shift_type: String,

    #[serde(default = "default_shift_duration_minutes")]
    pub shift_duration_minutes: i64,

    /// Minutes before the appointment that the shift starts.
    #[serde(default = "default_offset_before_minutes")]
    pub offset_before_minutes: i64,

    /// Title for every generated shift. Defaults to `<LOC> - <Mon> <D>`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Default for ShiftWindowConfig {
    fn default() -> Self {
        ShiftWindowConfig {
            zone_name: String::new(),
            shift_type: String::new(),
            shift_duration_minutes: DEFAULT_SHIFT_DURATION_MINUTES,
            offset_before_minutes: DEFAULT_OFFSET_BEFORE_MINUTES,
            title: None,
        }
    }
}

impl ShiftWindowConfig {
    pub fn new(zone_name: impl Into<String>, shift_type: impl Into<String>) -> Self {
        ShiftWindowConfig {
            zone_name: zone_name.into(),
            shift_type: shift_type.into(),
            ..Default::default()
        }
    }

    /// Duration must be `1..=MAX_WINDOW_MINUTES`; the offset may be negative
    /// (shift starts after the appointment) but no more than a day either way.
    pub fn validate(&self) -> ShiftDocResult<()> {
        if !(1..=MAX_WINDOW_MINUTES).contains(&self.shift_duration_minutes) {
            return Err(ShiftDocError::InvalidShiftWindow(format!(
                "shift duration must be between 1 and {} minutes, got {}",
                MAX_WINDOW_MINUTES, self.shift_duration_minutes
            )));
        }
        if !(-MAX_WINDOW_MINUTES..=MAX_WINDOW_MINUTES).contains(&self.offset_before_minutes) {
            return Err(ShiftDocError::InvalidShiftWindow(format!(
                "offset must be within {} minutes of the appointment, got {}",
                MAX_WINDOW_MINUTES, self.offset_before_minutes
            )));
        }
        Ok(())
    }
}

/// A shift ready for import.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftDraft {
    pub title: String,
    pub date: NaiveDate,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub zone_name: String,
    pub shift_type: String,
}

impl ShiftDraft {
    pub fn duration(&self) -> Duration {
        self.end_time - self.start_time
    }
}

/// Generate one shift draft per schedule day, in the schedule's day order.
///
/// Fails only when `config` is out of bounds (see
/// [`ShiftWindowConfig::validate`]) or a window falls outside chrono's date
/// range.
pub fn generate_shift_drafts(
    schedule: &ParsedSchedule,
    config: &ShiftWindowConfig,
) -> ShiftDocResult<Vec<ShiftDraft>> {
    config.validate()?;

    schedule
        .days
        .iter()
        .map(|day| shift_for_day(day, &schedule.location_code, config))
        .collect()
}

/// Serialize drafts as pretty JSON for the import pipeline.
pub fn drafts_to_json(drafts: &[ShiftDraft]) -> ShiftDocResult<String> {
    Ok(serde_json::to_string_pretty(drafts)?)
}

fn shift_for_day(
    day: &ScheduleDay,
    location_code: &str,
    config: &ShiftWindowConfig,
) -> ShiftDocResult<ShiftDraft> {
    // Minutes are added to midnight rather than clamped, so a window that
    // starts before 0:00 lands on the previous evening.
    let midnight = day.date.and_time(NaiveTime::MIN);
    let start_minutes = day
        .appointment_time
        .minutes_of_day()
        .checked_sub(config.offset_before_minutes)
        .ok_or_else(|| window_overflow(day.date))?;
    let end_minutes = start_minutes
        .checked_add(config.shift_duration_minutes)
        .ok_or_else(|| window_overflow(day.date))?;

    let title = config
        .title
        .clone()
        .unwrap_or_else(|| default_title(location_code, day.date));

    Ok(ShiftDraft {
        title,
        date: day.date,
        start_time: minutes_after(midnight, start_minutes)?,
        end_time: minutes_after(midnight, end_minutes)?,
        zone_name: config.zone_name.clone(),
        shift_type: config.shift_type.clone(),
    })
}

fn minutes_after(midnight: NaiveDateTime, minutes: i64) -> ShiftDocResult<NaiveDateTime> {
    Duration::try_minutes(minutes)
        .and_then(|delta| midnight.checked_add_signed(delta))
        .ok_or_else(|| window_overflow(midnight.date()))
}

fn window_overflow(date: NaiveDate) -> ShiftDocError {
    ShiftDocError::InvalidShiftWindow(format!("shift window for {date} is out of range"))
}

/// `RAL - Jan 2`
pub fn default_title(location_code: &str, date: NaiveDate) -> String {
    format!(
        "{} - {} {}",
        location_code,
        CalendarMonth::new(date.year(), date.month0()).short_name(),
        date.day()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::AppointmentTime;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn at(date: NaiveDate, h: u32, m: u32) -> NaiveDateTime {
        date.and_hms_opt(h, m, 0).unwrap()
    }

    fn schedule(days: Vec<ScheduleDay>) -> ParsedSchedule {
        ParsedSchedule {
            month: 0,
            year: 2026,
            location_code: "RAL".into(),
            days,
            errors: vec![],
        }
    }

    #[test]
    fn default_window_starts_half_hour_early_for_two_hours() {
        let date = d(2026, 1, 2);
        let parsed = schedule(vec![ScheduleDay::new(
            date,
            "DE",
            AppointmentTime { hour: 8, minute: 30 },
        )]);

        let drafts =
            generate_shift_drafts(&parsed, &ShiftWindowConfig::new("Front Desk", "Clinic")).unwrap();

        assert_eq!(drafts.len(), 1);
        let draft = &drafts[0];
        assert_eq!(draft.start_time, at(date, 8, 0));
        assert_eq!(draft.end_time, at(date, 10, 0));
        assert_eq!(draft.duration(), Duration::minutes(120));
        assert_eq!(draft.title, "RAL - Jan 2");
        assert_eq!(draft.zone_name, "Front Desk");
        assert_eq!(draft.shift_type, "Clinic");
    }

    #[test]
    fn custom_offset_duration_and_title() {
        let date = d(2026, 1, 3);
        let parsed = schedule(vec![ScheduleDay::new(
            date,
            "CONSULTS",
            AppointmentTime { hour: 9, minute: 0 },
        )]);
        let config = ShiftWindowConfig {
            shift_duration_minutes: 240,
            offset_before_minutes: 45,
            title: Some("Consult support".into()),
            ..ShiftWindowConfig::new("Lobby", "Greeter")
        };

        let drafts = generate_shift_drafts(&parsed, &config).unwrap();

        assert_eq!(drafts[0].start_time, at(date, 8, 15));
        assert_eq!(drafts[0].end_time, at(date, 12, 15));
        assert_eq!(drafts[0].title, "Consult support");
    }

    #[test]
    fn early_appointment_rolls_into_previous_day() {
        let date = d(2026, 3, 1);
        let parsed = schedule(vec![ScheduleDay::new(
            date,
            "DE",
            AppointmentTime { hour: 0, minute: 15 },
        )]);

        let drafts = generate_shift_drafts(&parsed, &ShiftWindowConfig::default()).unwrap();

        assert_eq!(drafts[0].date, date);
        assert_eq!(drafts[0].start_time, at(d(2026, 2, 28), 23, 45));
        assert_eq!(drafts[0].end_time, at(date, 1, 45));
    }

    #[test]
    fn output_follows_schedule_order() {
        let parsed = schedule(vec![
            ScheduleDay::new(d(2026, 1, 2), "DE", AppointmentTime { hour: 8, minute: 30 }),
            ScheduleDay::new(d(2026, 1, 3), "MM", AppointmentTime { hour: 9, minute: 0 }),
            ScheduleDay::new(d(2026, 1, 12), "DE", AppointmentTime { hour: 7, minute: 0 }),
        ]);

        let titles: Vec<_> = generate_shift_drafts(&parsed, &ShiftWindowConfig::default())
            .unwrap()
            .into_iter()
            .map(|s| s.title)
            .collect();
        assert_eq!(titles, vec!["RAL - Jan 2", "RAL - Jan 3", "RAL - Jan 12"]);
    }

    #[test]
    fn drafts_serialize_camel_case() {
        let parsed = schedule(vec![ScheduleDay::new(
            d(2026, 1, 2),
            "DE",
            AppointmentTime { hour: 8, minute: 30 },
        )]);
        let drafts = generate_shift_drafts(&parsed, &ShiftWindowConfig::new("Zone A", "Clinic")).unwrap();

        let json: serde_json::Value = serde_json::from_str(&drafts_to_json(&drafts).unwrap()).unwrap();
        assert_eq!(json[0]["startTime"], "2026-01-02T08:00:00");
        assert_eq!(json[0]["endTime"], "2026-01-02T10:00:00");
        assert_eq!(json[0]["zoneName"], "Zone A");
        assert_eq!(json[0]["shiftType"], "Clinic");
    }

    #[test]
    fn out_of_range_windows_are_errors() {
        let parsed = schedule(vec![ScheduleDay::new(
            d(2026, 1, 2),
            "DE",
            AppointmentTime { hour: 8, minute: 30 },
        )]);

        for config in [
            ShiftWindowConfig {
                offset_before_minutes: 525_960_000_000,
                ..ShiftWindowConfig::default()
            },
            ShiftWindowConfig {
                offset_before_minutes: i64::MIN,
                ..ShiftWindowConfig::default()
            },
            ShiftWindowConfig {
                shift_duration_minutes: i64::MAX,
                ..ShiftWindowConfig::default()
            },
            ShiftWindowConfig {
                shift_duration_minutes: 0,
                ..ShiftWindowConfig::default()
            },
        ] {
            let err = generate_shift_drafts(&parsed, &config).unwrap_err();
            assert!(matches!(err, ShiftDocError::InvalidShiftWindow(_)), "{config:?}");
        }
    }

    #[test]
    fn day_long_bounds_are_accepted() {
        let date = d(2026, 1, 2);
        let parsed = schedule(vec![ScheduleDay::new(date, "DE", AppointmentTime { hour: 8, minute: 0 })]);
        let config = ShiftWindowConfig {
            shift_duration_minutes: MAX_WINDOW_MINUTES,
            offset_before_minutes: -MAX_WINDOW_MINUTES,
            ..ShiftWindowConfig::default()
        };

        let drafts = generate_shift_drafts(&parsed, &config).unwrap();
        assert_eq!(drafts[0].start_time, at(d(2026, 1, 3), 8, 0));
        assert_eq!(drafts[0].end_time, at(d(2026, 1, 4), 8, 0));
    }

    #[test]
    fn config_deserializes_with_defaults() {
        let config: ShiftWindowConfig = toml::from_str("zone_name = \"Lobby\"").unwrap();
        assert_eq!(config.zone_name, "Lobby");
        assert_eq!(config.shift_duration_minutes, 120);
        assert_eq!(config.offset_before_minutes, 30);
        assert_eq!(config.title, None);
    }
}
