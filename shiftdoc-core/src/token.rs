//! Tokenizing and classifying the flattened text of a schedule document.
//!
//! By the time text reaches this crate every table boundary is gone, so a
//! token only gets a meaning from its shape: a day number, an activity code
//! (optionally carrying a time), or anything else.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::vocabulary::is_no_shift_code;

/// `H:MM` or `HH:MM` on a 24-hour clock; `25:75` is not a time.
const TIME_PATTERN: &str = r"([01]?\d|2[0-3]):([0-5]\d)";

static ACTIVITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^([A-Z]+)(?:-({TIME_PATTERN}))?$")).expect("static regex must compile")
});

static TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("^{TIME_PATTERN}$")).expect("static regex must compile"));

/// Split raw extracted text into whitespace-delimited tokens.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Time of day attached to an appointment code.
///
/// Ordered by hour, then minute. Displayed as `H:MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AppointmentTime {
    pub hour: u32,
    pub minute: u32,
}

impl AppointmentTime {
    pub fn minutes_of_day(&self) -> i64 {
        i64::from(self.hour) * 60 + i64::from(self.minute)
    }
}

impl fmt::Display for AppointmentTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for AppointmentTime {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = TIME_RE
            .captures(s.trim())
            .ok_or_else(|| format!("Invalid appointment time '{s}'. Expected H:MM"))?;
        let hour = caps[1].parse().map_err(|_| format!("Invalid hour in '{s}'"))?;
        let minute = caps[2].parse().map_err(|_| format!("Invalid minute in '{s}'"))?;
        Ok(AppointmentTime { hour, minute })
    }
}

impl Serialize for AppointmentTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for AppointmentTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A coded event for one day, e.g. `DE-8:30` or `CLOSED`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub code: String,
    pub time: Option<AppointmentTime>,
}

impl Activity {
    pub fn new(code: impl Into<String>, time: Option<AppointmentTime>) -> Self {
        Activity {
            code: code.into(),
            time,
        }
    }

    /// Reserved codes (`CLOSED`, `ADMIN`) that suppress the day's shift.
    pub fn is_no_shift(&self) -> bool {
        is_no_shift_code(&self.code)
    }

    pub fn has_time(&self) -> bool {
        self.time.is_some()
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.time {
            Some(time) => write!(f, "{}-{}", self.code, time),
            None => f.write_str(&self.code),
        }
    }
}

/// What a single token looks like.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// An integer in `1..=31`.
    DayNumber(u32),
    Activity(Activity),
    Other,
}

impl Token {
    pub fn classify(raw: &str) -> Token {
        if let Some(day) = parse_day_number(raw) {
            return Token::DayNumber(day);
        }
        match parse_activity(raw) {
            Some(activity) => Token::Activity(activity),
            None => Token::Other,
        }
    }
}

/// Parse a day-of-month number (`1..=31`).
pub fn parse_day_number(raw: &str) -> Option<u32> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse::<u32>().ok().filter(|d| (1..=31).contains(d))
}

/// Parse an activity token: a reserved no-shift code in any case, an
/// uppercase code, or an uppercase code with a time (`CODE-H:MM`).
pub fn parse_activity(raw: &str) -> Option<Activity> {
    if is_no_shift_code(raw) {
        return Some(Activity::new(raw.trim().to_ascii_uppercase(), None));
    }

    let caps = ACTIVITY_RE.captures(raw)?;
    let time = match caps.get(2) {
        Some(m) => Some(m.as_str().parse().ok()?),
        None => None,
    };
    Some(Activity::new(&caps[1], time))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_collapses_whitespace() {
        let text = "  January-RAL2026\n\tSunday   Monday\r\n1 ";
        assert_eq!(tokenize(text), vec!["January-RAL2026", "Sunday", "Monday", "1"]);
        assert!(tokenize(" \n\t ").is_empty());
    }

    #[test]
    fn day_numbers_are_bounded() {
        assert_eq!(parse_day_number("1"), Some(1));
        assert_eq!(parse_day_number("31"), Some(31));
        assert_eq!(parse_day_number("07"), Some(7));
        assert_eq!(parse_day_number("0"), None);
        assert_eq!(parse_day_number("32"), None);
        assert_eq!(parse_day_number("2026"), None);
        assert_eq!(parse_day_number("+5"), None);
        assert_eq!(parse_day_number(""), None);
    }

    #[test]
    fn activity_with_time() {
        let activity = parse_activity("DE-8:30").unwrap();
        assert_eq!(activity.code, "DE");
        assert_eq!(activity.time, Some(AppointmentTime { hour: 8, minute: 30 }));

        let activity = parse_activity("MM-10:05").unwrap();
        assert_eq!(activity.time, Some(AppointmentTime { hour: 10, minute: 5 }));
    }

    #[test]
    fn out_of_range_times_are_not_activities() {
        assert_eq!(parse_activity("DE-25:75"), None);
        assert_eq!(parse_activity("DE-99:99"), None);
        assert_eq!(parse_activity("DE-24:00"), None);
        assert_eq!(parse_activity("MM-9:60"), None);
        assert_eq!(Token::classify("DE-25:75"), Token::Other);

        let latest = parse_activity("DE-23:59").unwrap();
        assert_eq!(latest.time, Some(AppointmentTime { hour: 23, minute: 59 }));
        assert!("24:00".parse::<AppointmentTime>().is_err());
        assert!("0:00".parse::<AppointmentTime>().is_ok());
    }

    #[test]
    fn bare_codes_must_be_uppercase_unless_reserved() {
        assert_eq!(parse_activity("CONSULTS"), Some(Activity::new("CONSULTS", None)));
        assert_eq!(parse_activity("closed"), Some(Activity::new("CLOSED", None)));
        assert_eq!(parse_activity("Admin"), Some(Activity::new("ADMIN", None)));
        assert_eq!(parse_activity("Consults"), None);
        assert_eq!(parse_activity("DE-830"), None);
        assert_eq!(parse_activity("DE-8:3"), None);
        assert_eq!(parse_activity("12"), None);
    }

    #[test]
    fn classify_prefers_day_numbers() {
        assert_eq!(Token::classify("3"), Token::DayNumber(3));
        assert!(matches!(Token::classify("DE-8:30"), Token::Activity(_)));
        assert_eq!(Token::classify("Sunday"), Token::Other);
        assert_eq!(Token::classify("45"), Token::Other);
    }

    #[test]
    fn appointment_time_orders_numerically() {
        let early: AppointmentTime = "8:30".parse().unwrap();
        let late: AppointmentTime = "10:00".parse().unwrap();
        assert!(early < late);
        assert_eq!(early.to_string(), "8:30");
        assert_eq!("09:05".parse::<AppointmentTime>().unwrap().to_string(), "9:05");
        assert_eq!(late.minutes_of_day(), 600);
        assert!("9".parse::<AppointmentTime>().is_err());
    }

    #[test]
    fn activity_display_round_trips_token_shape() {
        assert_eq!(parse_activity("DE-08:30").unwrap().to_string(), "DE-8:30");
        assert_eq!(parse_activity("ADMIN").unwrap().to_string(), "ADMIN");
    }
}
