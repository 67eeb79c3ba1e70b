//! ICS generation for shift drafts.

use chrono::NaiveDateTime;
use chrono_tz::Tz;
use icalendar::{Calendar, Component, EventLike, Property};

use crate::error::{ShiftDocError, ShiftDocResult};
use crate::shift::ShiftDraft;

/// Options for calendar export.
#[derive(Debug, Clone, Default)]
pub struct IcsOptions {
    /// Shown by calendar apps as the calendar's name (X-WR-CALNAME).
    pub calendar_name: Option<String>,
    /// IANA time zone for DTSTART/DTEND. Times are floating when unset.
    pub timezone: Option<String>,
}

/// Generate a VCALENDAR with one VEVENT per shift draft.
pub fn generate_ics(drafts: &[ShiftDraft], options: &IcsOptions) -> ShiftDocResult<String> {
    let tzid = match &options.timezone {
        Some(name) => Some(validate_timezone(name)?),
        None => None,
    };

    let mut cal = Calendar::new();
    if let Some(ref name) = options.calendar_name {
        cal.name(name);
    }

    for draft in drafts {
        let mut ics_event = icalendar::Event::new();
        ics_event.uid(&draft_uid(draft));
        ics_event.summary(&draft.title);

        add_datetime_property(&mut ics_event, "DTSTART", &draft.start_time, tzid.as_deref());
        add_datetime_property(&mut ics_event, "DTEND", &draft.end_time, tzid.as_deref());

        if !draft.zone_name.is_empty() {
            ics_event.location(&draft.zone_name);
        }
        if !draft.shift_type.is_empty() {
            ics_event.add_property("CATEGORIES", &draft.shift_type);
        }

        cal.push(ics_event.done());
    }

    let cal = cal.done();
    Ok(strip_ics_bloat(&cal.to_string()))
}

/// Stable UID so re-exporting the same month replaces rather than
/// duplicates events: `<start>-<zone-slug>@shiftdoc`.
pub fn draft_uid(draft: &ShiftDraft) -> String {
    let zone = slugify(&draft.zone_name);
    let start = draft.start_time.format("%Y%m%dT%H%M");
    if zone.is_empty() {
        format!("{start}@shiftdoc")
    } else {
        format!("{start}-{zone}@shiftdoc")
    }
}

fn validate_timezone(name: &str) -> ShiftDocResult<String> {
    name.parse::<Tz>()
        .map(|tz| tz.name().to_string())
        .map_err(|_| ShiftDocError::InvalidTimezone(name.to_string()))
}

fn add_datetime_property(
    ics_event: &mut icalendar::Event,
    name: &str,
    time: &NaiveDateTime,
    tzid: Option<&str>,
) {
    let value = time.format("%Y%m%dT%H%M%S").to_string();
    match tzid {
        Some(tzid) => {
            let mut prop = Property::new(name, value);
            prop.add_parameter("TZID", tzid);
            ics_event.append_property(prop);
        }
        None => {
            ics_event.add_property(name, value);
        }
    }
}

/// Replace the icalendar crate's PRODID and drop the default CALSCALE.
fn strip_ics_bloat(ics: &str) -> String {
    let mut result = String::with_capacity(ics.len());

    for line in ics.lines() {
        if line.starts_with("PRODID:") {
            result.push_str("PRODID:SHIFTDOC\r\n");
            continue;
        }
        if line == "CALSCALE:GREGORIAN" {
            continue;
        }
        result.push_str(line);
        result.push_str("\r\n");
    }

    result
}

fn slugify(s: &str) -> String {
    s.to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}
