//! Terminal rendering for schedules and shift drafts.
//!
//! Extension traits that add colored output to shiftdoc-core types using
//! owo_colors.

use owo_colors::OwoColorize;
use shiftdoc_core::vocabulary::MONTH_NAMES;
use shiftdoc_core::{ParseDiagnostic, ParsedSchedule, ScheduleDay, ShiftDraft};

pub trait Render {
    fn render(&self) -> String;
}

impl Render for ParseDiagnostic {
    fn render(&self) -> String {
        format!("{} {}", "!".yellow(), self.to_string().yellow())
    }
}

impl Render for ScheduleDay {
    fn render(&self) -> String {
        format!(
            "{}  {:>5}  {}",
            self.date.format("%a %b %e").dimmed(),
            self.appointment_time.to_string(),
            self.appointment_type.bold()
        )
    }
}

impl Render for ShiftDraft {
    fn render(&self) -> String {
        let window = format!(
            "{} - {}",
            self.start_time.format("%a %b %e %H:%M"),
            self.end_time.format("%H:%M")
        );
        let mut line = format!("{}  {}", window, self.title.bold());
        if !self.zone_name.is_empty() {
            line.push_str(&format!("  {}", self.zone_name.dimmed()));
        }
        if !self.shift_type.is_empty() {
            line.push_str(&format!("  {}", format!("[{}]", self.shift_type).dimmed()));
        }
        line
    }
}

/// Header line, one line per day, per-type counts and any diagnostics.
pub fn render_schedule(schedule: &ParsedSchedule) -> String {
    let mut lines = Vec::new();

    match MONTH_NAMES.get(schedule.month as usize) {
        Some(month) if !schedule.location_code.is_empty() => {
            let year = if schedule.year > 0 {
                schedule.year.to_string()
            } else {
                "????".to_string()
            };
            lines.push(format!("📅 {} {} {}", schedule.location_code.bold(), month, year));
        }
        _ => lines.push(format!("📅 {}", "Unrecognized schedule".dimmed())),
    }

    if schedule.days.is_empty() {
        lines.push(format!("   {}", "No appointment days".dimmed()));
    } else {
        for day in &schedule.days {
            lines.push(format!("   {}", day.render()));
        }

        let counts: Vec<String> = schedule
            .appointment_counts()
            .into_iter()
            .map(|(kind, count)| format!("{} {}", count, kind))
            .collect();
        lines.push(String::new());
        lines.push(format!(
            "   {} {} ({})",
            schedule.days.len(),
            pluralize("day", schedule.days.len()),
            counts.join(", ")
        ));
    }

    if !schedule.errors.is_empty() {
        lines.push(String::new());
        for error in &schedule.errors {
            lines.push(format!("   {}", error.render()));
        }
    }

    lines.join("\n")
}

pub fn render_shifts(drafts: &[ShiftDraft]) -> String {
    if drafts.is_empty() {
        return "No shifts".dimmed().to_string();
    }

    let mut lines: Vec<String> = drafts.iter().map(|d| d.render()).collect();
    lines.push(String::new());
    lines.push(format!("{} {}", drafts.len(), pluralize("shift", drafts.len())));
    lines.join("\n")
}

pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}
