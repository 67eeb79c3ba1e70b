//! Clinic schedule document parsing and shift-window generation.
//!
//! The input is the flat text of a tabular monthly calendar (as produced by
//! a word-processing document reader). This crate recovers the calendar's
//! day/activity structure from token order alone, selects each day's
//! appointment, and turns those appointments into shift drafts:
//! - `parse` reads the text into a [`ParsedSchedule`]
//! - `shift` turns schedule days into [`ShiftDraft`]s
//! - `ics` exports drafts as an iCalendar file
//! - `config` loads the shift defaults from ~/.config/shiftdoc/config.toml

pub mod calendar_month;
pub mod config;
pub mod error;
pub mod ics;
pub mod parse;
pub mod schedule;
pub mod shift;
pub mod token;
pub mod vocabulary;

pub use error::{ShiftDocError, ShiftDocResult};
pub use parse::parse_schedule;
pub use schedule::{ParseDiagnostic, ParsedSchedule, ScheduleDay};
pub use shift::{ShiftDraft, ShiftWindowConfig, generate_shift_drafts};
