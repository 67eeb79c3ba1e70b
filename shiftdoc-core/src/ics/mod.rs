//! iCalendar export of shift drafts.
//!
//! Lets an operator preview a month of generated shifts in any calendar
//! application before they are imported.

mod generate;

pub use generate::{IcsOptions, draft_uid, generate_ics};
