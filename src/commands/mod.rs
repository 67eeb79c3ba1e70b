pub mod config;
pub mod parse;
pub mod shifts;

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use shiftdoc_core::ParsedSchedule;
use tracing::debug;

/// Read the document text from a file, or stdin for `-`.
pub fn read_input(input: &Path) -> Result<String> {
    if input == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Could not read schedule from stdin")?;
        return Ok(text);
    }

    debug!(path = %input.display(), "Reading schedule");
    std::fs::read_to_string(input)
        .with_context(|| format!("Could not read schedule {}", input.display()))
}

/// Shared `--strict` check: any diagnostic is fatal.
pub fn require_clean(schedule: &ParsedSchedule, strict: bool) -> Result<()> {
    if strict && !schedule.is_clean() {
        anyhow::bail!(
            "Schedule has problems:\n  {}",
            schedule.error_messages().join("\n  ")
        );
    }
    Ok(())
}
