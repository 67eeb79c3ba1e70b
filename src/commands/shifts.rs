use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::ValueEnum;
use shiftdoc_core::config::ShiftDocConfig;
use shiftdoc_core::ics::{IcsOptions, generate_ics};
use shiftdoc_core::shift::drafts_to_json;
use shiftdoc_core::vocabulary::MONTH_NAMES;
use shiftdoc_core::{ParsedSchedule, ShiftWindowConfig, generate_shift_drafts, parse_schedule};
use tracing::debug;

use crate::commands::{read_input, require_clean};
use crate::render::{pluralize, render_shifts};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Ics,
}

pub struct ShiftsArgs {
    pub input: PathBuf,
    pub zone: Option<String>,
    pub shift_type: Option<String>,
    pub duration: Option<String>,
    pub offset: Option<String>,
    pub title: Option<String>,
    pub timezone: Option<String>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub strict: bool,
}

impl ShiftsArgs {
    /// Flags take precedence over the config file.
    fn window_config(&self, mut config: ShiftWindowConfig) -> Result<ShiftWindowConfig> {
        if let Some(zone) = &self.zone {
            config.zone_name = zone.clone();
        }
        if let Some(shift_type) = &self.shift_type {
            config.shift_type = shift_type.clone();
        }
        if let Some(duration) = &self.duration {
            config.shift_duration_minutes = parse_minutes("duration", duration)?;
        }
        if let Some(offset) = &self.offset {
            config.offset_before_minutes = parse_minutes("offset", offset)?;
        }
        if self.title.is_some() {
            config.title = self.title.clone();
        }

        config.validate()?;
        Ok(config)
    }
}

pub fn run(args: ShiftsArgs) -> Result<()> {
    let cfg = ShiftDocConfig::load().context("Could not load configuration")?;
    let window = args.window_config(cfg.shift)?;
    debug!(?window, "Effective shift window");

    let text = read_input(&args.input)?;
    let schedule = parse_schedule(&text);
    require_clean(&schedule, args.strict)?;

    let drafts = generate_shift_drafts(&schedule, &window)?;

    let rendered = match args.format {
        OutputFormat::Table => format!("{}\n", render_shifts(&drafts)),
        OutputFormat::Json => format!("{}\n", drafts_to_json(&drafts)?),
        OutputFormat::Ics => {
            let options = IcsOptions {
                calendar_name: calendar_name(&schedule),
                timezone: args.timezone.clone().or(cfg.timezone),
            };
            generate_ics(&drafts, &options)?
        }
    };

    match &args.output {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("Could not write {}", path.display()))?;
            eprintln!(
                "Wrote {} {} to {}",
                drafts.len(),
                pluralize("shift", drafts.len()),
                path.display()
            );
        }
        None => print!("{rendered}"),
    }

    Ok(())
}

/// Parse a humantime duration ("2h", "1h30m") into minutes. Durations with a
/// seconds remainder are rejected rather than rounded.
fn parse_minutes(flag: &str, input: &str) -> Result<i64> {
    let std_dur = humantime::parse_duration(input)
        .map_err(|e| anyhow::anyhow!("Invalid {} '{}': {}", flag, input, e))?;
    let chrono_dur = chrono::Duration::from_std(std_dur).context("Duration too large")?;

    if chrono_dur.subsec_nanos() != 0 || chrono_dur.num_seconds() % 60 != 0 {
        anyhow::bail!("Invalid {} '{}': must be a whole number of minutes", flag, input);
    }
    Ok(chrono_dur.num_minutes())
}

fn calendar_name(schedule: &ParsedSchedule) -> Option<String> {
    let month = MONTH_NAMES.get(schedule.month as usize)?;
    if schedule.location_code.is_empty() {
        return None;
    }
    Some(format!("{} {} {}", schedule.location_code, month, schedule.year))
}
