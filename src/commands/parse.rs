use std::path::Path;

use anyhow::Result;
use shiftdoc_core::parse_schedule;

use crate::commands::{read_input, require_clean};
use crate::render::render_schedule;

pub fn run(input: &Path, json: bool, strict: bool) -> Result<()> {
    let text = read_input(input)?;
    let schedule = parse_schedule(&text);

    require_clean(&schedule, strict)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&schedule)?);
    } else {
        println!("{}", render_schedule(&schedule));
    }

    Ok(())
}
