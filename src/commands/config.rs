use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use shiftdoc_core::config::ShiftDocConfig;

pub fn run(init: bool) -> Result<()> {
    let config_path = ShiftDocConfig::config_path()?;

    if init {
        if config_path.exists() {
            println!("Config already exists: {}", config_path.display());
        } else {
            ShiftDocConfig::create_default_config(&config_path)?;
            println!("Created {}", config_path.display());
        }
        return Ok(());
    }

    let config = ShiftDocConfig::load_from(&config_path)
        .with_context(|| format!("Could not load {}", config_path.display()))?;

    println!("{}", "Paths".bold());
    println!("  Config:  {}", config_path.display());
    if !config_path.exists() {
        println!("  {}", "(not created yet, run `shiftdoc config --init`)".dimmed());
    }
    println!();
    println!("{}", "Effective configuration".bold());
    print!("{}", config.to_toml()?);

    Ok(())
}
