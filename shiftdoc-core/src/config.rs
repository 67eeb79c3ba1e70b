//! Global shiftdoc configuration.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::{ShiftDocError, ShiftDocResult};
use crate::shift::{DEFAULT_OFFSET_BEFORE_MINUTES, DEFAULT_SHIFT_DURATION_MINUTES, ShiftWindowConfig};

/// Environment variables with this prefix override the file, e.g.
/// `SHIFTDOC_SHIFT__ZONE_NAME=Lobby`.
static ENV_PREFIX: &str = "SHIFTDOC";

/// Configuration at ~/.config/shiftdoc/config.toml
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct ShiftDocConfig {
    /// IANA time zone used when exporting shifts as iCalendar.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,

    /// Defaults for generated shift windows.
    #[serde(default)]
    pub shift: ShiftWindowConfig,
}

impl ShiftDocConfig {
    pub fn config_path() -> ShiftDocResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ShiftDocError::Config("Could not determine config directory".into()))?
            .join("shiftdoc");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location, creating a commented-out config file
    /// on first use.
    pub fn load() -> ShiftDocResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load from `path` (which may be missing), layered under environment
    /// overrides.
    pub fn load_from(path: &Path) -> ShiftDocResult<Self> {
        let config: ShiftDocConfig = Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| ShiftDocError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| ShiftDocError::Config(e.to_string()))?;

        config.shift.validate()?;
        Ok(config)
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> ShiftDocResult<()> {
        let contents = format!(
            "\
# shiftdoc configuration

# Time zone for exported .ics files (floating times when unset):
# timezone = \"America/New_York\"

[shift]
# Zone and shift type every generated shift is assigned to:
# zone_name = \"Front Desk\"
# shift_type = \"Clinic Support\"

# Shift length, and how long before the appointment it starts:
# shift_duration_minutes = {}
# offset_before_minutes = {}

# Fixed title for every shift (defaults to \"<LOC> - <Mon> <D>\"):
# title = \"Clinic shift\"
",
            DEFAULT_SHIFT_DURATION_MINUTES, DEFAULT_OFFSET_BEFORE_MINUTES
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ShiftDocError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)?;

        Ok(())
    }

    /// Render the effective configuration as TOML.
    pub fn to_toml(&self) -> ShiftDocResult<String> {
        toml::to_string_pretty(self).map_err(|e| ShiftDocError::Serialization(e.to_string()))
    }
}
