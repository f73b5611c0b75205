//! CLI configuration.
//!
//! All settings live in a single `config.toml` file at
//! `~/.config/meetingmate/config.toml` by default. The file holds default
//! values for the output toggles; command-line flags OR-combine with them,
//! so a flag can switch a section on but the config cannot suppress an
//! explicit flag.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Configuration for the meetingmate CLI.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Default output settings.
    #[serde(default)]
    pub output: OutputSettings,
}

/// Default values for the output toggles.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Include the meeting details section.
    pub details: bool,

    /// Include the attendees section.
    pub attendees: bool,

    /// Emit plain text instead of markdown.
    pub plain: bool,
}

impl CliConfig {
    /// Loads configuration from the default path.
    ///
    /// A missing file is not an error; defaults are returned.
    pub fn load() -> Result<Self, String> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Loads configuration from a specific path.
    pub fn load_from(path: &PathBuf) -> Result<Self, String> {
        let content =
            std::fs::read_to_string(path).map_err(|e| format!("failed to read config: {}", e))?;
        toml::from_str(&content).map_err(|e| format!("failed to parse config: {}", e))
    }

    /// Returns the default configuration file path.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("meetingmate")
            .join("config.toml")
    }
}
