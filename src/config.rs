//! Configuration file and data file resolution
//!
//! The optional config lives at `dirs::config_dir()/sch/config.toml`
//! (override the directory with `SCH_CONFIG_DIR`):
//!
//! ```toml
//! data_file = "/home/me/schedule-list"
//! show_headline = true
//! ```
//!
//! The schedule file is chosen in this order: `--file`, `SCH_FILE`,
//! `data_file` from the config, `$MYTOOL/sch2/schedule-list`, and finally
//! `dirs::data_dir()/sch/schedule-list`.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path to the schedule file
    pub data_file: Option<PathBuf>,
    /// Print the "today" line above the listing
    pub show_headline: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: None,
            show_headline: true,
        }
    }
}

impl Config {
    /// Load the config from its default location, or defaults if absent.
    pub fn load() -> Result<Self> {
        Self::load_from(config_dir().join("config.toml"))
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        Ok(config)
    }

    /// Pick the schedule file, preferring an explicit command-line path.
    pub fn data_file(&self, cli_file: Option<PathBuf>) -> PathBuf {
        self.data_file_with(cli_file, |key| std::env::var_os(key))
    }

    /// Same as `data_file`, reading environment variables through `env`.
    pub fn data_file_with<F>(&self, cli_file: Option<PathBuf>, env: F) -> PathBuf
    where
        F: Fn(&str) -> Option<OsString>,
    {
        if let Some(path) = cli_file {
            return path;
        }
        if let Some(path) = env("SCH_FILE") {
            return PathBuf::from(path);
        }
        if let Some(path) = &self.data_file {
            return path.clone();
        }
        if let Some(tool_dir) = env("MYTOOL") {
            return PathBuf::from(tool_dir).join("sch2").join("schedule-list");
        }
        data_dir().join("schedule-list")
    }
}

#[must_use]
pub fn config_dir() -> PathBuf {
    if let Some(override_dir) = std::env::var_os("SCH_CONFIG_DIR") {
        return PathBuf::from(override_dir);
    }
    dirs::config_dir()
        .map(|d| d.join("sch"))
        .unwrap_or_else(|| PathBuf::from(".sch"))
}

#[must_use]
pub fn data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join("sch"))
        .unwrap_or_else(|| PathBuf::from(".sch"))
}
