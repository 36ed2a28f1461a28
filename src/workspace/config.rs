//! Configuration primitives for the quickcreate picker.
//!
//! Stored in a machine-readable TOML file located at:
//!   $QUICKCREATE_HOME/config.toml when the variable is set
//!   %APPDATA%/quickcreate/config.toml on Windows
//!   $XDG_CONFIG_HOME/quickcreate/config.toml on Linux
//!   ~/Library/Application Support/quickcreate/config.toml on macOS
//!
//! Every section falls back to defaults that reproduce the stock picker
//! behaviour, so a missing or partial file is always valid.

use serde::{Deserialize, Serialize};

/// Root configuration persisted per installation.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PickerConfig {
    /// Folder discovery bounds used once per session.
    #[serde(default)]
    pub enumeration: EnumerationSettings,
    /// Suggestion list shaping.
    #[serde(default)]
    pub suggestions: SuggestionSettings,
    /// Activity log destination.
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Limits applied while snapshotting the folder tree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EnumerationSettings {
    /// Deepest level (relative to the root) that is listed. Folders at this
    /// depth are included but not expanded.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
    /// Directory names that are never entered.
    #[serde(default = "default_excluded_names")]
    pub excluded_names: Vec<String>,
    /// Whether names starting with `.` are skipped.
    #[serde(default = "default_skip_hidden")]
    pub skip_hidden: bool,
}

impl Default for EnumerationSettings {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
            excluded_names: default_excluded_names(),
            skip_hidden: default_skip_hidden(),
        }
    }
}

const fn default_max_depth() -> usize {
    10
}

fn default_excluded_names() -> Vec<String> {
    vec!["node_modules".to_string()]
}

const fn default_skip_hidden() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SuggestionSettings {
    /// Maximum number of matching folders listed for a simple name.
    #[serde(default = "default_match_limit")]
    pub match_limit: usize,
    /// List the contents of a typed directory alongside the create record.
    #[serde(default = "default_browse_entries")]
    pub browse_entries: bool,
}

impl Default for SuggestionSettings {
    fn default() -> Self {
        Self {
            match_limit: default_match_limit(),
            browse_entries: default_browse_entries(),
        }
    }
}

const fn default_match_limit() -> usize {
    10
}

const fn default_browse_entries() -> bool {
    false
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoggingSettings {
    #[serde(default = "default_logging_enabled")]
    pub enabled: bool,
    /// Overrides the default `activity.jsonl` location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            enabled: default_logging_enabled(),
            path: None,
        }
    }
}

const fn default_logging_enabled() -> bool {
    true
}

/// Standard relative path to the config file (resolved per OS at runtime).
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Standard activity log file name inside the data directory.
pub const ACTIVITY_LOG_FILE_NAME: &str = "activity.jsonl";

use anyhow::{Context, Result};
use directories::BaseDirs;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Returns the directory holding `config.toml`.
///
/// Order of precedence:
/// 1. `QUICKCREATE_HOME` environment variable.
/// 2. OS-specific config directory via `directories::BaseDirs`.
pub fn config_dir() -> Result<PathBuf> {
    if let Ok(path) = env::var("QUICKCREATE_HOME") {
        return Ok(PathBuf::from(path));
    }
    let base_dirs = BaseDirs::new().context("Unable to determine OS config directory")?;
    Ok(base_dirs.config_dir().join("quickcreate"))
}

/// Returns the directory holding the activity log.
pub fn data_dir() -> Result<PathBuf> {
    if let Ok(path) = env::var("QUICKCREATE_HOME") {
        return Ok(PathBuf::from(path));
    }
    let base_dirs = BaseDirs::new().context("Unable to determine OS data directory")?;
    Ok(base_dirs.data_dir().join("quickcreate"))
}

/// Path to the config file.
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Loads the configuration from disk or returns defaults.
pub fn load_or_default() -> Result<PickerConfig> {
    load_from(&config_file_path()?)
}

/// Loads the configuration at `path`, falling back to defaults when absent.
pub fn load_from(path: &Path) -> Result<PickerConfig> {
    if path.exists() {
        let data = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        let cfg: PickerConfig = toml::from_str(&data)
            .with_context(|| format!("Failed to parse config file {:?}", path))?;
        Ok(cfg)
    } else {
        Ok(PickerConfig::default())
    }
}

/// Persists the configuration to disk.
pub fn save(config: &PickerConfig) -> Result<()> {
    save_to(config, &config_file_path()?)
}

pub fn save_to(config: &PickerConfig, path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let data = toml::to_string_pretty(config)?;
    fs::write(path, data).with_context(|| format!("Failed to write config file {:?}", path))?;
    Ok(())
}

impl PickerConfig {
    /// Where activity events go, or `None` when logging is switched off.
    pub fn activity_log_path(&self) -> Result<Option<PathBuf>> {
        if !self.logging.enabled {
            return Ok(None);
        }
        match &self.logging.path {
            Some(path) => Ok(Some(path.clone())),
            None => Ok(Some(data_dir()?.join(ACTIVITY_LOG_FILE_NAME))),
        }
    }
}
