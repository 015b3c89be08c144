//! Configuration management.
//!
//! Settings are read from an optional TOML file and then overridden by
//! `HARVARD_CITE_*` environment variables, with `__` separating nested keys
//! (for example `HARVARD_CITE_LOG__PATH`).
//!
//! # Configuration File Format
//!
//! ```toml
//! [log]
//! path = "harvard_citations.txt"
//! enabled = true
//!
//! [prompts]
//! require_author = false
//!
//! [display]
//! output = "plain"
//! ```

use crate::ui::ListFormat;
use crate::utils::DEFAULT_LOG_FILE;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file name looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "harvard-cite.toml";

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Citation log settings
    #[serde(default)]
    pub log: LogConfig,

    /// Field prompting settings
    #[serde(default)]
    pub prompts: PromptConfig,

    /// Output settings
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Citation log configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// File every citation is appended to
    #[serde(default = "default_log_path")]
    pub path: PathBuf,

    /// Whether citations are logged at all
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            path: default_log_path(),
            enabled: true,
        }
    }
}

fn default_log_path() -> PathBuf {
    PathBuf::from(DEFAULT_LOG_FILE)
}

fn default_true() -> bool {
    true
}

/// Prompting configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PromptConfig {
    /// Refuse to finish an author list without at least one author
    #[serde(default)]
    pub require_author: bool,
}

/// Display configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Rendering of the "view all" listing
    #[serde(default)]
    pub output: ListFormat,
}

impl Config {
    /// Save configuration to a TOML file
    pub fn save(&self, path: &Path) -> Result<(), ConfigFileError> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigFileError::Serialize(e.to_string()))?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| ConfigFileError::Io(e.to_string()))?;
        }
        std::fs::write(path, content).map_err(|e| ConfigFileError::Io(e.to_string()))
    }
}

/// Configuration file errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigFileError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Serialize error: {0}")]
    Serialize(String),
}

/// Load configuration from an optional file plus the environment
pub fn load_config(path: Option<&Path>) -> Result<Config, config::ConfigError> {
    let mut builder = config::Config::builder();
    if let Some(path) = path {
        builder = builder.add_source(config::File::from(path));
    }

    let settings = builder
        .add_source(
            config::Environment::with_prefix("HARVARD_CITE")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize()
}

/// Per-user config file location
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("harvard-cite").join("config.toml"))
}

/// Find a config file in the working directory or the user config directory
pub fn find_config_file() -> Option<PathBuf> {
    let local = PathBuf::from(LOCAL_CONFIG_FILE);
    if local.is_file() {
        return Some(local);
    }
    user_config_path().filter(|path| path.is_file())
}
