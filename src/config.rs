//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::services::NavigationConfig;

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "SPRITEDYE_CONFIG_DIR";

/// Grouping behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupingConfig {
    /// Report characters whose class is missing from the declared ordering.
    ///
    /// They are left out of the grouped index either way; this only controls
    /// whether the CLI prints a warning for each.
    #[serde(default = "default_warn_unordered")]
    pub warn_unordered: bool,
}

fn default_warn_unordered() -> bool {
    true
}

impl Default for GroupingConfig {
    fn default() -> Self {
        Self {
            warn_unordered: default_warn_unordered(),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/spritedye/config.toml`
/// - macOS: `~/Library/Application Support/spritedye/config.toml`
/// - Windows: `%APPDATA%\spritedye\config.toml`
///
/// Set `SPRITEDYE_CONFIG_DIR` to use a different directory.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Config {
    /// Keyboard navigation settings
    #[serde(default)]
    pub navigation: NavigationConfig,
    /// Grouping settings
    #[serde(default)]
    pub grouping: GroupingConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the config directory path.
    ///
    /// Uses `SPRITEDYE_CONFIG_DIR` when set, otherwise the platform config
    /// directory joined with `spritedye`.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|dir| !dir.is_empty()) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join("spritedye");

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from a specific file, defaulting when it is missing.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))
    }

    /// Saves configuration to the config file using atomic write.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to a specific file.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(config_dir) = config_path.parent() {
            fs::create_dir_all(config_dir).context(format!(
                "Failed to create config directory: {}",
                config_dir.display()
            ))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }
}
