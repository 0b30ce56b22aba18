//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::constants::{CONFIG_DIR_NAME, DEFAULT_KEY_PREFIX, LOG_FILE_NAME, STORE_FILE_NAME};

/// Theme display mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeMode {
    /// Automatically detect OS theme (dark/light)
    #[default]
    Auto,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

/// Template storage configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Store file override (defaults to `<config_dir>/store.json`)
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// Key prefix that marks a store entry as a template
    #[serde(default = "default_key_prefix")]
    pub key_prefix: String,
}

fn default_key_prefix() -> String {
    DEFAULT_KEY_PREFIX.to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: None,
            key_prefix: default_key_prefix(),
        }
    }
}

impl StorageConfig {
    /// Resolves the store file path.
    pub fn store_path(&self) -> Result<PathBuf> {
        match &self.path {
            Some(path) => Ok(path.clone()),
            None => Ok(Config::config_dir()?.join(STORE_FILE_NAME)),
        }
    }
}

/// Template export configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ExportConfig {
    /// Directory exported templates are written to (defaults to the working directory)
    #[serde(default)]
    pub directory: Option<PathBuf>,
}

impl ExportConfig {
    /// Resolves the export directory.
    #[must_use]
    pub fn export_dir(&self) -> PathBuf {
        self.directory.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UiConfig {
    /// Theme mode preference (Auto, Dark, Light)
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/LazyChecklist/config.toml`
/// - macOS: `~/Library/Application Support/LazyChecklist/config.toml`
/// - Windows: `%APPDATA%\LazyChecklist\config.toml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Template storage
    #[serde(default)]
    pub storage: StorageConfig,
    /// Template export
    #[serde(default)]
    pub export: ExportConfig,
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the platform-specific config directory path.
    ///
    /// - Linux: `~/.config/LazyChecklist/`
    /// - macOS: `~/Library/Application Support/LazyChecklist/`
    /// - Windows: `%APPDATA%\LazyChecklist\`
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(CONFIG_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Gets the path of the TUI log file.
    pub fn log_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(LOG_FILE_NAME))
    }

    /// Loads configuration from the default config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from a specific file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a file, writing the defaults there first
    /// when it does not exist yet.
    pub fn load_or_init(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            return Self::load_from(config_path);
        }

        let config = Self::new();
        config.save_to(config_path)?;
        info!("Wrote default config to {}", config_path.display());
        Ok(config)
    }

    /// Saves configuration to a specific file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(config_dir) = config_path.parent() {
            fs::create_dir_all(config_dir).context(format!(
                "Failed to create config directory: {}",
                config_dir.display()
            ))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        crate::store::file::atomic_write(config_path, &content)
    }

    /// Validates configuration values.
    ///
    /// Checks:
    /// - the key prefix contains no whitespace
    /// - the export directory, if set, is not an existing regular file
    pub fn validate(&self) -> Result<()> {
        if self.storage.key_prefix.chars().any(char::is_whitespace) {
            bail!(
                "storage.key_prefix must not contain whitespace: '{}'",
                self.storage.key_prefix
            );
        }

        if let Some(dir) = &self.export.directory {
            if dir.is_file() {
                bail!("export.directory is a file: {}", dir.display());
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_new() {
        let config = Config::new();
        assert_eq!(config.storage.path, None);
        assert_eq!(config.storage.key_prefix, "template:");
        assert_eq!(config.ui.theme_mode, ThemeMode::Auto);
        assert_eq!(config.export.export_dir(), PathBuf::from("."));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_missing_file_is_default() {
        let temp_dir = TempDir::new().unwrap();
        let loaded = Config::load_from(&temp_dir.path().join("config.toml")).unwrap();
        assert_eq!(loaded, Config::new());
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::new();
        config.storage.path = Some(temp_dir.path().join("store.json"));
        config.storage.key_prefix = "checklist/".to_string();
        config.ui.theme_mode = ThemeMode::Light;

        config.save_to(&config_file).unwrap();
        let loaded = Config::load_from(&config_file).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(
            loaded.storage.store_path().unwrap(),
            temp_dir.path().join("store.json")
        );
    }

    #[test]
    fn test_config_load_or_init_seeds_then_keeps_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("LazyChecklist").join("config.toml");

        let seeded = Config::load_or_init(&config_file).unwrap();
        assert_eq!(seeded, Config::new());
        assert!(config_file.exists());

        fs::write(&config_file, "[ui]\ntheme_mode = \"Light\"\n").unwrap();
        let loaded = Config::load_or_init(&config_file).unwrap();
        assert_eq!(loaded.ui.theme_mode, ThemeMode::Light);
    }

    #[test]
    fn test_config_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        fs::write(&config_file, "[ui]\ntheme_mode = \"Dark\"\n").unwrap();

        let loaded = Config::load_from(&config_file).unwrap();
        assert_eq!(loaded.ui.theme_mode, ThemeMode::Dark);
        assert_eq!(loaded.storage.key_prefix, "template:");
    }

    #[test]
    fn test_config_validate_rejects_bad_values() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("not_a_dir");
        fs::write(&file, "").unwrap();

        let mut config = Config::new();
        config.export.directory = Some(file);
        assert!(config.validate().is_err());

        let mut config = Config::new();
        config.storage.key_prefix = "my templates:".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_parse_error_has_context() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        fs::write(&config_file, "[storage\n").unwrap();

        let err = Config::load_from(&config_file).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
