//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{CONFIG_DIR_ENV, DEFAULT_MAX_ATTEMPTS, MAX_PALETTE_COUNT};
use crate::models::{ColorFormat, HarmonyRule};
use crate::services::PaletteBuilder;

/// Palette generation defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteConfig {
    /// Number of colors per palette
    #[serde(default = "default_count")]
    pub count: usize,
    /// Output format ("hex" or "rgb")
    #[serde(default)]
    pub format: ColorFormat,
    /// Harmony rule ("complementary", "analogous", "monochromatic", "triad", "single")
    #[serde(default)]
    pub harmony: HarmonyRule,
    /// Base-color draws allowed before generation gives up
    #[serde(default = "default_max_attempts")]
    pub max_attempts: usize,
}

/// Default palette size
fn default_count() -> usize {
    5
}

fn default_max_attempts() -> usize {
    DEFAULT_MAX_ATTEMPTS
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            count: default_count(),
            format: ColorFormat::default(),
            harmony: HarmonyRule::default(),
            max_attempts: default_max_attempts(),
        }
    }
}

impl PaletteConfig {
    /// Builder honouring the configured attempt cap.
    #[must_use]
    pub fn builder(&self) -> PaletteBuilder {
        PaletteBuilder::new(self.max_attempts)
    }
}

/// Terminal display preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Draw a colored block next to each color label
    #[serde(default = "default_swatches")]
    pub swatches: bool,
}

fn default_swatches() -> bool {
    true
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            swatches: default_swatches(),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/hueforge/config.toml`
/// - macOS: `~/Library/Application Support/hueforge/config.toml`
/// - Windows: `%APPDATA%\hueforge\config.toml`
///
/// Setting `HUEFORGE_CONFIG_DIR` replaces the directory.
///
/// # Validation
///
/// - `palette.count` must be between 1 and 1000
/// - `palette.max_attempts` must be at least 1
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Palette generation defaults
    #[serde(default)]
    pub palette: PaletteConfig,
    /// Display preferences
    #[serde(default)]
    pub display: DisplayConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the config directory path.
    ///
    /// Uses `HUEFORGE_CONFIG_DIR` when set, otherwise the platform directory:
    ///
    /// - Linux: `~/.config/hueforge/`
    /// - macOS: `~/Library/Application Support/hueforge/`
    /// - Windows: `%APPDATA%\hueforge\`
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join("hueforge");

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

    /// Loads configuration from an explicit path, defaulting when it is missing.
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

    /// Saves configuration to the config file using atomic write.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to an explicit path.
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

        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        // Atomic rename
        fs::rename(&temp_path, config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.palette.count == 0 || self.palette.count > MAX_PALETTE_COUNT {
            anyhow::bail!(
                "Palette count must be between 1 and {}, got {}",
                MAX_PALETTE_COUNT,
                self.palette.count
            );
        }

        if self.palette.max_attempts == 0 {
            anyhow::bail!("max_attempts must be at least 1");
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
        assert_eq!(config.palette.count, 5);
        assert_eq!(config.palette.format, ColorFormat::Hex);
        assert_eq!(config.palette.harmony, HarmonyRule::Analogous);
        assert_eq!(config.palette.max_attempts, DEFAULT_MAX_ATTEMPTS);
        assert!(config.display.swatches);
    }

    #[test]
    fn test_config_validate() {
        let mut config = Config::new();
        assert!(config.validate().is_ok());

        config.palette.count = 0;
        assert!(config.validate().is_err());

        config.palette.count = MAX_PALETTE_COUNT + 1;
        assert!(config.validate().is_err());

        config.palette.count = 3;
        config.palette.max_attempts = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::new();
        config.palette.count = 8;
        config.palette.format = ColorFormat::Rgb;
        config.palette.harmony = HarmonyRule::Triadic;
        config.display.swatches = false;

        config.save_to(&config_file).unwrap();
        let loaded = Config::load_from(&config_file).unwrap();

        assert_eq!(loaded, config);
        assert!(!config_file.with_extension("toml.tmp").exists());
    }

    #[test]
    fn test_config_load_missing_file_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let loaded = Config::load_from(&temp_dir.path().join("absent.toml")).unwrap();
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn test_config_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        fs::write(&config_file, "[palette]\nharmony = \"triad\"\n").unwrap();

        let loaded = Config::load_from(&config_file).unwrap();
        assert_eq!(loaded.palette.harmony, HarmonyRule::Triadic);
        assert_eq!(loaded.palette.count, 5);
        assert!(loaded.display.swatches);
    }

    #[test]
    fn test_config_rejects_invalid_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");

        fs::write(&config_file, "[palette]\nformat = \"hsl\"\n").unwrap();
        assert!(Config::load_from(&config_file).is_err());

        fs::write(&config_file, "[palette]\ncount = 0\n").unwrap();
        assert!(Config::load_from(&config_file).is_err());
    }

    #[test]
    fn test_serialized_labels() {
        let mut config = Config::new();
        config.palette.harmony = HarmonyRule::Triadic;
        let content = toml::to_string_pretty(&config).unwrap();
        assert!(content.contains("harmony = \"triad\""));
        assert!(content.contains("format = \"hex\""));
    }
}
