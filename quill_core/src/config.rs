//! Configuration file support for Quill.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/quill/config.toml`.
//! All fields have defaults, so a missing or partial file is fine.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Formatting and transport configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// chrono strftime pattern for line timestamps
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,

    /// Suffix pattern for date-rolled log files
    #[serde(default = "default_rolling_date_pattern")]
    pub rolling_date_pattern: String,

    /// chrono strftime pattern used in timestamped log file names
    #[serde(default = "default_file_date_pattern")]
    pub file_date_pattern: String,

    /// Directory for rolled log files
    #[serde(default = "default_log_directory")]
    pub log_directory: PathBuf,

    /// Register a console transport as soon as the facade is created
    #[serde(default)]
    pub log_to_console: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timestamp_format: default_timestamp_format(),
            rolling_date_pattern: default_rolling_date_pattern(),
            file_date_pattern: default_file_date_pattern(),
            log_directory: default_log_directory(),
            log_to_console: false,
        }
    }
}

// Default value functions
fn default_timestamp_format() -> String {
    "%H:%M:%S%.3f".into()
}

fn default_rolling_date_pattern() -> String {
    "_%Y-%m-%d.log".into()
}

fn default_file_date_pattern() -> String {
    "%Y%m%d-%H%M".into()
}

fn default_log_directory() -> PathBuf {
    PathBuf::from("rotate")
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| {
            let home = std::env::var("HOME")
                .expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
        base.join("quill").join("config.toml")
    }

    /// Save the current configuration to the default path
    pub fn save(&self) -> Result<()> {
        let config_path = Self::default_config_path();
        self.save_to(&config_path)
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.timestamp_format, "%H:%M:%S%.3f");
        assert_eq!(config.file_date_pattern, "%Y%m%d-%H%M");
        assert_eq!(config.log_directory, PathBuf::from("rotate"));
        assert!(!config.log_to_console);
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(config.timestamp_format, parsed.timestamp_format);
        assert_eq!(config.rolling_date_pattern, parsed.rolling_date_pattern);
        assert_eq!(config.log_to_console, parsed.log_to_console);
    }

    #[test]
    fn test_partial_config() {
        let toml_str = r#"
log_to_console = true
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert!(config.log_to_console);
        assert_eq!(config.timestamp_format, "%H:%M:%S%.3f"); // default
    }

    #[test]
    fn test_save_writes_default_config_path() {
        let temp_dir = tempfile::tempdir().unwrap();
        std::env::set_var("XDG_CONFIG_HOME", temp_dir.path());

        let mut config = Config::default();
        config.log_to_console = true;
        config.save().unwrap();

        let config_path = Config::default_config_path();
        assert!(config_path.starts_with(temp_dir.path()));
        assert!(config_path.exists());

        let loaded = Config::load_from(&config_path).unwrap();
        assert!(loaded.log_to_console);

        std::env::remove_var("XDG_CONFIG_HOME");
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("quill/config.toml");

        let mut config = Config::default();
        config.log_to_console = true;
        config.file_date_pattern = "%Y%m%d".into();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert!(loaded.log_to_console);
        assert_eq!(loaded.file_date_pattern, "%Y%m%d");
    }
}
