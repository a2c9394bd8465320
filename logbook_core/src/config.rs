//! Configuration file support for the logbook.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/logbook/config.toml`.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub export: ExportConfig,
}

/// Where the workout history snapshot lives
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_snapshot_path")]
    pub snapshot_path: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            snapshot_path: default_snapshot_path(),
        }
    }
}

/// Presentation settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// chrono format string used when showing workout dates
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
        }
    }
}

/// CSV export settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "default_export_dir")]
    pub dir: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            dir: default_export_dir(),
        }
    }
}

// Default value functions
fn data_base_dir() -> PathBuf {
    dirs::data_local_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("logbook")
}

fn default_snapshot_path() -> PathBuf {
    data_base_dir().join("snapshot.json")
}

fn default_export_dir() -> PathBuf {
    data_base_dir().join("exports")
}

fn default_date_format() -> String {
    "%d/%m/%Y".into()
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
            .unwrap_or_else(|| PathBuf::from("."))
            .join("logbook")
            .join("config.toml")
    }

    /// Save the configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }

    /// Reject settings that would only fail later, at display time
    fn validate(&self) -> Result<()> {
        let format = &self.display.date_format;
        let has_error = chrono::format::StrftimeItems::new(format)
            .any(|item| matches!(item, chrono::format::Item::Error));
        // Specifiers that need a time of day only fail when rendered
        let renders = chrono::NaiveDate::from_ymd_opt(2024, 1, 1)
            .and_then(|sample| crate::date::try_format_date(sample, format))
            .is_some();
        if format.is_empty() || has_error || !renders {
            return Err(Error::Config(format!("Invalid date_format {:?}", format)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.display.date_format, "%d/%m/%Y");
        assert!(config.data.snapshot_path.ends_with("logbook/snapshot.json"));
        assert!(config.export.dir.ends_with("logbook/exports"));
    }

    #[test]
    fn test_config_roundtrip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.data.snapshot_path = PathBuf::from("/srv/logbook/history.json");
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.data.snapshot_path, config.data.snapshot_path);
        assert_eq!(loaded.display.date_format, config.display.date_format);
    }

    #[test]
    fn test_partial_config() {
        let toml_str = r#"
[display]
date_format = "%Y-%m-%d"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.display.date_format, "%Y-%m-%d");
        assert!(config.data.snapshot_path.ends_with("snapshot.json")); // default
    }

    #[test]
    fn test_invalid_date_format_rejected() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[display]\ndate_format = \"%Q\"\n").unwrap();

        assert!(matches!(Config::load_from(&path), Err(Error::Config(_))));
    }

    #[test]
    fn test_time_of_day_date_format_rejected() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");

        for format in ["%H:%M", "%d/%m/%Y %H:%M", "%S"] {
            std::fs::write(&path, format!("[display]\ndate_format = {:?}\n", format)).unwrap();
            assert!(
                matches!(Config::load_from(&path), Err(Error::Config(_))),
                "{} should be rejected",
                format
            );
        }
    }

    #[test]
    fn test_malformed_toml_is_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[display\n").unwrap();

        assert!(matches!(Config::load_from(&path), Err(Error::Toml(_))));
    }
}
