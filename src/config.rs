use crate::constants::{
    MAX_HINT_FADE_MS, MAX_MAX_WIDTH, MAX_SWIPE_THRESHOLD, MAX_UNITS_PER_COLUMN, MIN_MAX_WIDTH,
    MIN_SWIPE_THRESHOLD, MIN_UNITS_PER_COLUMN,
};
use crate::types::Config;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "config.json";

pub struct ConfigStore {
    config_dir: PathBuf,
}

impl ConfigStore {
    pub fn new() -> Result<Self> {
        let project_dirs =
            ProjectDirs::from("", "", "podium").context("Failed to determine config directory")?;

        Self::with_dir(project_dirs.config_dir())
    }

    pub fn with_dir(dir: &Path) -> Result<Self> {
        let config_dir = dir.to_path_buf();

        // Create config directory if it doesn't exist
        if !config_dir.exists() {
            fs::create_dir_all(&config_dir).context("Failed to create config directory")?;
        }

        Ok(ConfigStore { config_dir })
    }

    pub fn load_config(&self) -> Result<Config> {
        let config_path = self.config_dir.join(CONFIG_FILE);

        if !config_path.exists() {
            let config = Config::default();
            self.save_config(&config)?;
            return Ok(config);
        }

        let content = fs::read_to_string(&config_path).context("Failed to read config file")?;

        let config: Config = serde_json::from_str(&content).unwrap_or_else(|e| {
            tracing::warn!("Failed to parse config file: {}. Using defaults.", e);
            Config::default()
        });

        Ok(validate(config))
    }

    pub fn save_config(&self, config: &Config) -> Result<()> {
        let config_path = self.config_dir.join(CONFIG_FILE);
        let content = serde_json::to_string_pretty(config).context("Failed to serialize config")?;

        fs::write(&config_path, content).context("Failed to write config file")?;

        Ok(())
    }
}

/// Clamp values into their supported ranges
pub fn validate(mut config: Config) -> Config {
    config.swipe_threshold = if config.swipe_threshold.is_finite() {
        config
            .swipe_threshold
            .clamp(MIN_SWIPE_THRESHOLD, MAX_SWIPE_THRESHOLD)
    } else {
        Config::default().swipe_threshold
    };
    config.swipe_units_per_column = if config.swipe_units_per_column.is_finite() {
        config
            .swipe_units_per_column
            .clamp(MIN_UNITS_PER_COLUMN, MAX_UNITS_PER_COLUMN)
    } else {
        Config::default().swipe_units_per_column
    };
    config.hint_fade_ms = config.hint_fade_ms.min(MAX_HINT_FADE_MS);
    config.max_width = config
        .max_width
        .map(|w| w.clamp(MIN_MAX_WIDTH, MAX_MAX_WIDTH));
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_written_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::with_dir(dir.path()).unwrap();
        let config = store.load_config().unwrap();
        assert_eq!(config, Config::default());
        assert!(dir.path().join(CONFIG_FILE).exists());
    }

    #[test]
    fn test_values_clamped_on_load() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE),
            r#"{"swipe_threshold": 2.0, "swipe_units_per_column": 100.0, "hint_fade_ms": 60000, "max_width": 10}"#,
        )
        .unwrap();

        let config = ConfigStore::with_dir(dir.path())
            .unwrap()
            .load_config()
            .unwrap();
        assert_eq!(config.swipe_threshold, MIN_SWIPE_THRESHOLD);
        assert_eq!(config.swipe_units_per_column, MAX_UNITS_PER_COLUMN);
        assert_eq!(config.hint_fade_ms, MAX_HINT_FADE_MS);
        assert_eq!(config.max_width, Some(MIN_MAX_WIDTH));
        assert!(config.show_hint);
    }

    #[test]
    fn test_corrupt_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "{ not json").unwrap();
        let config = ConfigStore::with_dir(dir.path())
            .unwrap()
            .load_config()
            .unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_round_trip_partial_fields() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::with_dir(dir.path()).unwrap();
        let config = Config {
            show_hint: false,
            max_width: Some(90),
            ..Config::default()
        };
        store.save_config(&config).unwrap();
        assert_eq!(store.load_config().unwrap(), config);
    }
}
