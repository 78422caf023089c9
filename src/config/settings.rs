//! User settings for tally-cli
//!
//! A small JSON-backed preferences file: currency symbol for report output
//! and the width of the terminal chart.

use serde::{Deserialize, Serialize};
use std::fs;

use super::paths::TallyPaths;
use crate::error::{TallyError, TallyResult};

/// User settings for tally-cli
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used in summaries and the register
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Width (in characters) of chart bars
    #[serde(default = "default_chart_width")]
    pub chart_width: usize,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_chart_width() -> usize {
    40
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            chart_width: default_chart_width(),
        }
    }
}

impl Settings {
    /// Load settings from disk, creating the file with defaults if absent
    pub fn load_or_create(paths: &TallyPaths) -> TallyResult<Self> {
        let path = paths.settings_file();

        if path.exists() {
            let contents = fs::read_to_string(&path).map_err(|e| {
                TallyError::Config(format!("Failed to read {}: {}", path.display(), e))
            })?;
            let settings = serde_json::from_str(&contents).map_err(|e| {
                TallyError::Config(format!("Failed to parse {}: {}", path.display(), e))
            })?;
            Ok(settings)
        } else {
            let settings = Self::default();
            settings.save(paths)?;
            Ok(settings)
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TallyPaths) -> TallyResult<()> {
        paths.ensure_directories()?;
        let json = serde_json::to_string_pretty(self)?;
        fs::write(paths.settings_file(), json)
            .map_err(|e| TallyError::Config(format!("Failed to write settings: {}", e)))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_or_create_writes_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TallyPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert!(!paths.settings_file().exists());
        let settings = Settings::load_or_create(&paths).unwrap();
        assert!(paths.settings_file().exists());
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.chart_width, 40);
    }

    #[test]
    fn test_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TallyPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.currency_symbol = "€".to_string();
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "€");
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TallyPaths::with_base_dir(temp_dir.path().to_path_buf());

        fs::write(paths.settings_file(), "{}").unwrap();
        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.schema_version, 1);
        assert_eq!(settings.chart_width, 40);
    }
}
