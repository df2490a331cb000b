//! # Preview Configuration
//!
//! Optional YAML file read by the `calendar-preview` binary.
//!
//! ```yaml
//! default_view: month
//! log_level: info
//! events_path: ./events.json
//! holidays_path: ./holidays.json
//! ```
//!
//! A missing file means defaults; command line flags override file values.

use serde::{Deserialize, Serialize};
use shared::ViewMode;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CalendarError, CalendarResult};
use crate::logging::init_logging;

const SUPPORTED_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    /// View shown when no `--view` flag is given
    pub default_view: ViewMode,
    /// Fallback log filter when `RUST_LOG` is unset
    pub log_level: String,
    /// JSON array of events
    pub events_path: Option<PathBuf>,
    /// JSON object mapping `YYYY-MM-DD` to a holiday label
    pub holidays_path: Option<PathBuf>,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            default_view: ViewMode::Month,
            log_level: "info".to_string(),
            events_path: None,
            holidays_path: None,
        }
    }
}

impl PreviewConfig {
    /// Load configuration from `path`, falling back to defaults when the
    /// file does not exist.
    pub fn load(path: &Path) -> CalendarResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let yaml_content = fs::read_to_string(path)?;
        let config: PreviewConfig = serde_yaml::from_str(&yaml_content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load the config, install logging at its level, then report what was
    /// loaded. Logging cannot start earlier since the level comes from here.
    pub fn bootstrap(path: &Path) -> CalendarResult<Self> {
        let config = Self::load(path)?;
        init_logging(&config.log_level)?;

        if path.exists() {
            log::info!("Loaded preview config from {}", path.display());
        } else {
            log::debug!("No config at {}, using defaults", path.display());
        }
        log::debug!(
            "default_view={} log_level={} events={:?} holidays={:?}",
            config.default_view,
            config.log_level,
            config.events_path,
            config.holidays_path
        );

        Ok(config)
    }

    pub fn validate(&self) -> CalendarResult<()> {
        let level = self.log_level.to_ascii_lowercase();
        if !SUPPORTED_LOG_LEVELS.contains(&level.as_str()) {
            return Err(CalendarError::Config(format!(
                "unsupported log_level '{}', expected one of {}",
                self.log_level,
                SUPPORTED_LOG_LEVELS.join(", ")
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = PreviewConfig::load(&temp_dir.path().join("absent.yaml")).unwrap();
        assert_eq!(config, PreviewConfig::default());
    }

    #[test]
    fn test_load_partial_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("preview.yaml");
        fs::write(&path, "default_view: week\nholidays_path: /data/holidays.json\n").unwrap();

        let config = PreviewConfig::load(&path).unwrap();
        assert_eq!(config.default_view, ViewMode::Week);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.holidays_path, Some(PathBuf::from("/data/holidays.json")));
        assert!(config.events_path.is_none());
    }

    #[test]
    fn test_rejects_unknown_log_level() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("preview.yaml");
        fs::write(&path, "log_level: loud\n").unwrap();

        let result = PreviewConfig::load(&path);
        assert!(matches!(result, Err(CalendarError::Config(_))));
    }

    #[test]
    fn test_bootstrap_installs_logging_before_reporting() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("preview.yaml");
        fs::write(&path, "default_view: week\nlog_level: debug\n").unwrap();

        let config = PreviewConfig::bootstrap(&path).unwrap();
        assert_eq!(config.default_view, ViewMode::Week);
        assert!(tracing::dispatcher::has_been_set());
    }

    #[test]
    fn test_bootstrap_propagates_load_errors() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("preview.yaml");
        fs::write(&path, "log_level: loud\n").unwrap();

        let result = PreviewConfig::bootstrap(&path);
        assert!(matches!(result, Err(CalendarError::Config(_))));
    }

    #[test]
    fn test_rejects_unknown_view() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("preview.yaml");
        fs::write(&path, "default_view: year\n").unwrap();

        assert!(matches!(PreviewConfig::load(&path), Err(CalendarError::Yaml(_))));
    }
}
