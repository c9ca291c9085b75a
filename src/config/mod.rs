use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::utils::error::{HelpCenterError, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Origin of the Help Center API; `/api/topics` is appended to it.
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Pause between a successful create and the jump back to the topic list.
    pub redirect_delay_ms: u64,
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            redirect_delay_ms: 1500,
            tick_rate_ms: 250,
        }
    }
}

impl UiConfig {
    pub fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.redirect_delay_ms)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: Some("help-center.log".to_string()),
        }
    }
}

/// Where a loaded `Config` came from. Loading runs before tracing is set up,
/// so callers log this once the subscriber is installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigOrigin {
    File,
    CreatedDefault,
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::load_with_origin(path).map(|(config, _)| config)
    }

    /// Reads `path`, writing a default config there first if it is missing.
    pub fn load_with_origin<P: AsRef<Path>>(path: P) -> Result<(Self, ConfigOrigin)> {
        let path = path.as_ref();

        if !path.exists() {
            let default_config = Config::default();
            default_config.save(path)?;
            return Ok((default_config, ConfigOrigin::CreatedDefault));
        }

        let content = fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;

        Ok((config, ConfigOrigin::File))
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let content = serde_yaml::to_string(self)?;
        fs::write(path, content)?;

        Ok(())
    }

    pub fn set_api_url(&mut self, url: String) {
        self.api.base_url = url.trim_end_matches('/').to_string();
    }

    pub fn validate(&self) -> Result<()> {
        let url = reqwest::Url::parse(&self.api.base_url).map_err(|e| {
            HelpCenterError::Config(format!("Invalid API URL {}: {}", self.api.base_url, e))
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(HelpCenterError::Config(format!(
                "Unsupported API URL scheme: {}. Expected http or https",
                url.scheme()
            )));
        }

        if self.ui.tick_rate_ms == 0 {
            return Err(HelpCenterError::Config("Tick rate must be greater than zero".to_string()));
        }

        match self.logging.level.to_ascii_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            other => {
                return Err(HelpCenterError::Config(format!("Invalid log level: {}", other)));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_creates_default_file_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("help-center.yaml");

        let config = Config::load(&path).unwrap();
        assert_eq!(config, Config::default());
        assert!(path.exists());

        let reloaded = Config::load(&path).unwrap();
        assert_eq!(reloaded, config);
    }

    #[test]
    fn load_reports_whether_the_file_was_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("help-center.yaml");

        let (_, origin) = Config::load_with_origin(&path).unwrap();
        assert_eq!(origin, ConfigOrigin::CreatedDefault);

        let (_, origin) = Config::load_with_origin(&path).unwrap();
        assert_eq!(origin, ConfigOrigin::File);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "api:\n  base_url: http://help.internal:9000\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.api.base_url, "http://help.internal:9000");
        assert_eq!(config.ui.redirect_delay_ms, 1500);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn set_api_url_strips_trailing_slash() {
        let mut config = Config::default();
        config.set_api_url("https://help.example.com/".to_string());
        assert_eq!(config.api.base_url, "https://help.example.com");
    }

    #[test]
    fn validate_rejects_bad_values() {
        assert!(Config::default().validate().is_ok());

        let mut config = Config::default();
        config.api.base_url = "not a url".to_string();
        assert!(matches!(config.validate(), Err(HelpCenterError::Config(_))));

        let mut config = Config::default();
        config.api.base_url = "ftp://files.example.com".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.logging.level = "loud".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.ui.tick_rate_ms = 0;
        assert!(config.validate().is_err());
    }
}
