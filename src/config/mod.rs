//! Build-time configuration.
//!
//! The viewer runs in the browser where there is no process environment, so
//! values are read from the environment at compile time (`option_env!`) and
//! baked into the bundle. Anything unset falls back to a default.

use reqwest::Url;
use thiserror::Error;
use tracing::Level;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("invalid API base URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("unknown log level: {0}")]
    InvalidLogLevel(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Comic API base URL, e.g. `https://xkcd.example/api`. Loaded from COMIC_API_URL
    pub api_url: String,
    /// Log filter level name. Loaded from COMIC_LOG_LEVEL
    pub log_level: String,
}

fn default_api_url() -> String {
    "http://localhost:8080".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Config from the build environment, defaults for anything unset.
    pub fn from_env() -> Self {
        Self::from_values(option_env!("COMIC_API_URL"), option_env!("COMIC_LOG_LEVEL"))
    }

    fn from_values(api_url: Option<&str>, log_level: Option<&str>) -> Self {
        Config {
            api_url: api_url
                .filter(|v| !v.trim().is_empty())
                .map(|v| v.trim().to_string())
                .unwrap_or_else(default_api_url),
            log_level: log_level
                .filter(|v| !v.trim().is_empty())
                .map(|v| v.trim().to_string())
                .unwrap_or_else(default_log_level),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        Url::parse(&self.api_url).map_err(|e| ConfigError::InvalidUrl {
            url: self.api_url.clone(),
            reason: e.to_string(),
        })?;
        self.level()?;
        Ok(())
    }

    pub fn level(&self) -> Result<Level, ConfigError> {
        self.log_level
            .parse::<Level>()
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }
}
