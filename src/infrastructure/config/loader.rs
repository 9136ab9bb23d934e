//! Figment-based configuration loader and validation.

use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use reqwest::Url;
use thiserror::Error;

use crate::domain::models::config::Config;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Base URL is not an absolute URL that can take path segments.
    #[error("Invalid Dog API base URL: {0}")]
    InvalidBaseUrl(String),

    /// Connect timeout is zero.
    #[error("Invalid connect_timeout_secs: {0}. Must be at least 1")]
    InvalidConnectTimeout(u64),

    /// Request timeout is zero.
    #[error("Invalid request_timeout_secs: {0}. Must be at least 1")]
    InvalidRequestTimeout(u64),

    /// Unknown log level.
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    /// Unknown log format.
    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. .breedcache/config.yaml (project config)
    /// 3. .breedcache/local.yaml (project local overrides, optional)
    /// 4. Environment variables (BREEDCACHE_* prefix, highest priority)
    pub fn load() -> Result<Config> {
        let config: Config = Self::figment()
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file
    ///
    /// Environment overrides still apply on top of the file.
    pub fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path.as_ref()))
            .merge(Env::prefixed("BREEDCACHE_").split("__"))
            .extract()
            .context(format!(
                "Failed to load config from {}",
                path.as_ref().display()
            ))?;

        Self::validate(&config)?;
        Ok(config)
    }

    fn figment() -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(".breedcache/config.yaml"))
            .merge(Yaml::file(".breedcache/local.yaml"))
            .merge(Env::prefixed("BREEDCACHE_").split("__"))
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        let base_url = &config.dog_api.base_url;
        match Url::parse(base_url) {
            Ok(url) if !url.cannot_be_a_base() => {}
            _ => return Err(ConfigError::InvalidBaseUrl(base_url.clone())),
        }

        if config.dog_api.connect_timeout_secs == 0 {
            return Err(ConfigError::InvalidConnectTimeout(
                config.dog_api.connect_timeout_secs,
            ));
        }

        if config.dog_api.request_timeout_secs == 0 {
            return Err(ConfigError::InvalidRequestTimeout(
                config.dog_api.request_timeout_secs,
            ));
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&config.logging.format.as_str()) {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        Ok(())
    }
}
