use std::fs;
use std::path::{Path, PathBuf};
use crate::config::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, MAX_THRESHOLD_DAYS};
use crate::errors::{RepoHealthError, RepoHealthResult};
use crate::structs::config::config::Config;

pub struct ConfigManager;

impl ConfigManager {

    pub fn default_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Loads settings from `path`, or from the default location when no path is given.
    ///
    /// A missing default file yields the built-in defaults; a missing explicit file is an error.
    pub fn load(path: Option<&Path>) -> RepoHealthResult<Config> {
        match path {
            Some(path) => Self::load_from(path),
            None => match Self::default_config_path() {
                Some(default_path) if default_path.exists() => Self::load_from(&default_path),
                _ => Ok(Config::default()),
            },
        }
    }

    fn load_from(path: &Path) -> RepoHealthResult<Config> {
        log::debug!("📋 Loading config from: {}", path.display());
        let content = fs::read_to_string(path).map_err(|e| RepoHealthError::ConfigurationFileError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let config: Config = toml::from_str(&content).map_err(|e| RepoHealthError::ConfigurationFileError {
            path: path.display().to_string(),
            reason: e.message().to_string(),
        })?;
        Self::validate_config(&config)?;
        Ok(config)
    }

    pub fn validate_config(config: &Config) -> RepoHealthResult<()> {
        if config.api.base_url.trim().is_empty() {
            return Err(RepoHealthError::config_error(
                "API base URL must not be empty",
                Some("api.base_url"),
                Some("Remove the key to use https://api.github.com"),
            ));
        }

        if config.api.search_requests_per_minute == 0 {
            return Err(RepoHealthError::config_error(
                "search request quota must be positive",
                Some("api.search_requests_per_minute"),
                None,
            ));
        }

        let thresholds = &config.thresholds;
        if thresholds.outdated_days < 0 || thresholds.broken_days < 0 {
            return Err(RepoHealthError::config_error(
                "day thresholds must not be negative",
                Some("thresholds"),
                None,
            ));
        }

        if thresholds.outdated_days > MAX_THRESHOLD_DAYS || thresholds.broken_days > MAX_THRESHOLD_DAYS {
            return Err(RepoHealthError::config_error(
                &format!("day thresholds must not exceed {}", MAX_THRESHOLD_DAYS),
                Some("thresholds"),
                None,
            ));
        }

        Ok(())
    }

    /// Returns the access token, treating a blank value as absent.
    pub fn resolve_token(token: Option<String>) -> Option<String> {
        token
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty())
    }
}
