//! Configuration loader
//!
//! Loads [`AppConfig`] from defaults, a TOML file and the environment, then
//! validates the merged result.

use crate::config::AppConfig;
use crate::constants::{
    CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME,
};
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use movies_domain::error::{Error, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// An explicit path that does not exist is reported and skipped, so the
    /// service still starts from defaults and environment.
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(config_path) = &self.config_path {
            if config_path.exists() {
                figment = figment.merge(Toml::file(config_path));
                log_config_loaded(config_path, true);
            } else {
                log_config_loaded(config_path, false);
            }
        } else if let Some(default_path) = Self::find_default_config_path() {
            figment = figment.merge(Toml::file(&default_path));
            log_config_loaded(&default_path, true);
        }

        // Double underscore keeps single underscores inside field names
        // (MOVIES__CACHE__FILMS_TTL_SECS -> cache.films_ttl_secs)
        let prefix = format!("{}{CONFIG_ENV_SEPARATOR}", self.env_prefix);
        figment = figment.merge(Env::prefixed(&prefix).split(CONFIG_ENV_SEPARATOR));

        let app_config: AppConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        validate_app_config(&app_config)?;

        Ok(app_config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(config).context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string).context("Failed to write config file")?;

        Ok(())
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let mut candidates = vec![
            current_dir.join(DEFAULT_CONFIG_FILENAME),
            current_dir
                .join(DEFAULT_CONFIG_DIR)
                .join(DEFAULT_CONFIG_FILENAME),
        ];
        if let Some(config_dir) = dirs::config_dir() {
            candidates.push(config_dir.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME));
        }

        candidates.into_iter().find(|path| path.exists())
    }
}

/// Validate application configuration
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_server_config(config)?;
    validate_logging_config(config)?;
    validate_search_config(config)?;
    validate_cache_config(config)?;
    Ok(())
}

fn validate_server_config(config: &AppConfig) -> Result<()> {
    if config.server.port == 0 {
        return Err(configuration_error("Server port cannot be 0"));
    }
    if config.server.host.trim().is_empty() {
        return Err(configuration_error("Server host cannot be empty"));
    }
    Ok(())
}

fn validate_logging_config(config: &AppConfig) -> Result<()> {
    parse_log_level(&config.logging.level).map(|_| ())
}

fn validate_search_config(config: &AppConfig) -> Result<()> {
    if config.search.provider.trim().is_empty() {
        return Err(configuration_error("Search provider cannot be empty"));
    }
    if config.search.provider == "elasticsearch" && config.search.url.trim().is_empty() {
        return Err(configuration_error(
            "Search URL cannot be empty for the elasticsearch provider",
        ));
    }
    if config.search.timeout_secs == 0 {
        return Err(configuration_error("Search timeout cannot be 0"));
    }
    Ok(())
}

fn validate_cache_config(config: &AppConfig) -> Result<()> {
    let cache = &config.cache;
    if !cache.enabled {
        return Ok(());
    }
    if cache.provider.trim().is_empty() {
        return Err(configuration_error(
            "Cache provider cannot be empty when cache is enabled",
        ));
    }
    if cache.films_ttl_secs == 0 || cache.persons_ttl_secs == 0 || cache.genres_ttl_secs == 0 {
        return Err(configuration_error(
            "Cache TTL cannot be 0 when cache is enabled",
        ));
    }
    if cache.max_entries == 0 {
        return Err(configuration_error(
            "Cache max entries cannot be 0 when cache is enabled",
        ));
    }
    if cache.timeout_secs == 0 {
        return Err(configuration_error("Cache timeout cannot be 0"));
    }
    Ok(())
}

fn configuration_error(message: &str) -> Error {
    Error::Configuration {
        message: message.to_string(),
        source: None,
    }
}
