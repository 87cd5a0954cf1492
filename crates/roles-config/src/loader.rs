//! Configuration loader with file and environment variable support

use crate::{AppConfig, ConfigError};
use std::env;
use std::io;
use std::path::PathBuf;
use tracing::info;

/// Standard config file search paths
const CONFIG_PATHS: &[&str] = &[
    "config.toml",
    "roles.toml",
    "./config/config.toml",
    "/etc/roles-service/config.toml",
];

/// Configuration loader
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader
    pub fn new() -> Self {
        Self { config_path: None }
    }

    /// Create a loader with a specific config file path, which must exist
    pub fn with_path<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            config_path: Some(path.into()),
        }
    }

    /// Load configuration from file (if found) with environment variable overrides
    pub fn load(&self) -> Result<AppConfig, ConfigError> {
        let mut config = AppConfig::default();

        if let Some(path) = self.find_config_file()? {
            info!(?path, "Loading configuration from file");
            config = AppConfig::from_file(&path)?;
        }

        self.apply_overrides(&mut config, |key| env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    fn find_config_file(&self) -> Result<Option<PathBuf>, ConfigError> {
        if let Some(path) = &self.config_path {
            if !path.exists() {
                return Err(ConfigError::ReadError(io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("config file {} does not exist", path.display()),
                )));
            }
            return Ok(Some(path.clone()));
        }

        if let Ok(path) = env::var("ROLES_CONFIG") {
            let path = PathBuf::from(path);
            if path.exists() {
                return Ok(Some(path));
            }
        }

        Ok(CONFIG_PATHS
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists()))
    }

    /// Apply overrides, reading each variable through `lookup`
    pub(crate) fn apply_overrides<F>(&self, config: &mut AppConfig, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        // HTTP
        if let Some(val) = lookup("ROLES_HTTP_PORT") {
            if let Ok(port) = val.parse() {
                config.http.port = port;
            }
        }
        if let Some(val) = lookup("ROLES_HTTP_HOST") {
            config.http.host = val;
        }
        if let Some(val) = lookup("ROLES_CORS_ORIGINS") {
            config.http.cors_origins = split_list(&val);
        }

        // Seed
        if let Some(val) = lookup("ROLES_SEED_ROLES") {
            config.seed.roles = split_list(&val);
        }

        // General
        if let Some(val) = lookup("ROLES_DEV_MODE") {
            config.dev_mode = matches!(val.trim().to_ascii_lowercase().as_str(), "true" | "1");
        }
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn split_list(val: &str) -> Vec<String> {
    val.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
