//! Roles Service Configuration
//!
//! TOML-based configuration with environment variable overrides.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

mod loader;

pub use loader::ConfigLoader;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Root application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub http: HttpConfig,
    pub seed: SeedConfig,

    /// Enables development-only surfaces (Swagger UI, OpenAPI document)
    pub dev_mode: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            http: HttpConfig::default(),
            seed: SeedConfig::default(),
            dev_mode: false,
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub port: u16,
    pub host: String,
    /// `["*"]` mirrors any origin; otherwise an explicit allow-list
    pub cors_origins: Vec<String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            host: "0.0.0.0".to_string(),
            cors_origins: vec!["*".to_string()],
        }
    }
}

impl HttpConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.iter().any(|o| o.trim() == "*")
    }
}

/// Roles created at start-up
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    pub roles: Vec<String>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            roles: vec!["Admin".to_string(), "Root".to_string(), "Client".to_string()],
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.http.port == 0 {
            return Err(ConfigError::ValidationError("http.port must be non-zero".to_string()));
        }
        if self.http.cors_origins.is_empty() {
            return Err(ConfigError::ValidationError(
                "http.cors_origins must name at least one origin (use \"*\" for any)".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for name in &self.seed.roles {
            if name.is_empty() {
                return Err(ConfigError::ValidationError("seed.roles contains an empty name".to_string()));
            }
            if !seen.insert(name.to_lowercase()) {
                return Err(ConfigError::ValidationError(format!(
                    "seed.roles contains duplicate name: {}",
                    name
                )));
            }
        }

        Ok(())
    }
}
