//! Configuration management for the seed certification workflow
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with SEEDCERT_ prefix

use std::path::PathBuf;

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Local store configuration
    pub storage: StorageConfig,

    /// Authentication configuration
    pub auth: AuthConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    /// Directory holding the persisted JSON documents
    pub data_dir: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    /// Bcrypt cost factor for password hashing at signup
    pub bcrypt_cost: u32,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("SEEDCERT_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("storage.data_dir", ".seedcert")?
            .set_default("auth.bcrypt_cost", 12)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (SEEDCERT prefix)
            .add_source(
                Environment::with_prefix("SEEDCERT")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            storage: StorageConfig {
                data_dir: PathBuf::from(".seedcert"),
            },
            auth: AuthConfig { bcrypt_cost: 12 },
        }
    }
}
