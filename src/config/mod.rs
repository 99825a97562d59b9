//! Application configuration
//!
//! Loaded from environment variables (and an optional `.env` file) with the
//! `GYM_BOOKING` prefix; nested keys are separated by `__`.
//!
//! ```no_run
//! use gym_booking::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod database;
mod error;
mod server;

pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    pub database: DatabaseConfig,
}

impl AppConfig {
    /// Load configuration from the environment.
    ///
    /// - `GYM_BOOKING__SERVER__PORT=8082` -> `server.port`
    /// - `GYM_BOOKING__DATABASE__URL=...` -> `database.url`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a required key is missing or a value does
    /// not parse into its field type.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("GYM_BOOKING")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration sections
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
