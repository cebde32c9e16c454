//! Configuration loader with layered sources.

use crate::AppConfig;
use config::{Config, ConfigError, Environment, File};
use folio_core::{rules, FolioError};
use std::path::PathBuf;
use tracing::{debug, info};

/// Prefix for environment variable overrides.
const ENV_PREFIX: &str = "FOLIO";

/// Layered configuration loader.
///
/// Sources are applied in order, later ones overriding earlier ones:
/// 1. `{dir}/default.toml`
/// 2. `{dir}/{environment}.toml`
/// 3. `{dir}/local.toml`
/// 4. Environment variables with the `FOLIO_` prefix and `__` as the
///    section separator, e.g. `FOLIO_CACHE__TTL_SECS=60`
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config_dir: PathBuf,
    environment: String,
}

impl ConfigLoader {
    /// Creates a loader for the given directory.
    ///
    /// The environment name is taken from `FOLIO_ENVIRONMENT`, defaulting to
    /// `development`.
    pub fn new(config_dir: impl Into<PathBuf>) -> Self {
        let environment =
            std::env::var("FOLIO_ENVIRONMENT").unwrap_or_else(|_| "development".to_string());
        Self {
            config_dir: config_dir.into(),
            environment,
        }
    }

    /// Creates a loader for the default location (`./config`).
    pub fn from_default_location() -> Self {
        Self::new("./config")
    }

    /// Overrides the environment name.
    #[must_use]
    pub fn with_environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = environment.into();
        self
    }

    /// Loads and validates the configuration.
    pub fn load(&self) -> Result<AppConfig, FolioError> {
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or error loading it: {}", e);
        }

        info!(
            "Loading configuration for environment: {}",
            self.environment
        );

        let mut builder = Config::builder();
        for name in ["default", self.environment.as_str(), "local"] {
            let path = self.config_dir.join(format!("{name}.toml"));
            if path.exists() {
                debug!("Loading config from: {}", path.display());
                builder = builder.add_source(File::with_name(&path.to_string_lossy()).required(false));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let mut app_config: AppConfig = builder
            .build()
            .and_then(Config::try_deserialize)
            .map_err(config_error_to_folio_error)?;
        app_config.app.environment.clone_from(&self.environment);

        validate_config(&app_config)?;

        Ok(app_config)
    }
}

/// Validates the configuration.
pub fn validate_config(config: &AppConfig) -> Result<(), FolioError> {
    if config.database.url.trim().is_empty() {
        return Err(FolioError::Configuration(
            "Database URL is required".to_string(),
        ));
    }

    if config.database.table_name.is_empty() {
        return Err(FolioError::Configuration(
            "Database table name is required".to_string(),
        ));
    }

    if rules::sql_identifier(&config.database.table_name).is_err() {
        return Err(FolioError::Configuration(format!(
            "Database table name is not a plain identifier: {}",
            config.database.table_name
        )));
    }

    if config.redis.enabled && config.cache.ttl_secs == 0 {
        return Err(FolioError::Configuration(
            "Cache TTL must be positive when Redis is enabled".to_string(),
        ));
    }

    Ok(())
}

fn config_error_to_folio_error(err: ConfigError) -> FolioError {
    FolioError::Configuration(err.to_string())
}
