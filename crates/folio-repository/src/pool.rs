//! Database connection pool management.

use crate::schema_statement;
use folio_config::DatabaseConfig;
use folio_core::{FolioError, FolioResult};
use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use tracing::{info, warn};

/// Database pool wrapper.
pub struct DatabasePool {
    pool: MySqlPool,
}

impl DatabasePool {
    /// Connects to MySQL using the pool settings from configuration.
    pub async fn connect(config: &DatabaseConfig) -> FolioResult<Self> {
        info!("Connecting to MySQL database...");

        let pool = MySqlPoolOptions::new()
            .min_connections(config.min_connections)
            .max_connections(config.max_connections)
            .acquire_timeout(config.connect_timeout())
            .idle_timeout(Some(config.idle_timeout()))
            .connect(&config.url)
            .await
            .map_err(|e| {
                warn!("Failed to connect to database: {}", e);
                FolioError::data_source(format!("Failed to connect: {e}"))
            })?;

        info!("MySQL connection pool established");
        Ok(Self { pool })
    }

    /// Returns a reference to the underlying pool.
    #[must_use]
    pub fn inner(&self) -> &MySqlPool {
        &self.pool
    }

    /// Checks if the database connection is healthy.
    pub async fn health_check(&self) -> FolioResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| FolioError::data_source(format!("Health check failed: {e}")))?;
        Ok(())
    }

    /// Creates the article table if it does not exist yet.
    pub async fn ensure_schema(&self, table: &str) -> FolioResult<()> {
        info!(table, "Ensuring article table exists");
        sqlx::query(&schema_statement(table))
            .execute(&self.pool)
            .await
            .map_err(|e| FolioError::data_source(format!("Schema setup failed: {e}")))?;
        Ok(())
    }

    /// Closes the database pool.
    pub async fn close(&self) {
        info!("Closing database connection pool...");
        self.pool.close().await;
        info!("Database connection pool closed");
    }
}

impl std::fmt::Debug for DatabasePool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabasePool")
            .field("size", &self.pool.size())
            .field("num_idle", &self.pool.num_idle())
            .finish()
    }
}
