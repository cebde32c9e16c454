//! Redis-backed response cache store.

use super::ResponseCacheStore;
use async_trait::async_trait;
use deadpool_redis::{redis::AsyncCommands, Pool};
use folio_core::{FolioError, FolioResult};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Response cache store over a `deadpool-redis` pool.
///
/// A disabled instance has no pool: every lookup misses and every write is
/// dropped.
#[derive(Clone)]
pub struct RedisResponseCache {
    pool: Option<Arc<Pool>>,
}

impl RedisResponseCache {
    /// Creates a store over the given pool.
    #[must_use]
    pub fn new(pool: Arc<Pool>) -> Self {
        Self { pool: Some(pool) }
    }

    /// Creates a no-op store (for when Redis is disabled).
    #[must_use]
    pub fn disabled() -> Self {
        Self { pool: None }
    }

    async fn get_conn(&self) -> FolioResult<deadpool_redis::Connection> {
        match &self.pool {
            Some(pool) => pool.get().await.map_err(|e| {
                FolioError::cache(format!("Failed to get Redis connection: {e}"))
            }),
            None => Err(FolioError::cache("Cache is disabled")),
        }
    }
}

#[async_trait]
impl ResponseCacheStore for RedisResponseCache {
    async fn get(&self, key: &str) -> FolioResult<Option<Vec<u8>>> {
        if !self.is_enabled() {
            return Ok(None);
        }

        let mut conn = self.get_conn().await?;
        let value: Option<Vec<u8>> = conn
            .get(key)
            .await
            .map_err(|e| FolioError::cache(format!("Failed to get key '{key}': {e}")))?;

        match &value {
            Some(_) => debug!("Cache hit for key '{}'", key),
            None => debug!("Cache miss for key '{}'", key),
        }

        Ok(value)
    }

    async fn set(&self, key: &str, value: &[u8], ttl: Duration) -> FolioResult<()> {
        if !self.is_enabled() {
            return Ok(());
        }

        let mut conn = self.get_conn().await?;
        let ttl_secs = ttl.as_secs().max(1);

        conn.set_ex::<_, _, ()>(key, value, ttl_secs)
            .await
            .map_err(|e| FolioError::cache(format!("Failed to set key '{key}': {e}")))?;

        debug!("Cached key '{}' with TTL {}s", key, ttl_secs);
        Ok(())
    }

    fn is_enabled(&self) -> bool {
        self.pool.is_some()
    }
}

impl std::fmt::Debug for RedisResponseCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisResponseCache")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}
