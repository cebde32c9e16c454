//! Common test infrastructure for Redis integration tests.

use deadpool_redis::{Config, Pool, Runtime};
use folio_service::{RedisResponseCache, ResponseCacheStore};
use std::sync::Arc;
use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::redis::Redis;

/// Builds a pool for `url` without opening a connection.
pub fn pool(url: &str) -> Arc<Pool> {
    let pool = Config::from_url(url)
        .create_pool(Some(Runtime::Tokio1))
        .expect("Failed to create Redis pool");
    Arc::new(pool)
}

/// Test Redis container wrapper.
pub struct TestRedis {
    _container: ContainerAsync<Redis>,
    pool: Arc<Pool>,
}

impl TestRedis {
    /// Starts a fresh Redis container and waits until it answers.
    pub async fn new() -> Self {
        let container = Redis::default()
            .start()
            .await
            .expect("Failed to start Redis container");

        let port = container
            .get_host_port_ipv4(6379)
            .await
            .expect("Failed to get Redis port");

        let pool = pool(&format!("redis://127.0.0.1:{port}"));
        Self::wait_ready(&pool, 30).await;

        Self {
            _container: container,
            pool,
        }
    }

    /// Returns a store over the container's pool.
    pub fn store(&self) -> RedisResponseCache {
        RedisResponseCache::new(self.pool.clone())
    }

    /// Returns the raw pool, for inspecting keys directly.
    pub fn pool(&self) -> &Pool {
        &self.pool
    }

    async fn wait_ready(pool: &Arc<Pool>, max_attempts: u32) {
        let store = RedisResponseCache::new(pool.clone());
        let mut attempts = 0;
        loop {
            attempts += 1;
            match store.get("readiness").await {
                Ok(_) => return,
                Err(e) => {
                    if attempts >= max_attempts {
                        panic!("Redis not ready after {max_attempts} attempts: {e}");
                    }
                    tokio::time::sleep(std::time::Duration::from_secs(1)).await;
                }
            }
        }
    }
}
