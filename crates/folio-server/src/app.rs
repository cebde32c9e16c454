//! Application wiring.
//!
//! Every dependency is built by hand, leaves first:
//!
//! ```text
//! DatabasePool ─→ MySqlArticleDataSource ─→ ArticleServiceImpl ─┐
//! deadpool_redis::Pool ─→ RedisResponseCache ───────────────────┴─→ Router
//! ```

use axum::Router;
use deadpool_redis::{PoolConfig, Runtime};
use folio_config::{AppConfig, RedisConfig};
use folio_core::{FolioError, FolioResult};
use folio_repository::{ArticleDataSource, DatabasePool, MySqlArticleDataSource};
use folio_rest::{create_router, AppState, ResponseCacheState};
use folio_service::{ArticleService, ArticleServiceImpl, RedisResponseCache, ResponseCacheStore};
use std::sync::Arc;
use tokio::signal;
use tracing::{info, warn};

/// The fully wired application.
pub struct AppDependencies {
    pub config: AppConfig,
    db_pool: Option<Arc<DatabasePool>>,
    pub data_source: Arc<dyn ArticleDataSource>,
    pub article_service: Arc<dyn ArticleService>,
    pub cache_store: Arc<dyn ResponseCacheStore>,
}

impl AppDependencies {
    /// Connects to MySQL and Redis and wires the article stack.
    pub async fn build(config: AppConfig) -> FolioResult<Self> {
        let db_pool = Arc::new(DatabasePool::connect(&config.database).await?);
        db_pool.health_check().await?;
        if config.database.ensure_schema {
            db_pool.ensure_schema(&config.database.table_name).await?;
        }

        let data_source: Arc<dyn ArticleDataSource> = Arc::new(MySqlArticleDataSource::new(
            db_pool.inner().clone(),
            config.database.table_name.clone(),
        ));

        let cache_store: Arc<dyn ResponseCacheStore> = match create_redis_pool(&config.redis)? {
            Some(pool) => Arc::new(RedisResponseCache::new(pool)),
            None => {
                warn!("Redis is disabled, responses will not be cached");
                Arc::new(RedisResponseCache::disabled())
            }
        };

        let mut deps = Self::from_parts(config, data_source, cache_store);
        deps.db_pool = Some(db_pool);
        Ok(deps)
    }

    /// Wires the stack over an existing data source and cache store.
    pub fn from_parts(
        config: AppConfig,
        data_source: Arc<dyn ArticleDataSource>,
        cache_store: Arc<dyn ResponseCacheStore>,
    ) -> Self {
        let article_service: Arc<dyn ArticleService> =
            Arc::new(ArticleServiceImpl::new(data_source.clone()));

        Self {
            config,
            db_pool: None,
            data_source,
            article_service,
            cache_store,
        }
    }

    /// Builds the HTTP router.
    pub fn router(&self) -> Router {
        let state = AppState::new(self.article_service.clone(), self.data_source.clone());
        let cache = ResponseCacheState::new(self.cache_store.clone(), self.config.cache.ttl())
            .with_max_body_bytes(self.config.cache.max_body_bytes);

        create_router(state, cache, &self.config.server)
    }

    /// Releases pooled connections.
    pub async fn shutdown(&self) {
        if let Some(pool) = &self.db_pool {
            pool.close().await;
        }
    }
}

/// Creates the Redis pool, or `None` when Redis is disabled.
///
/// No connection is opened here; the first cache lookup does that.
pub fn create_redis_pool(config: &RedisConfig) -> FolioResult<Option<Arc<deadpool_redis::Pool>>> {
    if !config.enabled {
        return Ok(None);
    }

    let mut redis_config = deadpool_redis::Config::from_url(config.url.clone());
    redis_config.pool = Some(PoolConfig::new(config.pool_size));

    let pool = redis_config
        .create_pool(Some(Runtime::Tokio1))
        .map_err(|e| FolioError::Configuration(format!("Failed to create Redis pool: {e}")))?;

    info!("Redis connection pool created");
    Ok(Some(Arc::new(pool)))
}

/// Wires the application and serves it until a shutdown signal arrives.
pub async fn run(config: AppConfig) -> FolioResult<()> {
    let deps = AppDependencies::build(config).await?;
    let router = deps.router();

    let addr = deps.config.server.addr();
    info!("Starting REST server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| FolioError::internal(format!("Failed to bind {addr}: {e}")))?;

    crate::startup::print_startup_info(&deps.config);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| FolioError::internal(format!("REST server error: {e}")))?;

    deps.shutdown().await;
    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }
}
