//! Application state for Axum handlers.

use folio_repository::ArticleDataSource;
use folio_service::{ArticleService, ResponseCacheStore};
use std::sync::Arc;
use std::time::Duration;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub article_service: Arc<dyn ArticleService>,
    /// Probed by the readiness endpoint.
    pub data_source: Arc<dyn ArticleDataSource>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(
        article_service: Arc<dyn ArticleService>,
        data_source: Arc<dyn ArticleDataSource>,
    ) -> Self {
        Self {
            article_service,
            data_source,
        }
    }
}

/// State of the response cache middleware.
#[derive(Clone)]
pub struct ResponseCacheState {
    pub store: Arc<dyn ResponseCacheStore>,
    /// Lifetime of every stored entry.
    pub ttl: Duration,
    /// Responses with a larger body are served but not cached.
    pub max_body_bytes: usize,
}

impl ResponseCacheState {
    /// Default cap on buffered response bodies.
    pub const DEFAULT_MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

    /// Creates the middleware state.
    pub fn new(store: Arc<dyn ResponseCacheStore>, ttl: Duration) -> Self {
        Self {
            store,
            ttl,
            max_body_bytes: Self::DEFAULT_MAX_BODY_BYTES,
        }
    }

    /// Overrides the body size cap.
    #[must_use]
    pub fn with_max_body_bytes(mut self, max_body_bytes: usize) -> Self {
        self.max_body_bytes = max_body_bytes;
        self
    }
}
