//! Shared fakes and helpers for router-level tests.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::{Body, Bytes},
    http::{HeaderMap, Request, StatusCode},
    Router,
};
use folio_config::ServerConfig;
use folio_core::{Article, FolioError, FolioResult, Page, PageWindow};
use folio_repository::{ArticleDataSource, Filter, FilterValue};
use folio_rest::{create_router, AppState, ResponseCacheState};
use folio_service::{ArticleServiceImpl, ResponseCacheStore};
use http_body_util::BodyExt;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::mpsc;
use tower::ServiceExt;

pub const TTL: Duration = Duration::from_secs(60);

/// In-memory article table.
#[derive(Default)]
pub struct InMemoryDataSource {
    rows: Mutex<Vec<Article>>,
    pub get_calls: AtomicUsize,
    pub last_window: Mutex<Option<PageWindow>>,
    pub failing: AtomicBool,
}

impl InMemoryDataSource {
    pub fn with_articles(articles: Vec<Article>) -> Arc<Self> {
        let source = Self::default();
        *source.rows.lock().unwrap() = articles;
        Arc::new(source)
    }

    pub fn calls(&self) -> usize {
        self.get_calls.load(Ordering::SeqCst)
    }

    pub fn fail(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    fn check(&self) -> FolioResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(FolioError::data_source("connection refused"));
        }
        Ok(())
    }
}

fn row_matches(article: &Article, filter: &Filter) -> bool {
    filter.predicates().iter().all(|p| {
        let column = match p.column.as_str() {
            "id" => &article.id,
            "title" => &article.title,
            "author" => &article.author,
            "content" => &article.content,
            _ => return false,
        };
        matches!(&p.value, FilterValue::Text(v) if v == column)
    })
}

#[async_trait]
impl ArticleDataSource for InMemoryDataSource {
    async fn insert(&self, article: &Article) -> FolioResult<()> {
        self.check()?;
        self.rows.lock().unwrap().push(article.clone());
        Ok(())
    }

    async fn get(&self, filter: &Filter, window: PageWindow) -> FolioResult<Page<Article>> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_window.lock().unwrap() = Some(window);
        self.check()?;

        let mut rows: Vec<Article> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|a| row_matches(a, filter))
            .cloned()
            .collect();
        rows.sort_by(|a, b| a.title.cmp(&b.title));

        let total = rows.len() as u64;
        let content = if window.is_bounded() {
            rows.into_iter()
                .skip(window.offset as usize)
                .take(window.limit as usize)
                .collect()
        } else {
            rows
        };
        Ok(Page::new(content, total, window))
    }

    async fn ping(&self) -> FolioResult<()> {
        self.check()
    }
}

/// In-memory cache store that reports every successful write on a channel.
pub struct RecordingStore {
    entries: Mutex<HashMap<String, Vec<u8>>>,
    writes: mpsc::UnboundedSender<String>,
    pub failing_reads: AtomicBool,
}

impl RecordingStore {
    pub fn new() -> (Arc<Self>, mpsc::UnboundedReceiver<String>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let store = Self {
            entries: Mutex::new(HashMap::new()),
            writes: tx,
            failing_reads: AtomicBool::new(false),
        };
        (Arc::new(store), rx)
    }

    pub fn insert(&self, key: &str, value: Vec<u8>) {
        self.entries.lock().unwrap().insert(key.to_string(), value);
    }

    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<_> = self.entries.lock().unwrap().keys().cloned().collect();
        keys.sort();
        keys
    }
}

#[async_trait]
impl ResponseCacheStore for RecordingStore {
    async fn get(&self, key: &str) -> FolioResult<Option<Vec<u8>>> {
        if self.failing_reads.load(Ordering::SeqCst) {
            return Err(FolioError::cache("connection reset"));
        }
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &[u8], _ttl: Duration) -> FolioResult<()> {
        self.insert(key, value.to_vec());
        let _ = self.writes.send(key.to_string());
        Ok(())
    }
}

/// Builds the full application router over the given fakes.
pub fn app(data_source: Arc<InMemoryDataSource>, store: Arc<dyn ResponseCacheStore>) -> Router {
    let service = Arc::new(ArticleServiceImpl::new(data_source.clone()));
    let state = AppState::new(service, data_source);
    create_router(
        state,
        ResponseCacheState::new(store, TTL),
        &ServerConfig::default(),
    )
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body is not JSON")
    }

    pub fn content_type(&self) -> Option<&str> {
        self.headers
            .get("content-type")
            .and_then(|v| v.to_str().ok())
    }
}

pub async fn send(router: &Router, request: Request<Body>) -> TestResponse {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    TestResponse {
        status,
        headers,
        body,
    }
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Waits for the next background cache write.
pub async fn next_write(rx: &mut mpsc::UnboundedReceiver<String>) -> Option<String> {
    tokio::time::timeout(Duration::from_secs(2), rx.recv())
        .await
        .ok()
        .flatten()
}

/// Asserts that no cache write happens within a short grace period.
pub async fn assert_no_write(rx: &mut mpsc::UnboundedReceiver<String>) {
    let result = tokio::time::timeout(Duration::from_millis(200), rx.recv()).await;
    assert!(result.is_err(), "unexpected cache write: {result:?}");
}
