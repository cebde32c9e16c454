//! Read-path HTTP response cache.
//!
//! Caches GET responses keyed by the request target. Entries are only
//! written for 2xx responses and expire after the configured TTL; nothing is
//! invalidated on writes. There is no single-flight: concurrent misses on
//! the same key all reach the handler.
//!
//! The write is spawned once the handler's body has been buffered, just
//! before the response is returned to the server. It runs concurrently with
//! transmission, so an entry may land before the client has read the body.
//! Its outcome never affects the client's response.

use super::ResponseRecorder;
use crate::{responses::AppError, state::ResponseCacheState};
use axum::{
    body::{Body, HttpBody},
    extract::State,
    http::{header::CONTENT_LENGTH, header::CONTENT_TYPE, Method, Request, Uri},
    middleware::Next,
    response::{IntoResponse, Response},
};
use folio_core::FolioError;
use folio_service::CachedResponse;
use metrics::counter;
use tracing::{debug, error, warn};

const LOOKUPS: &str = "folio_response_cache_lookups_total";
const STORES: &str = "folio_response_cache_stores_total";

/// Returns the cache key for a request: path plus raw query, verbatim.
///
/// `/articles?a=1&b=2` and `/articles?b=2&a=1` are different keys.
#[must_use]
pub fn cache_key(uri: &Uri) -> String {
    uri.path_and_query()
        .map_or_else(|| uri.path().to_string(), |pq| pq.as_str().to_string())
}

/// Response cache middleware.
///
/// Non-GET requests pass straight through. A hit is replayed without
/// invoking the handler; an entry that fails to decode yields a 500. On a
/// miss, or when the store is unreachable, the handler runs and a 2xx
/// response no larger than `max_body_bytes` is stored by a background task.
/// Larger responses are served unchanged.
pub async fn response_cache_middleware(
    State(cache): State<ResponseCacheState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    if request.method() != Method::GET {
        return next.run(request).await;
    }

    let key = cache_key(request.uri());

    match cache.store.get(&key).await {
        Ok(Some(bytes)) => match CachedResponse::decode(&bytes) {
            Ok(cached) => {
                counter!(LOOKUPS, "outcome" => "hit").increment(1);
                debug!(key = %key, status = cached.status, "Serving cached response");
                return replay(cached);
            }
            Err(err) => {
                counter!(LOOKUPS, "outcome" => "corrupt").increment(1);
                error!(key = %key, error = %err, "Cached response is corrupt");
                return AppError(err).into_response();
            }
        },
        Ok(None) => {
            counter!(LOOKUPS, "outcome" => "miss").increment(1);
            debug!(key = %key, "Cache miss");
        }
        Err(err) => {
            counter!(LOOKUPS, "outcome" => "error").increment(1);
            warn!(key = %key, error = %err, "Cache lookup failed, serving from handler");
        }
    }

    let response = next.run(request).await;

    if !response.status().is_success() || exceeds(&response, cache.max_body_bytes) {
        return response;
    }

    let recorder = match ResponseRecorder::capture(response).await {
        Ok(recorder) => recorder,
        Err(err) => {
            error!(key = %key, error = %err, "Failed to buffer response body");
            return AppError(FolioError::internal(err.to_string())).into_response();
        }
    };

    if recorder.body().len() > cache.max_body_bytes {
        debug!(
            key = %key,
            size = recorder.body().len(),
            "Response body over cache limit, not caching"
        );
        return recorder.into_response();
    }

    let entry = recorder.to_cached();
    tokio::spawn(async move {
        store(&cache, &key, &entry).await;
    });

    recorder.into_response()
}

async fn store(cache: &ResponseCacheState, key: &str, entry: &CachedResponse) {
    let result = match entry.encode() {
        Ok(bytes) => cache.store.set(key, &bytes, cache.ttl).await,
        Err(err) => Err(err),
    };

    match result {
        Ok(()) => {
            counter!(STORES, "result" => "ok").increment(1);
            debug!(key, status = entry.status, "Cached response");
        }
        Err(err) => {
            counter!(STORES, "result" => "error").increment(1);
            warn!(key, error = %err, "Failed to cache response");
        }
    }
}

/// Returns true if the body is known to be larger than `limit`, either from
/// `Content-Length` or from the body's own size hint. Such responses skip
/// buffering entirely; bodies of unknown size are checked after buffering.
fn exceeds(response: &Response, limit: usize) -> bool {
    let declared = response
        .headers()
        .get(CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or_default();
    let hinted = HttpBody::size_hint(response.body()).lower();

    declared.max(hinted) > limit as u64
}

/// Builds the client response from a cache entry. The status line is set
/// before the body is attached.
fn replay(cached: CachedResponse) -> Response {
    let mut builder = Response::builder().status(cached.status);
    if !cached.content_type.is_empty() {
        builder = builder.header(CONTENT_TYPE, cached.content_type);
    }

    builder.body(Body::from(cached.body)).unwrap_or_else(|e| {
        error!(error = %e, "Failed to rebuild cached response");
        AppError(FolioError::internal(e.to_string())).into_response()
    })
}
