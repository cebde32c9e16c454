//! Request logging middleware.

use axum::{body::Body, http::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::{info, warn};

/// Logs method, uri, status and latency of every request.
pub async fn logging_middleware(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = Instant::now();

    let response = next.run(request).await;

    let duration = start.elapsed();
    let status = response.status();

    if status.is_server_error() {
        warn!(
            target: "http",
            method = %method,
            uri = %uri,
            status = status.as_u16(),
            duration_ms = duration.as_millis(),
            "HTTP request failed"
        );
    } else {
        info!(
            target: "http",
            method = %method,
            uri = %uri,
            status = status.as_u16(),
            duration_ms = duration.as_millis(),
            "HTTP request completed"
        );
    }

    response
}
