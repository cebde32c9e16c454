//! Buffered capture of an inner handler's response.

use axum::{
    body::{Body, Bytes},
    http::{header::CONTENT_TYPE, response::Parts, StatusCode},
    response::Response,
};
use folio_service::CachedResponse;

/// A fully buffered response.
///
/// Holds status, headers and body of the inner handler's response so the
/// middleware can store a copy before handing the original back.
#[derive(Debug)]
pub struct ResponseRecorder {
    parts: Parts,
    body: Bytes,
}

impl ResponseRecorder {
    /// Buffers the whole of `response`.
    ///
    /// Fails only if the body stream itself errors; the body has then been
    /// consumed and cannot be replayed.
    pub async fn capture(response: Response) -> Result<Self, axum::Error> {
        let (parts, body) = response.into_parts();
        let body = axum::body::to_bytes(body, usize::MAX).await?;
        Ok(Self { parts, body })
    }

    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.parts.status
    }

    /// Returns the `Content-Type` header, or an empty string.
    #[must_use]
    pub fn content_type(&self) -> &str {
        self.parts
            .headers
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Returns the cache entry for this response.
    #[must_use]
    pub fn to_cached(&self) -> CachedResponse {
        CachedResponse::new(self.status().as_u16(), self.body.to_vec(), self.content_type())
    }

    /// Produces the response sent to the client.
    #[must_use]
    pub fn into_response(self) -> Response {
        Response::from_parts(self.parts, Body::from(self.body))
    }
}
