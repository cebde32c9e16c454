//! Pagination extractor for the article list.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use folio_core::PageRequest;
use std::convert::Infallible;

/// `limit` and `page` query parameters.
///
/// Never rejects: anything missing or unparsable falls back to a default.
///
/// - `limit`: absent, invalid or zero means 20; negative means no limit
/// - `page`: absent, invalid or below one means 1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParams(pub PageRequest);

impl PageParams {
    /// Parses the raw values of the `limit` and `page` parameters.
    #[must_use]
    pub fn parse(limit: Option<&str>, page: Option<&str>) -> Self {
        let limit = limit
            .and_then(|v| v.trim().parse::<i64>().ok())
            .unwrap_or(PageRequest::DEFAULT_LIMIT);
        let page = page
            .and_then(|v| v.trim().parse::<i64>().ok())
            .unwrap_or(PageRequest::FIRST_PAGE);
        Self(PageRequest::new(page, limit))
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for PageParams
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let pairs = Query::<Vec<(String, String)>>::try_from_uri(&parts.uri)
            .map(|Query(pairs)| pairs)
            .unwrap_or_default();

        let first = |name: &str| {
            pairs
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.as_str())
        };

        Ok(Self::parse(first("limit"), first("page")))
    }
}
