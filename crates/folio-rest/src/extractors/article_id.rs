//! Article id path extractor.

use crate::responses::AppError;
use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use folio_core::{messages, FolioError};
use tracing::debug;

/// The `:id` segment of an article route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleId(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for ArticleId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                debug!("Failed to extract article id: {}", e);
                AppError(FolioError::validation(messages::INVALID_ARTICLE_ID))
            })?;

        Ok(Self(id))
    }
}
