//! Validated JSON extractor for automatic request validation.
//!
//! The body is read and deserialized regardless of `Content-Type`, then
//! validated with the `validator` crate. Every failure is a 400 envelope:
//!
//! - the body cannot be read: `Unable to read request body`
//! - the body is not valid JSON for `T`: `Unable to unmarshal request body`
//! - validation fails: `field: message` pairs sorted by field, joined by `"; "`

use crate::responses::AppError;
use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
};
use folio_core::{messages, FolioError, ValidateExt};
use serde::de::DeserializeOwned;
use tracing::debug;
use validator::Validate;

/// JSON extractor that validates the deserialized value.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state).await.map_err(|e| {
            debug!("Failed to read request body: {}", e);
            FolioError::validation(messages::UNREADABLE_BODY)
        })?;

        let value: T = serde_json::from_slice(&body).map_err(|e| {
            debug!("Failed to deserialize request body: {}", e);
            FolioError::validation(messages::UNMARSHAL_BODY)
        })?;

        value.validate_request()?;

        Ok(ValidatedJson(value))
    }
}
