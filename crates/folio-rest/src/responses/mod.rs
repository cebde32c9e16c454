//! API response types.
//!
//! Every response body, success or failure, is an [`Envelope`].

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use folio_core::{messages, FolioError};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Uniform JSON body of every response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub status: u16,
    pub message: String,
    pub data: Option<T>,
    /// Number of matching rows, set on list responses only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
}

impl<T> Envelope<T> {
    /// Creates a success envelope.
    pub fn success(status: StatusCode, data: T) -> Self {
        Self {
            status: status.as_u16(),
            message: messages::SUCCESS.to_string(),
            data: Some(data),
            total: None,
        }
    }

    /// Attaches the total row count.
    #[must_use]
    pub fn with_total(mut self, total: u64) -> Self {
        self.total = Some(total);
        self
    }
}

impl Envelope<()> {
    /// Creates an envelope with `data: null`.
    pub fn message(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status: status.as_u16(),
            message: message.into(),
            data: None,
            total: None,
        }
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

/// Application error type for Axum.
#[derive(Debug)]
pub struct AppError(pub FolioError);

impl From<FolioError> for AppError {
    fn from(err: FolioError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        debug!(code = self.0.error_code(), error = %self.0, "Request failed");

        Envelope::message(status, self.0.client_message()).into_response()
    }
}

/// Result type for Axum handlers.
pub type ApiResult<T> = Result<Envelope<T>, AppError>;

/// Helper to create a success (200) response.
pub fn ok<T: Serialize>(data: T) -> ApiResult<T> {
    Ok(Envelope::success(StatusCode::OK, data))
}

/// Helper to create a created (201) response.
pub fn created<T: Serialize>(data: T) -> ApiResult<T> {
    Ok(Envelope::success(StatusCode::CREATED, data))
}
