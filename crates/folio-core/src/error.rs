//! Unified error types for all layers of the application.

use crate::messages;
use std::fmt::Debug;
use thiserror::Error;

/// Unified error type for all layers of Folio.
///
/// The `Display` text of a variant carries the underlying cause and is meant
/// for server-side logs only. What a client gets to see is decided by
/// [`FolioError::client_message`].
#[derive(Error, Debug)]
pub enum FolioError {
    // ============ Request Errors ============
    /// Malformed or missing input.
    #[error("Validation error: {0}")]
    Validation(String),

    /// No row matched the lookup.
    #[error("Resource not found: {resource_type} with id {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    // ============ Infrastructure Errors ============
    /// Relational store query, exec or decode failure.
    #[error("Data source error: {0}")]
    DataSource(String),

    /// Response cache backend failure.
    #[error("Cache error: {0}")]
    Cache(String),

    /// Cached payload could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    // ============ Internal Errors ============
    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl FolioError {
    /// Returns the HTTP status code for this error.
    ///
    /// Not-found maps to 400 rather than 404 for compatibility with existing
    /// clients of the article API.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) | Self::NotFound { .. } => 400,
            Self::DataSource(_)
            | Self::Cache(_)
            | Self::Serialization(_)
            | Self::Configuration(_)
            | Self::Internal(_) => 500,
        }
    }

    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::DataSource(_) => "DATA_SOURCE_ERROR",
            Self::Cache(_) => "CACHE_ERROR",
            Self::Serialization(_) => "SERIALIZATION_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Returns the text safe to put in a response body.
    ///
    /// Backend causes are never included; only validation messages are
    /// passed through verbatim.
    #[must_use]
    pub fn client_message(&self) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            Self::NotFound { .. } => messages::ARTICLE_NOT_FOUND.to_string(),
            Self::DataSource(_) => messages::DATA_SOURCE.to_string(),
            Self::Serialization(_) => messages::MALFORMED_CACHE_ENTRY.to_string(),
            Self::Cache(_) | Self::Configuration(_) | Self::Internal(_) => {
                messages::INTERNAL.to_string()
            }
        }
    }

    /// Creates a not found error for a resource.
    #[must_use]
    pub fn not_found<T: ToString>(resource_type: &'static str, id: T) -> Self {
        Self::NotFound {
            resource_type,
            id: id.to_string(),
        }
    }

    /// Creates a validation error.
    #[must_use]
    pub fn validation<T: Into<String>>(message: T) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a data source error.
    #[must_use]
    pub fn data_source<T: Into<String>>(message: T) -> Self {
        Self::DataSource(message.into())
    }

    /// Creates a cache error.
    #[must_use]
    pub fn cache<T: Into<String>>(message: T) -> Self {
        Self::Cache(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for FolioError {
    fn from(err: sqlx::Error) -> Self {
        Self::DataSource(err.to_string())
    }
}

impl From<serde_json::Error> for FolioError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(FolioError::validation("title: title is required").status_code(), 400);
        assert_eq!(FolioError::not_found("Article", "missing").status_code(), 400);
        assert_eq!(FolioError::data_source("connection refused").status_code(), 500);
        assert_eq!(FolioError::Serialization("eof".to_string()).status_code(), 500);
        assert_eq!(FolioError::internal("oops").status_code(), 500);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(FolioError::not_found("Article", 1).error_code(), "NOT_FOUND");
        assert_eq!(FolioError::data_source("db").error_code(), "DATA_SOURCE_ERROR");
        assert_eq!(FolioError::cache("down").error_code(), "CACHE_ERROR");
    }

    #[test]
    fn test_client_message_hides_backend_cause() {
        let err = FolioError::data_source("Unknown column 'userid' in 'where clause'");
        assert_eq!(err.client_message(), "DataSource error");
        assert!(err.to_string().contains("Unknown column"));

        let err = FolioError::cache("Connection reset by peer");
        assert!(!err.client_message().contains("Connection reset"));
    }

    #[test]
    fn test_client_message_passes_validation_through() {
        let err = FolioError::validation("content: content is required");
        assert_eq!(err.client_message(), "content: content is required");
    }

    #[test]
    fn test_not_found_uses_article_text() {
        let err = FolioError::not_found("Article", "abc");
        assert_eq!(err.client_message(), "No article found for specified id");
        assert!(err.to_string().contains("abc"));
    }

    #[test]
    fn test_serde_json_error_is_serialization() {
        let err: FolioError = serde_json::from_str::<u32>("not json").unwrap_err().into();
        assert!(matches!(err, FolioError::Serialization(_)));
    }
}
