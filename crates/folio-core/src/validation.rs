//! Validation utilities.

use crate::FolioError;
use validator::{Validate, ValidationErrors};

/// Extension trait for validation.
pub trait ValidateExt: Validate {
    /// Validates the struct and returns a `FolioError` on failure.
    fn validate_request(&self) -> Result<(), FolioError> {
        self.validate().map_err(validation_errors_to_folio_error)
    }
}

impl<T: Validate> ValidateExt for T {}

/// Converts `validator::ValidationErrors` to a single `FolioError::Validation`.
///
/// Messages are rendered as `field: message` and joined with `"; "`, sorted
/// by field name so the text is stable across runs.
#[must_use]
pub fn validation_errors_to_folio_error(errors: ValidationErrors) -> FolioError {
    let mut field_errors: Vec<(String, String)> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                (
                    (*field).to_string(),
                    error
                        .message
                        .as_ref()
                        .map_or_else(|| error.code.to_string(), ToString::to_string),
                )
            })
        })
        .collect();
    field_errors.sort();

    let message = field_errors
        .iter()
        .map(|(field, message)| format!("{field}: {message}"))
        .collect::<Vec<_>>()
        .join("; ");

    FolioError::Validation(message)
}

/// Common validation functions.
pub mod rules {
    use validator::ValidationError;

    /// Validates that a string is a plain SQL identifier.
    pub fn sql_identifier(value: &str) -> Result<(), ValidationError> {
        let mut chars = value.chars();
        let starts_ok = chars
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
        if !starts_ok || !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(ValidationError::new("sql_identifier"));
        }
        Ok(())
    }
}
