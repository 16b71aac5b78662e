//! Required-field validation.
//!
//! A record is only accepted for storage if every required attribute for its
//! resource type is present. Presence is the whole contract: values are not
//! type- or range-checked here.

use thiserror::Error;

use crate::store::Record;

/// Result type for validation
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is absent from the record
    #[error("Missing required field: {0}")]
    MissingField(String),
}

/// Check that every name in `required` is present in the record.
///
/// Fails on the first missing field with its name.
pub fn validate_required(record: &Record, required: &[&str]) -> ValidationResult<()> {
    for field in required {
        if !record.contains_key(*field) {
            return Err(ValidationError::MissingField((*field).to_string()));
        }
    }
    Ok(())
}
