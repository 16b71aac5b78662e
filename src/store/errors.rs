//! Error types for the record store.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Record store errors
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// Lookup requested against an attribute with no declared index
    #[error("No index declared for attribute: {0}")]
    InvalidIndex(String),

    /// No record exists under the given primary key
    #[error("No record with primary key: {0}")]
    NotFound(String),

    /// Record offered for storage lacks a string value for the primary key
    #[error("Record is missing primary key attribute: {0}")]
    MissingPrimaryKey(String),

    /// The primary key attribute cannot be rewritten in place
    #[error("Primary key attribute cannot be updated: {0}")]
    PrimaryKeyImmutable(String),

    /// Backend unavailable or rejected the call
    #[error("Storage backend error: {0}")]
    Backend(String),
}
