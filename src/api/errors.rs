//! Error types for the REST operation layer.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::observability::Logger;
use crate::store::StoreError;
use crate::validation::ValidationError;

/// Result type for REST operations
pub type ApiResult<T> = Result<T, ApiError>;

/// REST operation errors
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Required field absent from a create payload
    #[error("Missing required field: {0}")]
    MissingField(String),

    /// Request body is not usable for the operation
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// Required query parameter absent
    #[error("Missing required parameter: {0}")]
    MissingParam(String),

    /// Read requested an attribute with no declared index
    #[error("No index declared for attribute: {0}")]
    InvalidIndex(String),

    /// No record under the given primary key
    #[error("No record with primary key: {0}")]
    NotFound(String),

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Backend unavailable or rejected the call
    #[error("Storage error: {0}")]
    Storage(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingField(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::MissingParam(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidIndex(_) => StatusCode::BAD_REQUEST,

            ApiError::NotFound(_) => StatusCode::NOT_FOUND,

            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::MissingField(field) => ApiError::MissingField(field),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::InvalidIndex(attribute) => ApiError::InvalidIndex(attribute),
            StoreError::NotFound(key) => ApiError::NotFound(key),
            StoreError::PrimaryKeyImmutable(attribute) => ApiError::InvalidBody(format!(
                "primary key attribute '{attribute}' cannot be replaced"
            )),
            // The create pipeline assigns the key before every put; a missing
            // key at the store is an internal inconsistency, not client input.
            StoreError::MissingPrimaryKey(attribute) => ApiError::Storage(format!(
                "record reached the store without primary key attribute '{attribute}'"
            )),
            StoreError::Backend(message) => ApiError::Storage(message),
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<ApiError> for ErrorResponse {
    fn from(err: ApiError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            Logger::error("REQUEST_FAILED", &[("error", &self.to_string())]);
        }
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}
