use poem_openapi::{payload::Json, ApiResponse};
use std::fmt;

use crate::types::dto::common::ErrorResponse;

/// Error responses shared by all API endpoints.
///
/// Store and library failures are logged with full detail at the handler
/// boundary; only the generic bodies below cross it.
#[derive(ApiResponse, Debug)]
pub enum ApiError {
    /// Invalid username or password
    #[oai(status = 401)]
    InvalidCredentials(Json<ErrorResponse>),

    /// No active session for a session-gated endpoint
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),

    /// A referenced entity does not exist
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),

    /// Username already exists
    #[oai(status = 409)]
    DuplicateUsername(Json<ErrorResponse>),

    /// Malformed or out-of-bounds input
    #[oai(status = 400)]
    Validation(Json<ErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    Internal(Json<ErrorResponse>),
}

impl ApiError {
    /// Create an InvalidCredentials error
    ///
    /// The same body is returned for "user not found" and "wrong password"
    /// so the response does not leak which one failed.
    pub fn invalid_credentials() -> Self {
        ApiError::InvalidCredentials(Json(ErrorResponse {
            error: "invalid_credentials".to_string(),
            message: "Invalid username or password".to_string(),
            status_code: 401,
        }))
    }

    /// Create an Unauthorized error
    pub fn unauthorized() -> Self {
        ApiError::Unauthorized(Json(ErrorResponse {
            error: "unauthorized".to_string(),
            message: "Access denied. Please log in.".to_string(),
            status_code: 401,
        }))
    }

    /// Create a NotFound error
    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(Json(ErrorResponse {
            error: "not_found".to_string(),
            message: message.into(),
            status_code: 404,
        }))
    }

    /// Create a DuplicateUsername error
    pub fn duplicate_username() -> Self {
        ApiError::DuplicateUsername(Json(ErrorResponse {
            error: "duplicate_username".to_string(),
            message: "Username already exists".to_string(),
            status_code: 409,
        }))
    }

    /// Create a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation(Json(ErrorResponse {
            error: "validation_error".to_string(),
            message: message.into(),
            status_code: 400,
        }))
    }

    /// Create an Internal error with the generic caller-facing message
    pub fn internal() -> Self {
        ApiError::Internal(Json(ErrorResponse {
            error: "internal_error".to_string(),
            message: "Internal server error".to_string(),
            status_code: 500,
        }))
    }

    /// Get the error message from the error variant
    pub fn message(&self) -> String {
        match self {
            ApiError::InvalidCredentials(json) => json.0.message.clone(),
            ApiError::Unauthorized(json) => json.0.message.clone(),
            ApiError::NotFound(json) => json.0.message.clone(),
            ApiError::DuplicateUsername(json) => json.0.message.clone(),
            ApiError::Validation(json) => json.0.message.clone(),
            ApiError::Internal(json) => json.0.message.clone(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
