//! REST API error types
//!
//! Every failure becomes `{ "error": { "code", "message", "retryable" } }`
//! with a status matching its kind. Details (with location) go to the log;
//! storage failures reach the client only as a generic message.

use ph_auth::AuthError;
use ph_identity::IdentityError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "OTP_EXPIRED", "CONFLICT")
    pub code: String,
    pub message: String,
    /// Whether resubmitting with corrected input can succeed
    pub retryable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Unknown or already consumed resource (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Verification window closed (410)
    #[error("Verification expired {location}")]
    Expired { location: ErrorLocation },

    #[error("Phone mismatch {location}")]
    PhoneMismatch { location: ErrorLocation },

    #[error("Invalid code {location}")]
    InvalidCode { location: ErrorLocation },

    /// Phone already owned by another identity (409)
    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    /// Validation error (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Missing or rejected session token (401)
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Internal { .. } => log::error!("{}", self),
            _ => log::warn!("{}", self),
        }

        let (status, code, message, retryable, field) = match self {
            ApiError::NotFound { message, .. } => {
                (StatusCode::NOT_FOUND, "NOT_FOUND", message, false, None)
            }
            ApiError::Expired { .. } => (
                StatusCode::GONE,
                "OTP_EXPIRED",
                "Verification code has expired".to_string(),
                true,
                None,
            ),
            ApiError::PhoneMismatch { .. } => (
                StatusCode::BAD_REQUEST,
                "PHONE_MISMATCH",
                "Phone number does not match the verification request".to_string(),
                true,
                None,
            ),
            ApiError::InvalidCode { .. } => (
                StatusCode::BAD_REQUEST,
                "INVALID_CODE",
                "Invalid verification code".to_string(),
                true,
                None,
            ),
            ApiError::Conflict { message, .. } => {
                (StatusCode::CONFLICT, "CONFLICT", message, false, None)
            }
            ApiError::Validation { message, field, .. } => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                message,
                false,
                field,
            ),
            ApiError::Unauthorized { message, .. } => {
                (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", message, false, None)
            }
            ApiError::Internal { message, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                message,
                false,
                None,
            ),
        };

        let body = ApiErrorBody {
            code: code.into(),
            message,
            retryable,
            field,
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

impl From<IdentityError> for ApiError {
    #[track_caller]
    fn from(e: IdentityError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        match e {
            IdentityError::NotFound { entity, id, .. } => ApiError::NotFound {
                message: format!("{} {} not found", entity, id),
                location,
            },
            IdentityError::Expired { .. } => ApiError::Expired { location },
            IdentityError::PhoneMismatch { .. } => ApiError::PhoneMismatch { location },
            IdentityError::InvalidCode { .. } => ApiError::InvalidCode { location },
            IdentityError::Conflict { message, .. } => ApiError::Conflict { message, location },
            IdentityError::Validation { message, field, .. } => ApiError::Validation {
                message,
                field,
                location,
            },
            IdentityError::Auth { source, .. } => ApiError::from(source),
            IdentityError::Storage { source, .. } => {
                // Don't expose internal database details to clients
                log::error!("Storage error: {}", source);
                ApiError::Internal {
                    message: "Database operation failed".to_string(),
                    location,
                }
            }
        }
    }
}

impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        if !e.is_client_error() {
            log::error!("Token signing failed: {}", e);
            return ApiError::Internal {
                message: "Failed to issue session token".to_string(),
                location,
            };
        }

        let message = match e {
            AuthError::MissingHeader { .. } => "Missing authorization header".to_string(),
            AuthError::InvalidScheme { .. } => "Expected a Bearer token".to_string(),
            AuthError::TokenExpired { .. } => "Session token has expired".to_string(),
            AuthError::InvalidClaim { claim, .. } => format!("Invalid token claim '{}'", claim),
            _ => "Invalid session token".to_string(),
        };

        ApiError::Unauthorized { message, location }
    }
}

/// Convert UUID parse errors to API errors
impl From<uuid::Error> for ApiError {
    #[track_caller]
    fn from(e: uuid::Error) -> Self {
        ApiError::Validation {
            message: format!("Invalid UUID format: {}", e),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
