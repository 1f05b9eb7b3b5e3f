use ph_auth::AuthError;
use ph_db::DbError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum IdentityError {
    #[error("{entity} not found: {id} {location}")]
    NotFound {
        entity: &'static str,
        id: String,
        location: ErrorLocation,
    },

    #[error("Verification {verification_id} has expired {location}")]
    Expired {
        verification_id: Uuid,
        location: ErrorLocation,
    },

    #[error("Phone number does not match the verification request {location}")]
    PhoneMismatch { location: ErrorLocation },

    #[error("Invalid verification code {location}")]
    InvalidCode { location: ErrorLocation },

    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Storage error: {source} {location}")]
    Storage {
        #[source]
        source: DbError,
        location: ErrorLocation,
    },

    #[error("Authentication error: {source} {location}")]
    Auth {
        #[source]
        source: AuthError,
        location: ErrorLocation,
    },
}

impl IdentityError {
    #[track_caller]
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Machine-readable code for client responses
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Expired { .. } => "OTP_EXPIRED",
            Self::PhoneMismatch { .. } => "PHONE_MISMATCH",
            Self::InvalidCode { .. } => "INVALID_CODE",
            Self::Conflict { .. } => "CONFLICT",
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::Storage { .. } => "INTERNAL_ERROR",
            Self::Auth { .. } => "UNAUTHORIZED",
        }
    }

    /// Whether the caller can fix the failure by resubmitting: a fresh code,
    /// the right code, or the right phone. Everything else is terminal for
    /// this attempt.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Expired { .. } | Self::InvalidCode { .. } | Self::PhoneMismatch { .. }
        )
    }
}

impl From<DbError> for IdentityError {
    #[track_caller]
    fn from(source: DbError) -> Self {
        match source {
            DbError::UniqueViolation { message, .. } => Self::Conflict {
                message,
                location: ErrorLocation::from(Location::caller()),
            },
            other => Self::Storage {
                source: other,
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

impl From<AuthError> for IdentityError {
    #[track_caller]
    fn from(source: AuthError) -> Self {
        Self::Auth {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, IdentityError>;
