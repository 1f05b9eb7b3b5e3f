use crate::ApiError;

use ph_auth::AuthError;
use ph_db::DbError;
use ph_identity::IdentityError;

use std::panic::Location;

use axum::response::{IntoResponse, Response};
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;
use uuid::Uuid;

fn here() -> ErrorLocation {
    ErrorLocation::from(Location::caller())
}

async fn body_json(response: Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_expired_returns_410_and_retryable() {
    let error: ApiError = IdentityError::Expired {
        verification_id: Uuid::new_v4(),
        location: here(),
    }
    .into();
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::GONE);
    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "OTP_EXPIRED");
    assert_eq!(json["error"]["retryable"], true);
}

#[tokio::test]
async fn test_invalid_code_and_phone_mismatch_return_400() {
    for (error, code) in [
        (IdentityError::InvalidCode { location: here() }, "INVALID_CODE"),
        (IdentityError::PhoneMismatch { location: here() }, "PHONE_MISMATCH"),
    ] {
        let response = ApiError::from(error).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], code);
        assert_eq!(json["error"]["retryable"], true);
    }
}

#[tokio::test]
async fn test_not_found_returns_404_not_retryable() {
    let response =
        ApiError::from(IdentityError::not_found("Verification", Uuid::nil())).into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["retryable"], false);
}

#[tokio::test]
async fn test_conflict_returns_409() {
    let response = ApiError::from(IdentityError::conflict("phone taken")).into_response();

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "CONFLICT");
    assert_eq!(json["error"]["message"], "phone taken");
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let response =
        ApiError::from(IdentityError::validation("phone", "phone number is required"))
            .into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "phone");
}

#[tokio::test]
async fn test_storage_error_is_sanitised() {
    let error: IdentityError = DbError::Initialization {
        message: "secret table layout".to_string(),
        location: here(),
    }
    .into();
    let response = ApiError::from(error).into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    assert!(
        !json["error"]["message"]
            .as_str()
            .unwrap()
            .contains("secret table layout")
    );
}

#[tokio::test]
async fn test_client_auth_failures_return_401() {
    for error in [
        AuthError::MissingHeader { location: here() },
        AuthError::InvalidScheme { location: here() },
        AuthError::TokenExpired { location: here() },
    ] {
        let response = ApiError::from(error).into_response();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "UNAUTHORIZED");
    }
}

#[tokio::test]
async fn test_signing_key_failure_is_internal() {
    let error = AuthError::InvalidKey {
        message: "empty".to_string(),
        location: here(),
    };

    let response = ApiError::from(error).into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn test_malformed_uuid_is_validation_error() {
    let error = ApiError::from(Uuid::parse_str("nope").unwrap_err());

    assert!(matches!(error, ApiError::Validation { .. }));
}
