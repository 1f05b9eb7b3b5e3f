//! Axum extractor for bearer session tokens

use crate::{ApiError, AppState};

use ph_auth::JwtValidator;

use std::future::Future;

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use uuid::Uuid;

/// The identity named by a valid `Authorization: Bearer <token>` header.
///
/// Rejects a missing header, a non-bearer scheme, a bad signature, an expired
/// token and a token without a usable subject.
pub struct AuthUser(pub Uuid);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let header = parts
                .headers
                .get(AUTHORIZATION)
                .and_then(|value| value.to_str().ok());

            let token = JwtValidator::bearer_token(header)?;
            let context = state.validator.authenticate(token)?;

            log::debug!("Authenticated request for identity {}", context.user_id);
            Ok(AuthUser(context.user_id))
        }
    }
}
