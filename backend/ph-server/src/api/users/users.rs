//! Account REST API handlers

use crate::{ApiResult, AppState, AuthUser, UserResponse};

use ph_core::{NewUser, ProfileUpdate};

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

/// POST /api/v1/users
///
/// Sign up an unverified identity
pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<NewUser>,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    let user = state.users.register(req).await?;

    Ok((
        StatusCode::CREATED,
        Json(UserResponse { user: user.into() }),
    ))
}

/// GET /api/v1/users/me
pub async fn get_current_user(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> ApiResult<Json<UserResponse>> {
    let user = state.users.get(user_id).await?;

    Ok(Json(UserResponse { user: user.into() }))
}

/// PATCH /api/v1/users/me
///
/// Fields omitted from the body keep their stored value
pub async fn update_current_user(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(req): Json<ProfileUpdate>,
) -> ApiResult<Json<UserResponse>> {
    let user = state.users.update_profile(user_id, req).await?;

    Ok(Json(UserResponse { user: user.into() }))
}

/// GET /api/v1/users/{id}
pub async fn get_user_by_id(
    State(state): State<AppState>,
    AuthUser(_): AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<UserResponse>> {
    let user_id = Uuid::parse_str(&id)?;
    let user = state.users.get(user_id).await?;

    Ok(Json(UserResponse { user: user.into() }))
}

/// GET /api/v1/users/email/{email}
pub async fn get_user_by_email(
    State(state): State<AppState>,
    AuthUser(_): AuthUser,
    Path(email): Path<String>,
) -> ApiResult<Json<UserResponse>> {
    let user = state.users.find_by_email(&email).await?;

    Ok(Json(UserResponse { user: user.into() }))
}
