//! Address book REST API handlers
//!
//! All routes act on the caller's own addresses.

use crate::{AddressListResponse, AddressResponse, ApiResult, AppState, AuthUser};

use ph_core::AddressFields;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

/// POST /api/v1/users/me/addresses
pub async fn create_address(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(req): Json<AddressFields>,
) -> ApiResult<(StatusCode, Json<AddressResponse>)> {
    let address = state.addresses.create(user_id, req).await?;

    Ok((
        StatusCode::CREATED,
        Json(AddressResponse {
            address: address.into(),
        }),
    ))
}

/// GET /api/v1/users/me/addresses
pub async fn list_addresses(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> ApiResult<Json<AddressListResponse>> {
    let addresses = state.addresses.list(user_id).await?;

    Ok(Json(AddressListResponse {
        addresses: addresses.into_iter().map(Into::into).collect(),
    }))
}

/// GET /api/v1/users/me/addresses/{id}
pub async fn get_address(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<AddressResponse>> {
    let address_id = Uuid::parse_str(&id)?;
    let address = state.addresses.get(user_id, address_id).await?;

    Ok(Json(AddressResponse {
        address: address.into(),
    }))
}

/// PATCH /api/v1/users/me/addresses/{id}
///
/// Fields omitted from the body keep their stored value
pub async fn update_address(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<String>,
    Json(req): Json<AddressFields>,
) -> ApiResult<Json<AddressResponse>> {
    let address_id = Uuid::parse_str(&id)?;
    let address = state.addresses.update(user_id, address_id, req).await?;

    Ok(Json(AddressResponse {
        address: address.into(),
    }))
}
