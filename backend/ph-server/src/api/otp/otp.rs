//! OTP REST API handlers

use crate::{
    ApiResult, AppState, GenerateOtpRequest, GenerateOtpResponse, SessionResponse,
    VerifyOtpRequest,
};

use axum::{Json, extract::State, http::StatusCode};
use uuid::Uuid;

/// POST /api/v1/otp
///
/// Issue a code for a phone number. The code is delivered out of band.
pub async fn generate_otp(
    State(state): State<AppState>,
    Json(req): Json<GenerateOtpRequest>,
) -> ApiResult<(StatusCode, Json<GenerateOtpResponse>)> {
    let verification_id = state.otp.generate_otp(&req.phone).await?;

    Ok((
        StatusCode::CREATED,
        Json(GenerateOtpResponse { verification_id }),
    ))
}

/// POST /api/v1/otp/verify
///
/// Redeem a code and receive a session token for the reconciled identity.
pub async fn verify_otp(
    State(state): State<AppState>,
    Json(req): Json<VerifyOtpRequest>,
) -> ApiResult<Json<SessionResponse>> {
    let verification_id = Uuid::parse_str(&req.verification_id)?;
    let user_id_hint = req.user_id.as_deref().map(Uuid::parse_str).transpose()?;

    let session = state
        .otp
        .verify_otp(&req.phone, verification_id, &req.code, user_id_hint)
        .await?;

    Ok(Json(SessionResponse {
        token: session.token,
        user: session.user.into(),
    }))
}
