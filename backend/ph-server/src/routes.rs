use crate::{
    AppState, create_address, create_user, generate_otp, get_address, get_current_user,
    get_user_by_email, get_user_by_id, health, list_addresses, update_address,
    update_current_user, verify_otp,
};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        // OTP lifecycle
        .route("/api/v1/otp", post(generate_otp))
        .route("/api/v1/otp/verify", post(verify_otp))
        // Accounts
        .route("/api/v1/users", post(create_user))
        .route(
            "/api/v1/users/me",
            get(get_current_user).patch(update_current_user),
        )
        .route("/api/v1/users/{id}", get(get_user_by_id))
        .route("/api/v1/users/email/{email}", get(get_user_by_email))
        // Address book
        .route(
            "/api/v1/users/me/addresses",
            get(list_addresses).post(create_address),
        )
        .route(
            "/api/v1/users/me/addresses/{id}",
            get(get_address).patch(update_address),
        )
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
