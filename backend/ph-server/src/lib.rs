pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod sweeper;

#[cfg(test)]
mod tests;

pub use api::{
    addresses::{
        address_dto::AddressDto,
        address_list_response::AddressListResponse,
        address_response::AddressResponse,
        addresses::{create_address, get_address, list_addresses, update_address},
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::auth_user::AuthUser,
    otp::{
        generate_otp_request::GenerateOtpRequest,
        generate_otp_response::GenerateOtpResponse,
        otp::{generate_otp, verify_otp},
        session_response::SessionResponse,
        verify_otp_request::VerifyOtpRequest,
    },
    users::{
        user_dto::UserDto,
        user_response::UserResponse,
        users::{
            create_user, get_current_user, get_user_by_email, get_user_by_id, update_current_user,
        },
    },
};
pub use app_state::AppState;

pub use crate::routes::build_router;
