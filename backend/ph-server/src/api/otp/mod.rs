pub mod generate_otp_request;
pub mod generate_otp_response;
#[allow(clippy::module_inception)]
pub mod otp;
pub mod session_response;
pub mod verify_otp_request;
