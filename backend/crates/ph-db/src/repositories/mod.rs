pub mod address_repository;
pub mod otp_repository;
pub mod user_repository;
