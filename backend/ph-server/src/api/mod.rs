pub mod addresses;
pub mod error;
pub mod extractors;
pub mod otp;
pub mod users;
