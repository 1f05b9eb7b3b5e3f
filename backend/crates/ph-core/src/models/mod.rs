pub mod address;
pub mod new_user;
pub mod otp_record;
pub mod profile_update;
pub mod user;
pub mod user_role;
