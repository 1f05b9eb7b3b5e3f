pub mod clock;
pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::address::{Address, AddressFields};
pub use models::new_user::NewUser;
pub use models::otp_record::{DEFAULT_OTP_TTL_SECS, OtpRecord};
pub use models::profile_update::ProfileUpdate;
pub use models::user::User;
pub use models::user_role::UserRole;

#[cfg(test)]
mod tests;
