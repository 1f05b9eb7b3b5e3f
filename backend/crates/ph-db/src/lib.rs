pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::pool::{connect, run_migrations};
pub use error::{DbError, Result};
pub use repositories::address_repository::AddressRepository;
pub use repositories::otp_repository::OtpRepository;
pub use repositories::user_repository::UserRepository;
