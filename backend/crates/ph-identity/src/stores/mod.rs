//! Persistence seams used by the identity workflows.
//!
//! The controller and services only see these traits, so tests and
//! alternative backends can stand in for the SQLite repositories.

mod address_store;
mod identity_store;
mod otp_store;

pub use address_store::AddressStore;
pub use identity_store::IdentityStore;
pub use otp_store::OtpStore;
