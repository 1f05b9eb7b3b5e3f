pub mod address_service;
pub mod delivery;
pub mod error;
pub mod otp_controller;
pub mod otp_settings;
pub mod phone;
pub mod reconciliation;
pub mod stores;
pub mod user_service;
pub mod verified_session;

pub use address_service::AddressService;
pub use delivery::{
    DeliveryError, DeliveryResult, LogDelivery, OtpDelivery, WebhookDelivery, otp_message,
};
pub use error::{IdentityError, Result};
pub use otp_controller::OtpController;
pub use otp_settings::OtpSettings;
pub use phone::validate_phone;
pub use reconciliation::reconcile_identity;
pub use stores::{AddressStore, IdentityStore, OtpStore};
pub use user_service::UserService;
pub use verified_session::VerifiedSession;
