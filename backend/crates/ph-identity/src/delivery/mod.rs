//! Out-of-band delivery of one-time codes.

mod error;
mod log_delivery;
mod webhook_delivery;

pub use error::{DeliveryError, Result as DeliveryResult};
pub use log_delivery::LogDelivery;
pub use webhook_delivery::WebhookDelivery;

use async_trait::async_trait;

/// Sends a freshly generated code to the phone it was issued for.
///
/// Called from a detached task; the result is only ever logged.
#[async_trait]
pub trait OtpDelivery: Send + Sync {
    async fn send(&self, phone: &str, code: u32) -> DeliveryResult<()>;
}

/// Text of the message carrying `code`.
pub fn otp_message(code: u32) -> String {
    format!("Your verification code is {}", code)
}
