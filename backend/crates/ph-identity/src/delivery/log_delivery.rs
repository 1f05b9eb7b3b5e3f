use crate::delivery::{DeliveryResult, OtpDelivery, otp_message};

use async_trait::async_trait;

/// Development delivery: writes the message to the log instead of sending it.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogDelivery;

#[async_trait]
impl OtpDelivery for LogDelivery {
    async fn send(&self, phone: &str, code: u32) -> DeliveryResult<()> {
        log::info!("OTP for {}: {}", phone, otp_message(code));
        Ok(())
    }
}
