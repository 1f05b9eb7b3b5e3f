use ph_identity::{DeliveryError, DeliveryResult, OtpDelivery};

use ph_core::ErrorLocation;

use std::panic::Location;

use async_trait::async_trait;
use tokio::sync::mpsc;

/// Delivery that forwards every `(phone, code)` to a channel
pub struct ChannelDelivery {
    sender: mpsc::UnboundedSender<(String, u32)>,
}

impl ChannelDelivery {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<(String, u32)>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

#[async_trait]
impl OtpDelivery for ChannelDelivery {
    async fn send(&self, phone: &str, code: u32) -> DeliveryResult<()> {
        let _ = self.sender.send((phone.to_string(), code));
        Ok(())
    }
}

/// Delivery whose gateway always refuses the message
pub struct FailingDelivery;

#[async_trait]
impl OtpDelivery for FailingDelivery {
    async fn send(&self, _phone: &str, _code: u32) -> DeliveryResult<()> {
        Err(DeliveryError::Rejected {
            status: 503,
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
