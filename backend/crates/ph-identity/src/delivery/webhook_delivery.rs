//! SMS gateway delivery over HTTP.
//!
//! Posts `{ "to": <phone>, "message": <text> }` to the configured URL, with an
//! optional bearer API key. Any non-2xx status counts as a rejection.

use crate::delivery::{DeliveryError, DeliveryResult, OtpDelivery, otp_message};

use ph_core::ErrorLocation;

use std::panic::Location;
use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;

#[derive(Serialize)]
struct SmsRequest<'a> {
    to: &'a str,
    message: String,
}

pub struct WebhookDelivery {
    client: reqwest::Client,
    url: String,
    api_key: Option<String>,
}

impl WebhookDelivery {
    #[track_caller]
    pub fn new(
        url: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> DeliveryResult<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            url: url.into(),
            api_key,
        })
    }
}

impl std::fmt::Debug for WebhookDelivery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebhookDelivery")
            .field("url", &self.url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

#[async_trait]
impl OtpDelivery for WebhookDelivery {
    async fn send(&self, phone: &str, code: u32) -> DeliveryResult<()> {
        let body = SmsRequest {
            to: phone,
            message: otp_message(code),
        };

        let mut request = self.client.post(&self.url).json(&body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(DeliveryError::Rejected {
                status: status.as_u16(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        log::debug!("Delivered OTP to {} via webhook", phone);
        Ok(())
    }
}
