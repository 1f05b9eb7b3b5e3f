use crate::{ConfigError, ConfigErrorResult, DEFAULT_DELIVERY_TIMEOUT_SECS};

use std::str::FromStr;

use serde::Deserialize;

/// How issued codes reach the phone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryMode {
    /// Write the code to the log (development only)
    #[default]
    Log,
    /// POST the message to an SMS gateway
    Webhook,
}

impl DeliveryMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Log => "log",
            Self::Webhook => "webhook",
        }
    }
}

impl FromStr for DeliveryMode {
    type Err = ConfigError;

    #[track_caller]
    fn from_str(s: &str) -> ConfigErrorResult<Self> {
        match s.to_lowercase().as_str() {
            "log" => Ok(Self::Log),
            "webhook" => Ok(Self::Webhook),
            other => Err(ConfigError::delivery(format!(
                "unknown delivery mode '{}'",
                other
            ))),
        }
    }
}

#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct DeliveryConfig {
    pub mode: DeliveryMode,
    pub webhook_url: Option<String>,
    /// Sent as a bearer token to the gateway when present
    pub api_key: Option<String>,
    pub timeout_secs: u64,
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self {
            mode: DeliveryMode::default(),
            webhook_url: None,
            api_key: None,
            timeout_secs: DEFAULT_DELIVERY_TIMEOUT_SECS,
        }
    }
}

impl DeliveryConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.mode == DeliveryMode::Webhook {
            match self.webhook_url.as_deref() {
                None | Some("") => {
                    return Err(ConfigError::delivery(
                        "delivery.webhook_url is required when delivery.mode = \"webhook\"",
                    ));
                }
                Some(url) if !(url.starts_with("http://") || url.starts_with("https://")) => {
                    return Err(ConfigError::delivery(format!(
                        "delivery.webhook_url must be an http(s) URL, got {}",
                        url
                    )));
                }
                Some(_) => {}
            }
        }

        if self.timeout_secs == 0 {
            return Err(ConfigError::delivery("delivery.timeout_secs must be positive"));
        }

        Ok(())
    }
}

impl std::fmt::Debug for DeliveryConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeliveryConfig")
            .field("mode", &self.mode)
            .field("webhook_url", &self.webhook_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
