use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_OTP_CODE_MAX, DEFAULT_OTP_CODE_MIN,
    DEFAULT_OTP_PURGE_INTERVAL_SECS, DEFAULT_OTP_TTL_SECS, MAX_OTP_TTL_SECS,
};

use serde::Deserialize;

/// One-time passcode issuance
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct OtpConfig {
    /// HMAC key for codes stored at rest
    pub hash_secret: Option<String>,
    /// Validity window of an issued code
    pub ttl_secs: i64,
    pub code_min: u32,
    pub code_max: u32,
    /// Expired-record sweep period (0 = disabled)
    pub purge_interval_secs: u64,
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self {
            hash_secret: None,
            ttl_secs: DEFAULT_OTP_TTL_SECS,
            code_min: DEFAULT_OTP_CODE_MIN,
            code_max: DEFAULT_OTP_CODE_MAX,
            purge_interval_secs: DEFAULT_OTP_PURGE_INTERVAL_SECS,
        }
    }
}

impl OtpConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.hash_secret.as_deref().is_none_or(str::is_empty) {
            return Err(ConfigError::otp("otp.hash_secret is required"));
        }

        if !(1..=MAX_OTP_TTL_SECS).contains(&self.ttl_secs) {
            return Err(ConfigError::otp(format!(
                "otp.ttl_secs must be between 1 and {}, got {}",
                MAX_OTP_TTL_SECS, self.ttl_secs
            )));
        }

        if self.code_min >= self.code_max {
            return Err(ConfigError::otp(format!(
                "otp.code_min ({}) must be below otp.code_max ({})",
                self.code_min, self.code_max
            )));
        }

        Ok(())
    }
}

impl std::fmt::Debug for OtpConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OtpConfig")
            .field("hash_secret", &self.hash_secret.as_ref().map(|_| "<redacted>"))
            .field("ttl_secs", &self.ttl_secs)
            .field("code_min", &self.code_min)
            .field("code_max", &self.code_max)
            .field("purge_interval_secs", &self.purge_interval_secs)
            .finish()
    }
}
