use ph_core::DEFAULT_OTP_TTL_SECS;

use chrono::Duration;

/// Issuance parameters for one-time codes
#[derive(Debug, Clone, Copy)]
pub struct OtpSettings {
    /// How long an issued code stays redeemable
    pub ttl: Duration,
    pub code_min: u32,
    pub code_max: u32,
}

impl Default for OtpSettings {
    fn default() -> Self {
        Self {
            ttl: Duration::seconds(DEFAULT_OTP_TTL_SECS),
            code_min: 1000,
            code_max: 9999,
        }
    }
}
