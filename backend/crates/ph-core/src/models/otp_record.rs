//! Outstanding verification attempt.

use crate::clock;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default validity window of an issued code.
pub const DEFAULT_OTP_TTL_SECS: i64 = 5 * 60;

/// A live one-time passcode awaiting redemption.
///
/// Records are never updated: they are created when a code is issued and
/// deleted when the code is consumed or found expired. Only the keyed hash of
/// the code is kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpRecord {
    /// Verification id handed back to the caller
    pub id: Uuid,
    pub phone: String,
    /// Hex encoded HMAC of the code
    pub hashed_code: String,
    pub created_at: DateTime<Utc>,
}

impl OtpRecord {
    pub fn new(phone: String, hashed_code: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            phone,
            hashed_code,
            created_at: clock::now(),
        }
    }

    /// Last instant at which the code is still accepted.
    pub fn expires_at(&self, ttl: Duration) -> DateTime<Utc> {
        self.created_at + ttl
    }

    /// A record created at `t` is valid up to and including `t + ttl`.
    pub fn is_expired_at(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        now > self.expires_at(ttl)
    }

    pub fn belongs_to(&self, phone: &str) -> bool {
        self.phone == phone
    }
}
