use crate::{AuthError, Claims, Result as AuthErrorResult};

use std::panic::Location;

use chrono::{DateTime, Duration, Utc};
use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use uuid::Uuid;

pub const DEFAULT_TOKEN_TTL_HOURS: i64 = 24;

/// Mints signed session tokens for verified identities
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    ttl: Duration,
}

impl TokenIssuer {
    /// Create issuer with HS256 (symmetric secret)
    pub fn with_hs256(secret: &[u8], ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            ttl,
        }
    }

    /// Issue a token for `user_id` valid from now
    #[track_caller]
    pub fn issue(&self, user_id: Uuid) -> AuthErrorResult<String> {
        self.issue_at(user_id, Utc::now())
    }

    /// Issue a token as if minted at `issued_at`
    #[track_caller]
    pub fn issue_at(&self, user_id: Uuid, issued_at: DateTime<Utc>) -> AuthErrorResult<String> {
        let claims = Claims {
            sub: user_id.to_string(),
            authorized: true,
            exp: (issued_at + self.ttl).timestamp(),
            iat: issued_at.timestamp(),
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &self.encoding_key,
        )
        .map_err(|e| AuthError::JwtEncode {
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}
