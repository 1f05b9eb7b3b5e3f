//! Keyed hashing of numeric one-time codes.
//!
//! Codes are stored at rest as the hex encoded HMAC-SHA256 of their decimal
//! representation. Without the secret the digest cannot be brute-forced back
//! to the four-digit code.

use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

#[derive(Clone)]
pub struct SecretHasher {
    mac: HmacSha256,
}

impl SecretHasher {
    #[track_caller]
    pub fn new(secret: &[u8]) -> AuthErrorResult<Self> {
        let mac = HmacSha256::new_from_slice(secret).map_err(|e| AuthError::InvalidKey {
            message: format!("HMAC key rejected: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(Self { mac })
    }

    /// Hex digest of `code`. Same code and secret always give the same digest.
    pub fn hash(&self, code: u32) -> String {
        let mut mac = self.mac.clone();
        mac.update(code.to_string().as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    /// Recompute the digest of `code` and compare it with `digest_hex` in
    /// constant time. A digest that is not valid hex never matches.
    pub fn verify(&self, code: u32, digest_hex: &str) -> bool {
        let Ok(expected) = hex::decode(digest_hex) else {
            return false;
        };

        let mut mac = self.mac.clone();
        mac.update(code.to_string().as_bytes());
        mac.verify_slice(&expected).is_ok()
    }
}

impl std::fmt::Debug for SecretHasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretHasher").finish_non_exhaustive()
    }
}

/// One-shot form of [`SecretHasher::hash`].
#[track_caller]
pub fn hash_code(code: u32, secret: &[u8]) -> AuthErrorResult<String> {
    Ok(SecretHasher::new(secret)?.hash(code))
}
