//! One-time passcode lifecycle.
//!
//! A verification id moves from issued to consumed on a correct code, or is
//! rejected as expired. Wrong phone or wrong code leaves the record in place
//! so the caller can try again until it expires. Nothing about an identity is
//! touched until the code has been fully accepted.

use crate::{
    IdentityError, IdentityStore, OtpDelivery, OtpSettings, OtpStore, Result as IdentityErrorResult,
    VerifiedSession, reconcile_identity, validate_phone,
};

use ph_auth::{SecretHasher, TokenIssuer};
use ph_core::{ErrorLocation, OtpRecord};

use std::panic::Location;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use rand::Rng;
use uuid::Uuid;

pub struct OtpController {
    otps: Arc<dyn OtpStore>,
    identities: Arc<dyn IdentityStore>,
    delivery: Arc<dyn OtpDelivery>,
    hasher: SecretHasher,
    issuer: Arc<TokenIssuer>,
    settings: OtpSettings,
}

impl OtpController {
    pub fn new(
        otps: Arc<dyn OtpStore>,
        identities: Arc<dyn IdentityStore>,
        delivery: Arc<dyn OtpDelivery>,
        hasher: SecretHasher,
        issuer: Arc<TokenIssuer>,
        settings: OtpSettings,
    ) -> Self {
        Self {
            otps,
            identities,
            delivery,
            hasher,
            issuer,
            settings,
        }
    }

    pub fn settings(&self) -> &OtpSettings {
        &self.settings
    }

    /// Issue a code for `phone`, hand it to delivery in the background and
    /// return the verification id. Delivery failures are logged only.
    pub async fn generate_otp(&self, phone: &str) -> IdentityErrorResult<Uuid> {
        let phone = validate_phone(phone)?;

        let code = rand::rng().random_range(self.settings.code_min..=self.settings.code_max);
        let record = OtpRecord::new(phone.to_string(), self.hasher.hash(code));
        self.otps.create(&record).await?;

        let delivery = Arc::clone(&self.delivery);
        let to = record.phone.clone();
        tokio::spawn(async move {
            if let Err(e) = delivery.send(&to, code).await {
                log::warn!("Failed to deliver OTP to {}: {}", to, e);
            }
        });

        log::info!("Issued verification {} for {}", record.id, record.phone);
        Ok(record.id)
    }

    /// Redeem a code and return a session for the reconciled identity.
    pub async fn verify_otp(
        &self,
        phone: &str,
        verification_id: Uuid,
        code: &str,
        user_id_hint: Option<Uuid>,
    ) -> IdentityErrorResult<VerifiedSession> {
        self.verify_otp_at(phone, verification_id, code, user_id_hint, Utc::now())
            .await
    }

    /// [`Self::verify_otp`] evaluated at `now`.
    pub async fn verify_otp_at(
        &self,
        phone: &str,
        verification_id: Uuid,
        code: &str,
        user_id_hint: Option<Uuid>,
        now: DateTime<Utc>,
    ) -> IdentityErrorResult<VerifiedSession> {
        let phone = phone.trim();

        let record = self
            .otps
            .find_by_id(verification_id)
            .await?
            .ok_or_else(|| IdentityError::not_found("Verification", verification_id))?;

        if record.is_expired_at(now, self.settings.ttl) {
            if let Err(e) = self.otps.delete(record.id).await {
                log::warn!("Failed to remove expired verification {}: {}", record.id, e);
            }
            log::warn!("Verification {} attempted after expiry", record.id);
            return Err(IdentityError::Expired {
                verification_id: record.id,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if !record.belongs_to(phone) {
            log::warn!("Verification {} attempted with a different phone", record.id);
            return Err(IdentityError::PhoneMismatch {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let accepted = code
            .trim()
            .parse::<u32>()
            .is_ok_and(|code| self.hasher.verify(code, &record.hashed_code));
        if !accepted {
            log::warn!("Verification {} attempted with a wrong code", record.id);
            return Err(IdentityError::InvalidCode {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if !self.otps.delete(record.id).await? {
            return Err(IdentityError::not_found("Verification", record.id));
        }

        let user = reconcile_identity(self.identities.as_ref(), phone, user_id_hint).await?;
        let token = self.issuer.issue(user.id)?;

        log::info!("Verified {} as identity {}", phone, user.id);
        Ok(VerifiedSession { token, user })
    }

    /// Remove every record whose validity window has closed.
    pub async fn purge_expired(&self) -> IdentityErrorResult<u64> {
        self.purge_expired_at(Utc::now()).await
    }

    pub async fn purge_expired_at(&self, now: DateTime<Utc>) -> IdentityErrorResult<u64> {
        let removed = self.otps.delete_expired(now - self.settings.ttl).await?;
        if removed > 0 {
            log::debug!("Purged {} expired verifications", removed);
        }
        Ok(removed)
    }
}
