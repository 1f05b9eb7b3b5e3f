//! Shared handles for request handlers.

use crate::error::{Result as ServerErrorResult, ServerError};

use ph_auth::{JwtValidator, SecretHasher, TokenIssuer};
use ph_config::{Config, DeliveryMode};
use ph_db::{AddressRepository, OtpRepository, UserRepository};
use ph_identity::{
    AddressService, LogDelivery, OtpController, OtpDelivery, OtpSettings, UserService,
    WebhookDelivery,
};

use std::sync::Arc;
use std::time::Duration;

use sqlx::SqlitePool;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub otp: Arc<OtpController>,
    pub users: Arc<UserService>,
    pub addresses: Arc<AddressService>,
    pub validator: Arc<JwtValidator>,
}

impl AppState {
    /// Wire the identity services over `pool` from validated configuration.
    pub fn from_config(pool: SqlitePool, config: &Config) -> ServerErrorResult<Self> {
        let jwt_secret = config
            .auth
            .jwt_secret
            .as_deref()
            .ok_or_else(|| ServerError::MissingSetting {
                message: "auth.jwt_secret".to_string(),
            })?;
        let hash_secret =
            config
                .otp
                .hash_secret
                .as_deref()
                .ok_or_else(|| ServerError::MissingSetting {
                    message: "otp.hash_secret".to_string(),
                })?;

        let delivery: Arc<dyn OtpDelivery> = match config.delivery.mode {
            DeliveryMode::Log => {
                log::warn!("OTP delivery in log mode: codes are written to the log");
                Arc::new(LogDelivery)
            }
            DeliveryMode::Webhook => {
                let url = config.delivery.webhook_url.clone().ok_or_else(|| {
                    ServerError::MissingSetting {
                        message: "delivery.webhook_url".to_string(),
                    }
                })?;
                Arc::new(WebhookDelivery::new(
                    url,
                    config.delivery.api_key.clone(),
                    Duration::from_secs(config.delivery.timeout_secs),
                )?)
            }
        };

        let settings = OtpSettings {
            ttl: chrono::Duration::seconds(config.otp.ttl_secs),
            code_min: config.otp.code_min,
            code_max: config.otp.code_max,
        };

        Ok(Self::new(
            pool,
            jwt_secret.as_bytes(),
            SecretHasher::new(hash_secret.as_bytes())?,
            chrono::Duration::hours(config.auth.token_ttl_hours),
            delivery,
            settings,
        ))
    }

    pub fn new(
        pool: SqlitePool,
        jwt_secret: &[u8],
        hasher: SecretHasher,
        token_ttl: chrono::Duration,
        delivery: Arc<dyn OtpDelivery>,
        settings: OtpSettings,
    ) -> Self {
        let identities = Arc::new(UserRepository::new(pool.clone()));
        let otps = Arc::new(OtpRepository::new(pool.clone()));
        let issuer = Arc::new(TokenIssuer::with_hs256(jwt_secret, token_ttl));
        let validator = Arc::new(JwtValidator::with_hs256(jwt_secret));

        let otp = Arc::new(OtpController::new(
            otps,
            identities.clone(),
            delivery,
            hasher,
            issuer,
            settings,
        ));
        let addresses = Arc::new(AddressService::new(
            Arc::new(AddressRepository::new(pool.clone())),
            identities.clone(),
        ));
        let users = Arc::new(UserService::new(identities, validator.clone()));

        Self {
            pool,
            otp,
            users,
            addresses,
            validator,
        }
    }
}
