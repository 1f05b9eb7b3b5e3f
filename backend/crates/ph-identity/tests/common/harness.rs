use super::{ChannelDelivery, create_test_pool};

use ph_auth::{JwtValidator, SecretHasher, TokenIssuer};
use ph_db::{OtpRepository, UserRepository};
use ph_identity::{IdentityStore, OtpController, OtpDelivery, OtpSettings, UserService};

use std::sync::Arc;
use std::time::Duration;

use sqlx::SqlitePool;
use tokio::sync::mpsc;
use uuid::Uuid;

pub const TEST_JWT_SECRET: &[u8] = b"test-jwt-secret-that-is-long-enough-32";
pub const TEST_HASH_SECRET: &[u8] = b"test-hash-secret";

pub struct Harness {
    pub pool: SqlitePool,
    pub controller: Arc<OtpController>,
    pub users: Arc<UserRepository>,
    pub otps: Arc<OtpRepository>,
    pub validator: Arc<JwtValidator>,
    pub codes: mpsc::UnboundedReceiver<(String, u32)>,
}

impl Harness {
    pub async fn new() -> Self {
        let pool = create_test_pool().await;
        let (delivery, codes) = ChannelDelivery::new();
        let users = Arc::new(UserRepository::new(pool.clone()));
        Self::build(pool, users.clone(), users, Arc::new(delivery), codes)
    }

    /// Harness whose controller reconciles through `identities` instead of the
    /// plain repository.
    pub async fn with_identity_store(
        build: impl FnOnce(UserRepository) -> Arc<dyn IdentityStore>,
    ) -> Self {
        let pool = create_test_pool().await;
        let (delivery, codes) = ChannelDelivery::new();
        let identities = build(UserRepository::new(pool.clone()));
        let users = Arc::new(UserRepository::new(pool.clone()));
        Self::build(pool, identities, users, Arc::new(delivery), codes)
    }

    pub async fn with_delivery(delivery: Arc<dyn OtpDelivery>) -> Self {
        let pool = create_test_pool().await;
        let (_, codes) = mpsc::unbounded_channel();
        let users = Arc::new(UserRepository::new(pool.clone()));
        Self::build(pool, users.clone(), users, delivery, codes)
    }

    fn build(
        pool: SqlitePool,
        identities: Arc<dyn IdentityStore>,
        users: Arc<UserRepository>,
        delivery: Arc<dyn OtpDelivery>,
        codes: mpsc::UnboundedReceiver<(String, u32)>,
    ) -> Self {
        let otps = Arc::new(OtpRepository::new(pool.clone()));
        let issuer = Arc::new(TokenIssuer::with_hs256(
            TEST_JWT_SECRET,
            chrono::Duration::hours(24),
        ));
        let controller = Arc::new(OtpController::new(
            otps.clone(),
            identities,
            delivery,
            SecretHasher::new(TEST_HASH_SECRET).expect("hasher"),
            issuer,
            OtpSettings::default(),
        ));

        Self {
            pool,
            controller,
            users,
            otps,
            validator: Arc::new(JwtValidator::with_hs256(TEST_JWT_SECRET)),
            codes,
        }
    }

    pub fn user_service(&self) -> UserService {
        UserService::new(self.users.clone(), self.validator.clone())
    }

    /// Generate a code for `phone` and wait for it to be delivered
    pub async fn issue(&mut self, phone: &str) -> (Uuid, u32) {
        let id = self
            .controller
            .generate_otp(phone)
            .await
            .expect("generate_otp failed");

        let (to, code) = tokio::time::timeout(Duration::from_secs(5), self.codes.recv())
            .await
            .expect("delivery timed out")
            .expect("delivery channel closed");
        assert_eq!(to, phone.trim());

        (id, code)
    }

    /// Code guaranteed to differ from `code` within the default range
    pub fn wrong_code(code: u32) -> String {
        if code == 9999 { "1000".to_string() } else { (code + 1).to_string() }
    }

    pub async fn user_count(&self) -> i64 {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .expect("count users")
    }
}
