#![allow(dead_code)]

//! Test infrastructure for ph-server API tests

use ph_auth::SecretHasher;
use ph_identity::{DeliveryResult, OtpDelivery, OtpSettings};
use ph_server::{AppState, build_router};

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tokio::sync::mpsc;
use tower::ServiceExt;

pub const TEST_JWT_SECRET: &[u8] = b"api-test-jwt-secret-at-least-32-chars";

/// Delivery that hands codes to the test instead of a phone
pub struct ChannelDelivery(mpsc::UnboundedSender<(String, u32)>);

#[async_trait]
impl OtpDelivery for ChannelDelivery {
    async fn send(&self, phone: &str, code: u32) -> DeliveryResult<()> {
        let _ = self.0.send((phone.to_string(), code));
        Ok(())
    }
}

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(
            SqliteConnectOptions::new()
                .filename(":memory:")
                .foreign_keys(true),
        )
        .await
        .expect("Failed to create test database");

    ph_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

pub struct TestApp {
    pub state: AppState,
    pub codes: mpsc::UnboundedReceiver<(String, u32)>,
}

impl TestApp {
    pub async fn new() -> Self {
        let (sender, codes) = mpsc::unbounded_channel();
        let state = AppState::new(
            create_test_pool().await,
            TEST_JWT_SECRET,
            SecretHasher::new(b"api-test-hash-secret").expect("hasher"),
            chrono::Duration::hours(24),
            Arc::new(ChannelDelivery(sender)),
            OtpSettings::default(),
        );

        Self { state, codes }
    }

    pub fn router(&self) -> Router {
        build_router(self.state.clone())
    }

    /// Send a request and return status plus JSON body
    pub async fn send(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<serde_json::Value>,
    ) -> (StatusCode, serde_json::Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header("Authorization", format!("Bearer {}", token));
        }
        let request = match body {
            Some(json) => builder
                .header("Content-Type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
        };

        (status, json)
    }

    /// POST /api/v1/otp and wait for the delivered code
    pub async fn request_code(&mut self, phone: &str) -> (String, u32) {
        let (status, json) = self
            .send(
                "POST",
                "/api/v1/otp",
                None,
                Some(serde_json::json!({ "phone": phone })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "{}", json);

        let (_, code) = tokio::time::timeout(Duration::from_secs(5), self.codes.recv())
            .await
            .expect("delivery timed out")
            .expect("delivery channel closed");

        (json["verification_id"].as_str().unwrap().to_string(), code)
    }

    /// Full OTP login, returning the session token and user id
    pub async fn login(&mut self, phone: &str) -> (String, String) {
        let (verification_id, code) = self.request_code(phone).await;
        let (status, json) = self
            .send(
                "POST",
                "/api/v1/otp/verify",
                None,
                Some(serde_json::json!({
                    "phone": phone,
                    "verification_id": verification_id,
                    "code": code.to_string(),
                })),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "{}", json);

        (
            json["token"].as_str().unwrap().to_string(),
            json["user"]["id"].as_str().unwrap().to_string(),
        )
    }
}
