use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    ph_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Number of outstanding verification records for `phone`
pub async fn count_otps_for_phone(pool: &SqlitePool, phone: &str) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM otp_records WHERE phone = ?")
        .bind(phone)
        .fetch_one(pool)
        .await
        .expect("Failed to count otp records")
}
