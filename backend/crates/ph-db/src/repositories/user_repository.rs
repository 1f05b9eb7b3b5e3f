//! Storage for user identities.
//!
//! Phone uniqueness is enforced by the `users.phone` UNIQUE constraint and
//! surfaces as [`DbError::UniqueViolation`]. Binding a phone and patching the
//! profile are separate single-statement writes, so neither can overwrite the
//! columns owned by the other. `verified` is only ever raised, by `bind_phone`.

use crate::{DbError, Result as DbErrorResult};

use ph_core::{ErrorLocation, ProfileUpdate, User, UserRole};

use std::panic::Location;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

const USER_COLUMNS: &str = "id, phone, email, name, address, city, state, country, pincode, \
                            verified, role, created_at_ms, updated_at_ms";

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, user: &User) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO users (
                    id, phone, email, name, address, city, state, country, pincode,
                    verified, role, created_at_ms, updated_at_ms
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(user.id.to_string())
        .bind(&user.phone)
        .bind(&user.email)
        .bind(&user.name)
        .bind(&user.address)
        .bind(&user.city)
        .bind(&user.state)
        .bind(&user.country)
        .bind(&user.pincode)
        .bind(user.verified)
        .bind(user.role.as_str())
        .bind(user.created_at.timestamp_millis())
        .bind(user.updated_at.timestamp_millis())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<User>> {
        let row = sqlx::query(&format!("SELECT {} FROM users WHERE id = ?", USER_COLUMNS))
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(row_to_user).transpose()
    }

    pub async fn find_by_phone(&self, phone: &str) -> DbErrorResult<Option<User>> {
        let row = sqlx::query(&format!("SELECT {} FROM users WHERE phone = ?", USER_COLUMNS))
            .bind(phone)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(row_to_user).transpose()
    }

    /// Email is not unique; the earliest registered identity wins.
    pub async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<User>> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM users WHERE email = ? ORDER BY created_at_ms, id LIMIT 1",
            USER_COLUMNS
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(row_to_user).transpose()
    }

    /// Bind `phone` to the identity and flag it verified. Profile columns are
    /// left alone. Returns false if no row has that id.
    pub async fn bind_phone(
        &self,
        id: Uuid,
        phone: &str,
        updated_at: DateTime<Utc>,
    ) -> DbErrorResult<bool> {
        let result = sqlx::query(
            r#"
                UPDATE users
                SET phone = ?, verified = 1, updated_at_ms = ?
                WHERE id = ?
            "#,
        )
        .bind(phone)
        .bind(updated_at.timestamp_millis())
        .bind(id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Patch the profile columns set in `update`. `phone`, `verified` and
    /// `role` are never written. Returns false if no row has that id.
    pub async fn update_profile(
        &self,
        id: Uuid,
        update: &ProfileUpdate,
        updated_at: DateTime<Utc>,
    ) -> DbErrorResult<bool> {
        let result = sqlx::query(
            r#"
                UPDATE users
                SET email = COALESCE(?, email),
                    name = COALESCE(?, name),
                    address = COALESCE(?, address),
                    city = COALESCE(?, city),
                    state = COALESCE(?, state),
                    country = COALESCE(?, country),
                    pincode = COALESCE(?, pincode),
                    updated_at_ms = ?
                WHERE id = ?
            "#,
        )
        .bind(&update.email)
        .bind(&update.name)
        .bind(&update.address)
        .bind(&update.city)
        .bind(&update.state)
        .bind(&update.country)
        .bind(&update.pincode)
        .bind(updated_at.timestamp_millis())
        .bind(id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[track_caller]
fn row_to_user(row: &SqliteRow) -> DbErrorResult<User> {
    let id: String = row.try_get("id")?;
    let role: String = row.try_get("role")?;
    let created_at_ms: i64 = row.try_get("created_at_ms")?;
    let updated_at_ms: i64 = row.try_get("updated_at_ms")?;

    Ok(User {
        id: Uuid::parse_str(&id).map_err(|e| DbError::Initialization {
            message: format!("Invalid UUID in users.id: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?,
        phone: row.try_get("phone")?,
        email: row.try_get("email")?,
        name: row.try_get("name")?,
        address: row.try_get("address")?,
        city: row.try_get("city")?,
        state: row.try_get("state")?,
        country: row.try_get("country")?,
        pincode: row.try_get("pincode")?,
        verified: row.try_get("verified")?,
        role: UserRole::from_str(&role).map_err(|e| DbError::Initialization {
            message: format!("Invalid UserRole in users.role: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?,
        created_at: millis_to_datetime(created_at_ms, "users.created_at_ms")?,
        updated_at: millis_to_datetime(updated_at_ms, "users.updated_at_ms")?,
    })
}

#[track_caller]
pub(crate) fn millis_to_datetime(ms: i64, column: &str) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp_millis(ms).ok_or_else(|| DbError::Initialization {
        message: format!("Invalid timestamp in {}", column),
        location: ErrorLocation::from(Location::caller()),
    })
}
