//! Storage for address book entries.
//!
//! Rows reference `users.id`. Ownership checks are made by callers against
//! the returned `user_id`.

use crate::repositories::user_repository::millis_to_datetime;
use crate::{DbError, Result as DbErrorResult};

use ph_core::{Address, AddressFields, ErrorLocation};

use std::panic::Location;

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

const ADDRESS_COLUMNS: &str = "id, user_id, line, city, state, country, pincode, \
                               latitude, longitude, created_at_ms, updated_at_ms";

pub struct AddressRepository {
    pool: SqlitePool,
}

impl AddressRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, address: &Address) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO addresses (
                    id, user_id, line, city, state, country, pincode,
                    latitude, longitude, created_at_ms, updated_at_ms
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(address.id.to_string())
        .bind(address.user_id.to_string())
        .bind(&address.line)
        .bind(&address.city)
        .bind(&address.state)
        .bind(&address.country)
        .bind(&address.pincode)
        .bind(address.latitude)
        .bind(address.longitude)
        .bind(address.created_at.timestamp_millis())
        .bind(address.updated_at.timestamp_millis())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Address>> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM addresses WHERE id = ?",
            ADDRESS_COLUMNS
        ))
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(row_to_address).transpose()
    }

    /// Oldest first.
    pub async fn find_by_user(&self, user_id: Uuid) -> DbErrorResult<Vec<Address>> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM addresses WHERE user_id = ? ORDER BY created_at_ms, id",
            ADDRESS_COLUMNS
        ))
        .bind(user_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_address).collect()
    }

    /// Patch the columns set in `fields` on an address owned by `user_id`.
    /// Returns false if no such row exists.
    pub async fn update(
        &self,
        id: Uuid,
        user_id: Uuid,
        fields: &AddressFields,
        updated_at: DateTime<Utc>,
    ) -> DbErrorResult<bool> {
        let result = sqlx::query(
            r#"
                UPDATE addresses
                SET line = COALESCE(?, line),
                    city = COALESCE(?, city),
                    state = COALESCE(?, state),
                    country = COALESCE(?, country),
                    pincode = COALESCE(?, pincode),
                    latitude = COALESCE(?, latitude),
                    longitude = COALESCE(?, longitude),
                    updated_at_ms = ?
                WHERE id = ? AND user_id = ?
            "#,
        )
        .bind(&fields.line)
        .bind(&fields.city)
        .bind(&fields.state)
        .bind(&fields.country)
        .bind(&fields.pincode)
        .bind(fields.latitude)
        .bind(fields.longitude)
        .bind(updated_at.timestamp_millis())
        .bind(id.to_string())
        .bind(user_id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[track_caller]
fn parse_uuid(value: &str, column: &str) -> DbErrorResult<Uuid> {
    Uuid::parse_str(value).map_err(|e| DbError::Initialization {
        message: format!("Invalid UUID in {}: {}", column, e),
        location: ErrorLocation::from(Location::caller()),
    })
}

fn row_to_address(row: &SqliteRow) -> DbErrorResult<Address> {
    let id: String = row.try_get("id")?;
    let user_id: String = row.try_get("user_id")?;

    Ok(Address {
        id: parse_uuid(&id, "addresses.id")?,
        user_id: parse_uuid(&user_id, "addresses.user_id")?,
        line: row.try_get("line")?,
        city: row.try_get("city")?,
        state: row.try_get("state")?,
        country: row.try_get("country")?,
        pincode: row.try_get("pincode")?,
        latitude: row.try_get("latitude")?,
        longitude: row.try_get("longitude")?,
        created_at: millis_to_datetime(row.try_get("created_at_ms")?, "addresses.created_at_ms")?,
        updated_at: millis_to_datetime(row.try_get("updated_at_ms")?, "addresses.updated_at_ms")?,
    })
}
