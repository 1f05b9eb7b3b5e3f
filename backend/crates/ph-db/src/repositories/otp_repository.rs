//! Storage for outstanding one-time passcodes.
//!
//! Rows are keyed by verification id and are never updated. `delete` reports
//! whether a row was actually removed so that two concurrent redemptions of
//! the same code cannot both succeed.

use crate::{DbError, Result as DbErrorResult};

use ph_core::{ErrorLocation, OtpRecord};

use std::panic::Location;

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct OtpRepository {
    pool: SqlitePool,
}

impl OtpRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, record: &OtpRecord) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO otp_records (id, phone, hashed_code, created_at_ms)
                VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(record.id.to_string())
        .bind(&record.phone)
        .bind(&record.hashed_code)
        .bind(record.created_at.timestamp_millis())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<OtpRecord>> {
        let row = sqlx::query(
            r#"
                SELECT id, phone, hashed_code, created_at_ms
                FROM otp_records
                WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(row_to_otp_record).transpose()
    }

    /// Remove a record. Returns false if it was already gone.
    pub async fn delete(&self, id: Uuid) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM otp_records WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Remove every record created strictly before `cutoff`.
    pub async fn delete_created_before(&self, cutoff: DateTime<Utc>) -> DbErrorResult<u64> {
        let result = sqlx::query("DELETE FROM otp_records WHERE created_at_ms < ?")
            .bind(cutoff.timestamp_millis())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

#[track_caller]
fn row_to_otp_record(row: &SqliteRow) -> DbErrorResult<OtpRecord> {
    let id: String = row.try_get("id")?;
    let created_at_ms: i64 = row.try_get("created_at_ms")?;

    Ok(OtpRecord {
        id: Uuid::parse_str(&id).map_err(|e| DbError::Initialization {
            message: format!("Invalid UUID in otp_records.id: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?,
        phone: row.try_get("phone")?,
        hashed_code: row.try_get("hashed_code")?,
        created_at: DateTime::from_timestamp_millis(created_at_ms).ok_or_else(|| {
            DbError::Initialization {
                message: "Invalid timestamp in otp_records.created_at_ms".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?,
    })
}
