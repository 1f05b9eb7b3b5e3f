use crate::Result as IdentityErrorResult;

use ph_core::OtpRecord;
use ph_db::OtpRepository;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[async_trait]
pub trait OtpStore: Send + Sync {
    async fn create(&self, record: &OtpRecord) -> IdentityErrorResult<()>;

    async fn find_by_id(&self, id: Uuid) -> IdentityErrorResult<Option<OtpRecord>>;

    /// Remove a record. Returns false if it was already gone.
    async fn delete(&self, id: Uuid) -> IdentityErrorResult<bool>;

    /// Remove every record created before `cutoff`, returning how many went.
    async fn delete_expired(&self, cutoff: DateTime<Utc>) -> IdentityErrorResult<u64>;
}

#[async_trait]
impl OtpStore for OtpRepository {
    async fn create(&self, record: &OtpRecord) -> IdentityErrorResult<()> {
        Ok(OtpRepository::create(self, record).await?)
    }

    async fn find_by_id(&self, id: Uuid) -> IdentityErrorResult<Option<OtpRecord>> {
        Ok(OtpRepository::find_by_id(self, id).await?)
    }

    async fn delete(&self, id: Uuid) -> IdentityErrorResult<bool> {
        Ok(OtpRepository::delete(self, id).await?)
    }

    async fn delete_expired(&self, cutoff: DateTime<Utc>) -> IdentityErrorResult<u64> {
        Ok(OtpRepository::delete_created_before(self, cutoff).await?)
    }
}
