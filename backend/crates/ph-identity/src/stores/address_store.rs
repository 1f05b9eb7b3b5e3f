use crate::Result as IdentityErrorResult;

use ph_core::{Address, AddressFields};
use ph_db::AddressRepository;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[async_trait]
pub trait AddressStore: Send + Sync {
    async fn create(&self, address: &Address) -> IdentityErrorResult<()>;

    async fn find_by_id(&self, id: Uuid) -> IdentityErrorResult<Option<Address>>;

    /// Every address owned by `user_id`, oldest first.
    async fn find_by_user(&self, user_id: Uuid) -> IdentityErrorResult<Vec<Address>>;

    /// Patch an address owned by `user_id`. Returns false if there is none.
    async fn update(
        &self,
        id: Uuid,
        user_id: Uuid,
        fields: &AddressFields,
        at: DateTime<Utc>,
    ) -> IdentityErrorResult<bool>;
}

#[async_trait]
impl AddressStore for AddressRepository {
    async fn create(&self, address: &Address) -> IdentityErrorResult<()> {
        Ok(AddressRepository::create(self, address).await?)
    }

    async fn find_by_id(&self, id: Uuid) -> IdentityErrorResult<Option<Address>> {
        Ok(AddressRepository::find_by_id(self, id).await?)
    }

    async fn find_by_user(&self, user_id: Uuid) -> IdentityErrorResult<Vec<Address>> {
        Ok(AddressRepository::find_by_user(self, user_id).await?)
    }

    async fn update(
        &self,
        id: Uuid,
        user_id: Uuid,
        fields: &AddressFields,
        at: DateTime<Utc>,
    ) -> IdentityErrorResult<bool> {
        Ok(AddressRepository::update(self, id, user_id, fields, at).await?)
    }
}
