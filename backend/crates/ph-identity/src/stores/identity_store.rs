use crate::{IdentityError, Result as IdentityErrorResult};

use ph_core::{ProfileUpdate, User};
use ph_db::UserRepository;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[async_trait]
pub trait IdentityStore: Send + Sync {
    async fn find_by_phone(&self, phone: &str) -> IdentityErrorResult<Option<User>>;

    async fn find_by_id(&self, id: Uuid) -> IdentityErrorResult<Option<User>>;

    async fn find_by_email(&self, email: &str) -> IdentityErrorResult<Option<User>>;

    /// Insert a new identity. A phone already bound elsewhere is a `Conflict`.
    async fn create(&self, user: &User) -> IdentityErrorResult<()>;

    /// Bind `phone` to the identity and mark it verified without touching its
    /// profile. `NotFound` if the identity does not exist, `Conflict` if the
    /// phone is bound elsewhere.
    async fn bind_phone(
        &self,
        id: Uuid,
        phone: &str,
        at: DateTime<Utc>,
    ) -> IdentityErrorResult<()>;

    /// Patch profile attributes only. `NotFound` if the identity does not exist.
    async fn update_profile(
        &self,
        id: Uuid,
        update: &ProfileUpdate,
        at: DateTime<Utc>,
    ) -> IdentityErrorResult<()>;
}

#[async_trait]
impl IdentityStore for UserRepository {
    async fn find_by_phone(&self, phone: &str) -> IdentityErrorResult<Option<User>> {
        Ok(UserRepository::find_by_phone(self, phone).await?)
    }

    async fn find_by_id(&self, id: Uuid) -> IdentityErrorResult<Option<User>> {
        Ok(UserRepository::find_by_id(self, id).await?)
    }

    async fn find_by_email(&self, email: &str) -> IdentityErrorResult<Option<User>> {
        Ok(UserRepository::find_by_email(self, email).await?)
    }

    async fn create(&self, user: &User) -> IdentityErrorResult<()> {
        Ok(UserRepository::create(self, user).await?)
    }

    async fn bind_phone(
        &self,
        id: Uuid,
        phone: &str,
        at: DateTime<Utc>,
    ) -> IdentityErrorResult<()> {
        if UserRepository::bind_phone(self, id, phone, at).await? {
            Ok(())
        } else {
            Err(IdentityError::not_found("User", id))
        }
    }

    async fn update_profile(
        &self,
        id: Uuid,
        update: &ProfileUpdate,
        at: DateTime<Utc>,
    ) -> IdentityErrorResult<()> {
        if UserRepository::update_profile(self, id, update, at).await? {
            Ok(())
        } else {
            Err(IdentityError::not_found("User", id))
        }
    }
}
