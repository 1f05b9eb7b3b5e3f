//! Address book of an identity.
//!
//! Every operation is scoped to the owning user: an address that exists but
//! belongs to someone else is reported as `NotFound`.

use crate::{AddressStore, IdentityError, IdentityStore, Result as IdentityErrorResult};

use ph_core::{Address, AddressFields, clock};

use std::sync::Arc;

use uuid::Uuid;

pub struct AddressService {
    addresses: Arc<dyn AddressStore>,
    identities: Arc<dyn IdentityStore>,
}

impl AddressService {
    pub fn new(addresses: Arc<dyn AddressStore>, identities: Arc<dyn IdentityStore>) -> Self {
        Self {
            addresses,
            identities,
        }
    }

    pub async fn create(
        &self,
        user_id: Uuid,
        fields: AddressFields,
    ) -> IdentityErrorResult<Address> {
        validate_fields(&fields)?;
        if self.identities.find_by_id(user_id).await?.is_none() {
            return Err(IdentityError::not_found("User", user_id));
        }

        let address = Address::new(user_id, fields);
        self.addresses.create(&address).await?;

        log::debug!("Added address {} for identity {}", address.id, user_id);
        Ok(address)
    }

    pub async fn get(&self, user_id: Uuid, address_id: Uuid) -> IdentityErrorResult<Address> {
        self.addresses
            .find_by_id(address_id)
            .await?
            .filter(|address| address.belongs_to(user_id))
            .ok_or_else(|| IdentityError::not_found("Address", address_id))
    }

    pub async fn list(&self, user_id: Uuid) -> IdentityErrorResult<Vec<Address>> {
        self.addresses.find_by_user(user_id).await
    }

    /// Patch the set fields of an owned address and return the stored result.
    pub async fn update(
        &self,
        user_id: Uuid,
        address_id: Uuid,
        fields: AddressFields,
    ) -> IdentityErrorResult<Address> {
        validate_fields(&fields)?;
        if fields.is_empty() {
            return self.get(user_id, address_id).await;
        }

        if !self
            .addresses
            .update(address_id, user_id, &fields, clock::now())
            .await?
        {
            return Err(IdentityError::not_found("Address", address_id));
        }

        log::debug!("Updated address {} of identity {}", address_id, user_id);
        self.get(user_id, address_id).await
    }
}

fn validate_fields(fields: &AddressFields) -> IdentityErrorResult<()> {
    match fields.invalid_coordinate() {
        Some(field) => Err(IdentityError::validation(field, format!("{} out of range", field))),
        None => Ok(()),
    }
}
