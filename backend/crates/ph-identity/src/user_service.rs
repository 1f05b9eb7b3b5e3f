use crate::{IdentityError, IdentityStore, Result as IdentityErrorResult, validate_phone};

use ph_auth::JwtValidator;
use ph_core::{NewUser, ProfileUpdate, User, clock};

use std::sync::Arc;

use uuid::Uuid;

/// Account management for identities outside of the OTP flow
pub struct UserService {
    identities: Arc<dyn IdentityStore>,
    validator: Arc<JwtValidator>,
}

impl UserService {
    pub fn new(identities: Arc<dyn IdentityStore>, validator: Arc<JwtValidator>) -> Self {
        Self {
            identities,
            validator,
        }
    }

    /// Sign up an unverified identity. A phone already in use is a `Conflict`.
    pub async fn register(&self, new_user: NewUser) -> IdentityErrorResult<User> {
        let NewUser { phone, profile } = new_user;

        let mut user = match phone {
            Some(phone) => {
                let phone = validate_phone(&phone)?.to_string();
                if self.identities.find_by_phone(&phone).await?.is_some() {
                    return Err(IdentityError::conflict(
                        "phone number already associated with an account",
                    ));
                }
                User::new_with_phone(phone)
            }
            None => User::new(),
        };
        user.apply(profile);

        self.identities.create(&user).await?;

        log::info!("Registered identity {}", user.id);
        Ok(user)
    }

    pub async fn get(&self, user_id: Uuid) -> IdentityErrorResult<User> {
        self.identities
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| IdentityError::not_found("User", user_id))
    }

    /// Lookup by email. Email is not unique; the earliest registration wins.
    pub async fn find_by_email(&self, email: &str) -> IdentityErrorResult<User> {
        self.identities
            .find_by_email(email)
            .await?
            .ok_or_else(|| IdentityError::not_found("User", email))
    }

    /// Patch profile attributes. Phone binding and verification are never
    /// written here, so a concurrent verification is not undone.
    pub async fn update_profile(
        &self,
        user_id: Uuid,
        update: ProfileUpdate,
    ) -> IdentityErrorResult<User> {
        if !update.is_empty() {
            self.identities
                .update_profile(user_id, &update, clock::now())
                .await?;
            log::debug!("Updated profile of identity {}", user_id);
        }

        self.get(user_id).await
    }

    /// Load the identity a session token was issued for.
    pub async fn current_user(&self, token: &str) -> IdentityErrorResult<User> {
        let context = self.validator.authenticate(token)?;
        self.get(context.user_id).await
    }
}
