//! Deciding which identity a freshly verified phone number belongs to.
//!
//! Runs only after the submitted code has been accepted. The identity that
//! already owns the phone always wins; a hint naming some other identity is
//! refused rather than silently moved.

use crate::{IdentityError, IdentityStore, Result as IdentityErrorResult};

use ph_core::User;

use uuid::Uuid;

/// Resolve `phone` to an identity, binding and verifying it.
///
/// - Phone already bound: that identity, unless `hint` names a different one
///   (`Conflict`, nothing mutated).
/// - Unbound phone with `hint`: the hinted identity (`NotFound` if absent)
///   takes the phone.
/// - Unbound phone without `hint`: a new identity. Losing the insert race to a
///   concurrent verification falls back to the winner's identity.
pub async fn reconcile_identity(
    store: &dyn IdentityStore,
    phone: &str,
    hint: Option<Uuid>,
) -> IdentityErrorResult<User> {
    let mut user = match store.find_by_phone(phone).await? {
        Some(owner) => {
            if let Some(hint_id) = hint
                && hint_id != owner.id
            {
                log::warn!(
                    "Rejected binding {} to {}: already owned by {}",
                    phone,
                    hint_id,
                    owner.id
                );
                return Err(IdentityError::conflict(
                    "phone number already associated with a different account",
                ));
            }
            log::debug!("Phone {} resolved to existing identity {}", phone, owner.id);
            owner
        }
        None => match hint {
            Some(hint_id) => {
                let user = store
                    .find_by_id(hint_id)
                    .await?
                    .ok_or_else(|| IdentityError::not_found("User", hint_id))?;
                log::debug!("Binding phone {} to hinted identity {}", phone, user.id);
                user
            }
            None => create_for_phone(store, phone).await?,
        },
    };

    user.mark_verified(phone);
    store.bind_phone(user.id, phone, user.updated_at).await?;

    Ok(user)
}

async fn create_for_phone(store: &dyn IdentityStore, phone: &str) -> IdentityErrorResult<User> {
    let user = User::new_with_phone(phone.to_string());

    match store.create(&user).await {
        Ok(()) => {
            log::debug!("Created identity {} for phone {}", user.id, phone);
            Ok(user)
        }
        Err(IdentityError::Conflict { .. }) => {
            log::debug!("Lost identity creation race for {}, reloading", phone);
            store
                .find_by_phone(phone)
                .await?
                .ok_or_else(|| IdentityError::not_found("User", phone))
        }
        Err(e) => Err(e),
    }
}
