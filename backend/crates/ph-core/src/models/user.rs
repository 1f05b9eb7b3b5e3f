//! User identity - the durable account a verified phone number resolves to.

use crate::{ProfileUpdate, UserRole, clock};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user identity.
///
/// `phone` is unique across identities whenever it is set. `verified` only
/// ever moves from false to true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub pincode: Option<String>,
    pub verified: bool,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create an unverified identity with no profile attributes
    pub fn new() -> Self {
        let now = clock::now();
        Self {
            id: Uuid::new_v4(),
            phone: None,
            email: None,
            name: None,
            address: None,
            city: None,
            state: None,
            country: None,
            pincode: None,
            verified: false,
            role: UserRole::User,
            created_at: now,
            updated_at: now,
        }
    }

    /// Create an unverified identity already carrying a phone number
    pub fn new_with_phone(phone: String) -> Self {
        Self {
            phone: Some(phone),
            ..Self::new()
        }
    }

    /// Bind `phone` to this identity and flag it verified.
    pub fn mark_verified(&mut self, phone: &str) {
        self.phone = Some(phone.to_string());
        self.verified = true;
        self.updated_at = clock::now();
    }

    /// Apply a profile patch. Fields left as `None` in the patch are untouched.
    pub fn apply(&mut self, update: ProfileUpdate) {
        let ProfileUpdate {
            email,
            name,
            address,
            city,
            state,
            country,
            pincode,
        } = update;

        for (target, value) in [
            (&mut self.email, email),
            (&mut self.name, name),
            (&mut self.address, address),
            (&mut self.city, city),
            (&mut self.state, state),
            (&mut self.country, country),
            (&mut self.pincode, pincode),
        ] {
            if value.is_some() {
                *target = value;
            }
        }

        self.updated_at = clock::now();
    }

    pub fn has_phone(&self, phone: &str) -> bool {
        self.phone.as_deref() == Some(phone)
    }
}

impl Default for User {
    fn default() -> Self {
        Self::new()
    }
}
