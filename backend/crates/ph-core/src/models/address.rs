//! Postal addresses kept in a user's address book.

use crate::clock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An address owned by exactly one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub id: Uuid,
    pub user_id: Uuid,
    pub line: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub pincode: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Address attributes supplied on create and on patch.
///
/// On patch `None` leaves the stored value alone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressFields {
    pub line: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub pincode: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl AddressFields {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Returns the name of the first coordinate outside its valid range.
    pub fn invalid_coordinate(&self) -> Option<&'static str> {
        if let Some(lat) = self.latitude
            && !(-90.0..=90.0).contains(&lat)
        {
            return Some("latitude");
        }
        if let Some(lon) = self.longitude
            && !(-180.0..=180.0).contains(&lon)
        {
            return Some("longitude");
        }
        None
    }
}

impl Address {
    pub fn new(user_id: Uuid, fields: AddressFields) -> Self {
        let now = clock::now();
        let AddressFields {
            line,
            city,
            state,
            country,
            pincode,
            latitude,
            longitude,
        } = fields;
        Self {
            id: Uuid::new_v4(),
            user_id,
            line,
            city,
            state,
            country,
            pincode,
            latitude,
            longitude,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn belongs_to(&self, user_id: Uuid) -> bool {
        self.user_id == user_id
    }
}
