use ph_core::Address;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct AddressDto {
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

impl From<Address> for AddressDto {
    fn from(address: Address) -> Self {
        Self {
            id: address.id,
            user_id: address.user_id,
            line: address.line,
            city: address.city,
            state: address.state,
            country: address.country,
            pincode: address.pincode,
            latitude: address.latitude,
            longitude: address.longitude,
            created_at: address.created_at,
            updated_at: address.updated_at,
        }
    }
}
