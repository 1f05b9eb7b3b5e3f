use crate::AddressDto;

use serde::Serialize;

/// Single address response
#[derive(Debug, Serialize)]
pub struct AddressResponse {
    pub address: AddressDto,
}
