use crate::AddressDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct AddressListResponse {
    pub addresses: Vec<AddressDto>,
}
