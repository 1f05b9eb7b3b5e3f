pub mod address_dto;
pub mod address_list_response;
pub mod address_response;
#[allow(clippy::module_inception)]
pub mod addresses;
