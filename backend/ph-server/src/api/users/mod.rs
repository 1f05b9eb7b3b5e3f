pub mod user_dto;
pub mod user_response;
#[allow(clippy::module_inception)]
pub mod users;
