use crate::UserDto;

use serde::Serialize;

/// Issued session after a successful verification
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub token: String,
    pub user: UserDto,
}
