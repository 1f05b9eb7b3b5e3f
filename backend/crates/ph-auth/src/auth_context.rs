use crate::{AuthError, Claims, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use uuid::Uuid;

/// The authenticated caller, available to handlers after token verification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthContext {
    pub user_id: Uuid,
}

impl AuthContext {
    #[track_caller]
    pub fn from_claims(claims: Claims) -> AuthErrorResult<Self> {
        let user_id = Uuid::parse_str(&claims.sub).map_err(|e| AuthError::InvalidClaim {
            claim: "sub".to_string(),
            message: format!("sub is not a valid user id: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(Self { user_id })
    }
}
