pub mod auth_context;
pub mod claims;
pub mod error;
pub mod jwt_validator;
pub mod secret_hasher;
pub mod token_issuer;

pub use auth_context::AuthContext;
pub use claims::Claims;
pub use error::{AuthError, Result};
pub use jwt_validator::JwtValidator;
pub use secret_hasher::{SecretHasher, hash_code};
pub use token_issuer::{DEFAULT_TOKEN_TTL_HOURS, TokenIssuer};
