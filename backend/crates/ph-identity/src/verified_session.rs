use ph_core::User;

/// Outcome of a successful verification: the session token and the identity
/// it was issued for.
#[derive(Debug, Clone)]
pub struct VerifiedSession {
    pub token: String,
    pub user: User,
}
