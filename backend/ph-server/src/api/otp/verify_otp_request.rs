use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct VerifyOtpRequest {
    pub phone: String,

    pub verification_id: String,

    /// Submitted code as typed by the user
    pub code: String,

    /// Existing identity the phone should be bound to
    #[serde(default)]
    pub user_id: Option<String>,
}
