use serde::Serialize;
use uuid::Uuid;

/// Handle the caller must present together with the delivered code
#[derive(Debug, Serialize)]
pub struct GenerateOtpResponse {
    pub verification_id: Uuid,
}
