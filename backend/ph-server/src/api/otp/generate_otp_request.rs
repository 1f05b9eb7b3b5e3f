use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct GenerateOtpRequest {
    pub phone: String,
}
