use crate::{IdentityError, Result as IdentityErrorResult};

const MAX_PHONE_LENGTH: usize = 20;

/// Trim and check a phone number: an optional leading `+` followed by 1-20
/// ASCII digits.
#[track_caller]
pub fn validate_phone(phone: &str) -> IdentityErrorResult<&str> {
    let phone = phone.trim();
    let digits = phone.strip_prefix('+').unwrap_or(phone);

    if digits.is_empty() {
        return Err(IdentityError::validation("phone", "phone number is required"));
    }

    if digits.len() > MAX_PHONE_LENGTH {
        return Err(IdentityError::validation(
            "phone",
            format!("phone number exceeds {} digits", MAX_PHONE_LENGTH),
        ));
    }

    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(IdentityError::validation(
            "phone",
            "phone number may only contain digits and a leading '+'",
        ));
    }

    Ok(phone)
}
