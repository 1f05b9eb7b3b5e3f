use ph_core::{Address, AddressFields, OtpRecord, User};

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Creates a test OtpRecord for `phone`
pub fn create_test_otp(phone: &str) -> OtpRecord {
    OtpRecord::new(phone.to_string(), "a".repeat(64))
}

/// Creates a test OtpRecord with an explicit creation time
pub fn create_test_otp_at(phone: &str, created_at: DateTime<Utc>) -> OtpRecord {
    OtpRecord {
        created_at,
        ..create_test_otp(phone)
    }
}

/// Creates an unverified test User with a phone and an email
pub fn create_test_user(phone: &str) -> User {
    let mut user = User::new_with_phone(phone.to_string());
    user.email = Some(format!("{}@example.com", phone));
    user
}

/// Creates a test Address owned by `user_id`
pub fn create_test_address(user_id: Uuid, city: &str) -> Address {
    Address::new(
        user_id,
        AddressFields {
            line: Some("221B Baker Street".to_string()),
            city: Some(city.to_string()),
            pincode: Some("411001".to_string()),
            ..AddressFields::default()
        },
    )
}
