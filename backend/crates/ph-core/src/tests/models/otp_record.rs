use crate::{DEFAULT_OTP_TTL_SECS, OtpRecord};

use chrono::{Duration, Utc};

fn ttl() -> Duration {
    Duration::seconds(DEFAULT_OTP_TTL_SECS)
}

#[test]
fn test_otp_record_new() {
    let record = OtpRecord::new("9999999999".to_string(), "abc123".to_string());

    assert_eq!(record.phone, "9999999999");
    assert_eq!(record.hashed_code, "abc123");
    assert!(record.belongs_to("9999999999"));
    assert!(!record.belongs_to("1111111111"));
}

#[test]
fn test_otp_record_valid_at_expiry_boundary() {
    let record = OtpRecord::new("9999999999".to_string(), "h".to_string());

    assert!(!record.is_expired_at(record.created_at, ttl()));
    assert!(!record.is_expired_at(record.created_at + ttl(), ttl()));
}

#[test]
fn test_otp_record_expired_one_second_after_window() {
    let record = OtpRecord::new("9999999999".to_string(), "h".to_string());
    let later = record.created_at + ttl() + Duration::seconds(1);

    assert!(record.is_expired_at(later, ttl()));
}

#[test]
fn test_otp_record_ids_are_unique() {
    let a = OtpRecord::new("1".to_string(), "h".to_string());
    let b = OtpRecord::new("1".to_string(), "h".to_string());

    assert_ne!(a.id, b.id);
    assert!(a.created_at <= Utc::now());
}
