use crate::{ProfileUpdate, User, UserRole};

#[test]
fn test_user_new() {
    let user = User::new();

    assert_eq!(user.phone, None);
    assert!(!user.verified);
    assert_eq!(user.role, UserRole::User);
    assert_eq!(user.created_at, user.updated_at);
}

#[test]
fn test_user_new_with_phone_is_unverified() {
    let user = User::new_with_phone("9999999999".to_string());

    assert!(user.has_phone("9999999999"));
    assert!(!user.verified);
}

#[test]
fn test_mark_verified_binds_phone() {
    let mut user = User::new();

    user.mark_verified("9999999999");

    assert!(user.verified);
    assert_eq!(user.phone.as_deref(), Some("9999999999"));
}

#[test]
fn test_mark_verified_rebinds_phone_and_stays_verified() {
    let mut user = User::new_with_phone("1".to_string());
    user.mark_verified("1");
    user.mark_verified("2");

    assert!(user.verified);
    assert!(user.has_phone("2"));
}

#[test]
fn test_apply_profile_update_only_touches_set_fields() {
    let mut user = User::new();
    user.email = Some("old@example.com".to_string());
    user.name = Some("Old Name".to_string());

    user.apply(ProfileUpdate {
        name: Some("New Name".to_string()),
        city: Some("Pune".to_string()),
        ..ProfileUpdate::default()
    });

    assert_eq!(user.email.as_deref(), Some("old@example.com"));
    assert_eq!(user.name.as_deref(), Some("New Name"));
    assert_eq!(user.city.as_deref(), Some("Pune"));
    assert_eq!(user.state, None);
}

#[test]
fn test_apply_profile_update_keeps_empty_string_distinct_from_unset() {
    let mut user = User::new();
    user.name = Some("Someone".to_string());

    user.apply(ProfileUpdate {
        name: Some(String::new()),
        ..ProfileUpdate::default()
    });

    assert_eq!(user.name, Some(String::new()));
    assert_eq!(user.email, None);
}

#[test]
fn test_profile_update_deserializes_missing_fields_as_unset() {
    let update: ProfileUpdate = serde_json::from_str(r#"{"email": ""}"#).unwrap();

    assert_eq!(update.email, Some(String::new()));
    assert_eq!(update.name, None);
    assert!(!update.is_empty());
    assert!(ProfileUpdate::default().is_empty());
}

#[test]
fn test_timestamps_are_whole_milliseconds() {
    let mut user = User::new();
    user.mark_verified("9999999999");

    assert_eq!(user.created_at.timestamp_subsec_nanos() % 1_000_000, 0);
    assert_eq!(user.updated_at.timestamp_subsec_nanos() % 1_000_000, 0);
}
