use crate::{CoreError, UserRole};

use std::str::FromStr;

#[test]
fn test_user_role_round_trips_through_str() {
    for role in [UserRole::User, UserRole::Admin] {
        assert_eq!(UserRole::from_str(role.as_str()).unwrap(), role);
    }
}

#[test]
fn test_user_role_rejects_unknown_value() {
    let result = UserRole::from_str("superuser");

    assert!(matches!(
        result,
        Err(CoreError::InvalidUserRole { ref value, .. }) if value == "superuser"
    ));
}

#[test]
fn test_user_role_default_is_user() {
    assert_eq!(UserRole::default(), UserRole::User);
    assert_eq!(UserRole::Admin.to_string(), "admin");
}
