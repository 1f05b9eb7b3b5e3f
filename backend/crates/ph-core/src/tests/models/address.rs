use crate::{Address, AddressFields};

use uuid::Uuid;

#[test]
fn test_address_new_copies_fields_and_owner() {
    let owner = Uuid::new_v4();
    let address = Address::new(
        owner,
        AddressFields {
            city: Some("Pune".to_string()),
            latitude: Some(18.52),
            ..AddressFields::default()
        },
    );

    assert!(address.belongs_to(owner));
    assert!(!address.belongs_to(Uuid::new_v4()));
    assert_eq!(address.city.as_deref(), Some("Pune"));
    assert_eq!(address.latitude, Some(18.52));
    assert_eq!(address.line, None);
    assert_eq!(address.created_at, address.updated_at);
}

#[test]
fn test_address_fields_coordinate_ranges() {
    let ok = AddressFields {
        latitude: Some(-90.0),
        longitude: Some(180.0),
        ..AddressFields::default()
    };
    let bad_lat = AddressFields {
        latitude: Some(90.5),
        ..AddressFields::default()
    };
    let bad_lon = AddressFields {
        longitude: Some(-181.0),
        ..AddressFields::default()
    };

    assert_eq!(ok.invalid_coordinate(), None);
    assert_eq!(bad_lat.invalid_coordinate(), Some("latitude"));
    assert_eq!(bad_lon.invalid_coordinate(), Some("longitude"));
}

#[test]
fn test_address_fields_missing_keys_are_unset() {
    let fields: AddressFields = serde_json::from_str(r#"{"pincode": "411001"}"#).unwrap();

    assert_eq!(fields.pincode.as_deref(), Some("411001"));
    assert_eq!(fields.city, None);
    assert!(!fields.is_empty());
    assert!(AddressFields::default().is_empty());
}
