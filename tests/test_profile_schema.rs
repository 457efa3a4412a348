use profile_form_core::models::MAX_DELIVERY_INSTRUCTIONS;
use profile_form_core::schema::{validate_profile, ADDRESSES_REQUIRED};
use serde_json::{json, Value};

fn valid_profile() -> Value {
    json!({
        "contact": {
            "firstName": "John",
            "lastName": "Doe",
            "email": "john.doe@example.com",
            "phone": "+1 1234567890"
        },
        "addresses": [
            {
                "id": "addr-1",
                "addressType": "Home",
                "country": "USA",
                "streetAddress": "123 Main St",
                "city": "Anytown",
                "state": "CA",
                "zipCode": "12345"
            },
            {
                "id": "addr-2",
                "addressType": "Work",
                "country": "UK",
                "streetAddress": "10 Downing St",
                "city": "London",
                "postcode": "SW1A 2AA"
            }
        ],
        "deliveryInstructions": "Leave at the back door",
        "newsletter": true
    })
}

#[test]
fn test_valid_profile() {
    let profile = validate_profile(&valid_profile()).unwrap();
    assert_eq!(profile.contact.full_name(), "John Doe");
    assert_eq!(profile.addresses.len(), 2);
    assert_eq!(profile.addresses[1].id.as_ref().unwrap().as_str(), "addr-2");
    assert!(profile.newsletter);
}

#[test]
fn test_empty_address_list_is_aggregate_error() {
    let mut candidate = valid_profile();
    candidate["addresses"] = json!([]);

    let errors = validate_profile(&candidate).unwrap_err();
    assert_eq!(errors.aggregate("addresses"), Some(ADDRESSES_REQUIRED));
    assert_eq!(errors.aggregate_issues().count(), 1);
    assert_eq!(errors.field_issues().count(), 0);
}

#[test]
fn test_nested_errors_use_dotted_paths() {
    let mut candidate = valid_profile();
    candidate["contact"]["email"] = json!("john@");
    candidate["addresses"][1]["postcode"] = json!("nope");
    candidate["addresses"][0]["city"] = json!("A");

    let errors = validate_profile(&candidate).unwrap_err();
    assert_eq!(errors.len(), 3);
    assert_eq!(errors.get("contact.email"), Some("Please enter a valid email address"));
    assert_eq!(errors.get("addresses.0.city"), Some("City is required"));
    assert_eq!(errors.get("addresses.1.postcode"), Some("Invalid postcode"));
    assert_eq!(errors.under("addresses").count(), 2);
}

#[test]
fn test_delivery_instructions_limit() {
    let mut candidate = valid_profile();
    candidate["deliveryInstructions"] = json!("x".repeat(MAX_DELIVERY_INSTRUCTIONS));
    assert!(validate_profile(&candidate).is_ok());

    candidate["deliveryInstructions"] = json!("x".repeat(MAX_DELIVERY_INSTRUCTIONS + 1));
    let errors = validate_profile(&candidate).unwrap_err();
    assert_eq!(
        errors.get("deliveryInstructions"),
        Some("Instructions cannot exceed 200 characters")
    );
}

#[test]
fn test_delivery_instructions_optional() {
    let mut candidate = valid_profile();
    candidate.as_object_mut().unwrap().remove("deliveryInstructions");
    let profile = validate_profile(&candidate).unwrap();
    assert_eq!(profile.delivery_instructions, None);
}

#[test]
fn test_newsletter_must_be_boolean() {
    let mut candidate = valid_profile();
    candidate["newsletter"] = json!("yes");
    let errors = validate_profile(&candidate).unwrap_err();
    assert_eq!(errors.get("newsletter"), Some("Expected boolean, received string"));
}

#[test]
fn test_non_object_is_root_error() {
    let errors = validate_profile(&json!([1, 2])).unwrap_err();
    assert_eq!(errors.get(""), Some("Expected object, received array"));
}

#[test]
fn test_field_errors_serialize_as_path_map() {
    let mut candidate = valid_profile();
    candidate["contact"]["phone"] = json!("555");
    candidate["addresses"] = json!([]);

    let errors = validate_profile(&candidate).unwrap_err();
    let rendered = serde_json::to_value(&errors).unwrap();
    assert_eq!(
        rendered,
        json!({
            "contact.phone": "Phone number must be at least 10 digits",
            "addresses": "At least one address is required"
        })
    );
}
