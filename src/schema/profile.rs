//! Profile schema: contact, address collection and profile options.

use super::address::collect_address;
use super::contact::collect_contact;
use super::field_errors::FieldErrors;
use super::reader::{char_len, expected, FieldReader, REQUIRED};
use crate::models::profile::MAX_DELIVERY_INSTRUCTIONS;
use crate::models::Profile;
use serde_json::Value;

/// Message attached to `addresses` itself when the list is empty.
pub const ADDRESSES_REQUIRED: &str = "At least one address is required";

/// Validate a whole profile candidate.
///
/// Element failures are reported as `addresses.<i>.<field>`; an empty list
/// is reported once, as an aggregate issue on `addresses`.
pub fn validate_profile(candidate: &Value) -> Result<Profile, FieldErrors> {
    let mut errors = FieldErrors::new();
    match collect_profile(candidate, &mut errors) {
        Some(profile) => errors.into_result(profile),
        None => Err(errors),
    }
}

fn collect_profile(value: &Value, errors: &mut FieldErrors) -> Option<Profile> {
    let mut reader = FieldReader::open(value, "", errors)?;

    let contact = match reader.get("contact") {
        Some(contact) => collect_contact(contact, "contact", reader.errors()),
        None => {
            reader.fail("contact", REQUIRED);
            None
        }
    };

    let addresses = match reader.get("addresses") {
        Some(Value::Array(items)) if items.is_empty() => {
            reader.fail_aggregate("addresses", ADDRESSES_REQUIRED);
            None
        }
        // Every element is checked before the Option short-circuits.
        Some(Value::Array(items)) => items
            .iter()
            .enumerate()
            .map(|(i, item)| collect_address(item, &format!("addresses.{}", i), reader.errors()))
            .collect::<Vec<_>>()
            .into_iter()
            .collect::<Option<Vec<_>>>(),
        Some(other) => {
            reader.fail("addresses", expected("array", other));
            None
        }
        None => {
            reader.fail("addresses", REQUIRED);
            None
        }
    };

    let delivery_instructions = reader.optional_str("deliveryInstructions");
    if let Some(text) = delivery_instructions {
        if char_len(text) > MAX_DELIVERY_INSTRUCTIONS {
            reader.fail(
                "deliveryInstructions",
                "Instructions cannot exceed 200 characters",
            );
        }
    }

    let newsletter = reader.required_bool("newsletter");

    if reader.failed() {
        return None;
    }

    Some(Profile {
        contact: contact?,
        addresses: addresses?,
        delivery_instructions: delivery_instructions.map(str::to_string),
        newsletter: newsletter?,
    })
}
