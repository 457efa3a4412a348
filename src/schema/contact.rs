//! Contact schema: atomic rules for the contact fields.

use super::field_errors::FieldErrors;
use super::reader::FieldReader;
use crate::domain::{EmailAddress, PhoneNumber};
use crate::models::Contact;
use serde_json::Value;

const MIN_NAME_LEN: usize = 2;

/// Validate a contact candidate.
pub fn validate_contact(candidate: &Value) -> Result<Contact, FieldErrors> {
    let mut errors = FieldErrors::new();
    let contact = collect_contact(candidate, "", &mut errors);
    match contact {
        Some(contact) => errors.into_result(contact),
        None => Err(errors),
    }
}

/// Check every contact rule, recording failures under `prefix`.
pub(crate) fn collect_contact(value: &Value, prefix: &str, errors: &mut FieldErrors) -> Option<Contact> {
    let mut reader = FieldReader::open(value, prefix, errors)?;

    let first_name = reader.min_chars(
        "firstName",
        MIN_NAME_LEN,
        "First name must be at least 2 characters",
    );
    let last_name = reader.min_chars(
        "lastName",
        MIN_NAME_LEN,
        "Last name must be at least 2 characters",
    );

    let email = reader.required_str("email").and_then(|raw| {
        EmailAddress::new(raw)
            .map_err(|e| reader.fail("email", e.field_message()))
            .ok()
    });
    let phone = reader.required_str("phone").and_then(|raw| {
        PhoneNumber::new(raw)
            .map_err(|e| reader.fail("phone", e.field_message()))
            .ok()
    });

    Some(Contact {
        first_name: first_name?.to_string(),
        last_name: last_name?.to_string(),
        email: email?,
        phone: phone?,
    })
}
