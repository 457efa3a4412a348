//! Address schema: a discriminated union over `country`.
//!
//! The discriminant picks the variant first; only that variant's rules run.
//! Keys that belong to other countries are ignored.

use super::field_errors::FieldErrors;
use super::reader::FieldReader;
use crate::domain::AddressId;
use crate::models::{Address, AddressType, Country, Region};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

pub(crate) const INVALID_COUNTRY: &str =
    "Invalid discriminator value. Expected 'USA' | 'Canada' | 'UK' | 'Other'";
const INVALID_ADDRESS_TYPE: &str =
    "Invalid enum value. Expected 'Home' | 'Work' | 'Billing' | 'Shipping'";

static ZIP_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{5}(?:[-\s]\d{4})?$").expect("zip pattern is valid"));

static CANADIAN_POSTAL_CODE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z]\d[A-Za-z][ -]?\d[A-Za-z]\d$").expect("postal code pattern is valid")
});

static UK_POSTCODE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[A-Z]{1,2}\d[A-Z\d]? ?\d[A-Z]{2}$").expect("postcode pattern is valid")
});

/// Validate an address candidate.
///
/// # Errors
///
/// Returns every failing field of the matched variant. A missing or unknown
/// `country` yields a single error on `country`.
pub fn validate_address(candidate: &Value) -> Result<Address, FieldErrors> {
    let mut errors = FieldErrors::new();
    match collect_address(candidate, "", &mut errors) {
        Some(address) => errors.into_result(address),
        None => Err(errors),
    }
}

/// Check the address rules, recording failures under `prefix`.
pub(crate) fn collect_address(value: &Value, prefix: &str, errors: &mut FieldErrors) -> Option<Address> {
    let mut reader = FieldReader::open(value, prefix, errors)?;

    let Some(country) = reader
        .get("country")
        .and_then(Value::as_str)
        .and_then(|s| s.parse::<Country>().ok())
    else {
        reader.fail("country", INVALID_COUNTRY);
        return None;
    };

    // An empty id is what an unsaved draft carries; treat it as no id.
    let id = reader
        .optional_str("id")
        .filter(|id| !id.is_empty())
        .and_then(|id| AddressId::new(id).ok());

    let address_type = reader.required_str("addressType").and_then(|raw| {
        raw.parse::<AddressType>()
            .map_err(|_| reader.fail("addressType", INVALID_ADDRESS_TYPE))
            .ok()
    });
    let street_address = reader.min_chars("streetAddress", 5, "Street address is too short");
    let address_line2 = reader.optional_str("addressLine2");
    let city = reader.min_chars("city", 2, "City is required");

    let region = match country {
        Country::Usa => {
            let state = reader.min_chars("state", 2, "State is required");
            let zip_code = reader.matching("zipCode", &ZIP_CODE, "Invalid ZIP code");
            state.zip(zip_code).map(|(state, zip_code)| Region::Usa {
                state: state.to_string(),
                zip_code: zip_code.to_string(),
            })
        }
        Country::Canada => {
            let province = reader.min_chars("province", 2, "Province is required");
            let postal_code =
                reader.matching("postalCode", &CANADIAN_POSTAL_CODE, "Invalid postal code");
            province
                .zip(postal_code)
                .map(|(province, postal_code)| Region::Canada {
                    province: province.to_string(),
                    postal_code: postal_code.to_string(),
                })
        }
        Country::Uk => reader
            .matching("postcode", &UK_POSTCODE, "Invalid postcode")
            .map(|postcode| Region::Uk {
                postcode: postcode.to_string(),
            }),
        Country::Other => {
            let state = reader.optional_str("state");
            let zip_code = reader.optional_str("zipCode");
            Some(Region::Other {
                state: state.map(str::to_string),
                zip_code: zip_code.map(str::to_string),
            })
        }
    };

    if reader.failed() {
        return None;
    }

    Some(Address {
        id,
        address_type: address_type?,
        street_address: street_address?.to_string(),
        address_line2: address_line2.map(str::to_string),
        city: city?.to_string(),
        region: region?,
    })
}
