//! PhoneNumber value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;

static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\+\d{1,3}[- ]?)?\d{10}$").expect("phone pattern is valid"));

const MIN_PHONE_LEN: usize = 10;

/// A type-safe wrapper for phone numbers.
///
/// Accepts ten digits with an optional `+<country code>` prefix, separated
/// from the number by at most one space or hyphen.
///
/// # Example
///
/// ```
/// use profile_form_core::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("+1 5551234567").unwrap();
/// assert_eq!(phone.digits_only(), "15551234567");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::PhoneTooShort` below ten characters and
    /// `ValidationError::InvalidPhone` when the pattern does not match.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if phone.chars().count() < MIN_PHONE_LEN {
            return Err(ValidationError::PhoneTooShort(phone));
        }
        if !PHONE_PATTERN.is_match(&phone) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(phone))
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Get the phone number with only digits (no formatting).
    pub fn digits_only(&self) -> String {
        self.0.chars().filter(|c| c.is_ascii_digit()).collect()
    }
}

impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
