//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided ID is empty.
    EmptyId,

    /// The provided email address is invalid.
    InvalidEmail(String),

    /// The provided phone number has fewer than ten characters.
    PhoneTooShort(String),

    /// The provided phone number does not match the accepted pattern.
    InvalidPhone(String),
}

impl ValidationError {
    /// The message shown next to the offending input.
    pub fn field_message(&self) -> &'static str {
        match self {
            Self::EmptyId => "ID cannot be empty",
            Self::InvalidEmail(_) => "Please enter a valid email address",
            Self::PhoneTooShort(_) => "Phone number must be at least 10 digits",
            Self::InvalidPhone(_) => "Please enter a valid phone number",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "ID cannot be empty"),
            Self::InvalidEmail(email) => write!(f, "Invalid email address: {}", email),
            Self::PhoneTooShort(phone) => write!(f, "Phone number too short: {}", phone),
            Self::InvalidPhone(phone) => write!(f, "Invalid phone number: {}", phone),
        }
    }
}

impl std::error::Error for ValidationError {}
