//! AddressId value object and identifier generation.

use super::errors::ValidationError;
use serde::{Serialize, Serializer};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// A type-safe wrapper for address IDs.
///
/// The ID is the stable identity of an address inside a profile. It is used
/// for edit matching and duplicate exemption, never for display.
///
/// # Example
///
/// ```
/// use profile_form_core::domain::AddressId;
///
/// let id = AddressId::new("addr_123").unwrap();
/// assert_eq!(id.as_str(), "addr_123");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AddressId(String);

impl AddressId {
    /// Create a new AddressId, validating that it's not empty.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyId` if the provided ID is empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ValidationError::EmptyId);
        }
        Ok(Self(id))
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as string
impl Serialize for AddressId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl fmt::Display for AddressId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Source of fresh address identifiers.
///
/// Implementations must never hand out the same value twice within a session.
pub trait IdGenerator: Send + Sync {
    /// Produce a new identifier.
    fn new_id(&self) -> AddressId;
}

/// Random v4 UUIDs.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn new_id(&self) -> AddressId {
        AddressId(uuid::Uuid::new_v4().to_string())
    }
}

/// Deterministic `<prefix>-<n>` identifiers, counting up from 1.
#[derive(Debug)]
pub struct SequentialIdGenerator {
    prefix: String,
    next: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
        }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new("addr")
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn new_id(&self) -> AddressId {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        AddressId(format!("{}-{}", self.prefix, n))
    }
}
