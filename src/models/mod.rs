//! Data models for the user profile.
//!
//! This module contains the typed, already-validated structures (contact,
//! address, profile) together with the editable drafts the form holds while
//! the user is typing.

pub mod address;
pub mod contact;
pub mod draft;
pub mod profile;

pub use address::{Address, AddressType, Country, InputField, Region};
pub use contact::Contact;
pub use draft::{AddressDraft, ProfileDraft};
pub use profile::{Profile, MAX_DELIVERY_INSTRUCTIONS};
