//! Profile model: the aggregate that gets persisted.

use super::{Address, Contact};
use serde::Serialize;

/// Longest accepted delivery instructions, in characters.
pub const MAX_DELIVERY_INSTRUCTIONS: usize = 200;

/// A validated user profile.
///
/// Always holds at least one address; the profile schema refuses to build one otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub contact: Contact,

    pub addresses: Vec<Address>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_instructions: Option<String>,

    pub newsletter: bool,
}
