//! Pure operations over the ordered address collection.
//!
//! Nothing here touches UI state; each function takes the current sequence
//! and returns a new one (or a rejection).

use crate::domain::IdGenerator;
use crate::error::{ProfileError, ProfileResult};
use crate::models::Address;

/// How a successful save changed the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// A new entry was appended at this index.
    Inserted(usize),
    /// The entry at this index was replaced in place.
    Updated(usize),
}

impl SaveOutcome {
    pub fn index(&self) -> usize {
        match self {
            SaveOutcome::Inserted(i) | SaveOutcome::Updated(i) => *i,
        }
    }
}

/// Index of an existing entry the candidate would duplicate.
///
/// Two addresses collide when street, city and country all match. The entry
/// sharing the candidate's `id` is the one being edited and never counts.
pub fn find_duplicate(addresses: &[Address], candidate: &Address) -> Option<usize> {
    addresses.iter().position(|existing| {
        let is_self = candidate.id.is_some() && candidate.id == existing.id;
        !is_self && existing.same_location(candidate)
    })
}

/// Save `candidate` into the collection.
///
/// An entry with the same `id` is replaced at its position; otherwise the
/// candidate gets a fresh id from `ids` and is appended.
///
/// # Errors
///
/// Returns `ProfileError::DuplicateAddress` and leaves the input untouched
/// when [`find_duplicate`] matches.
pub fn upsert_address(
    addresses: &[Address],
    mut candidate: Address,
    ids: &dyn IdGenerator,
) -> ProfileResult<(Vec<Address>, SaveOutcome)> {
    if find_duplicate(addresses, &candidate).is_some() {
        return Err(ProfileError::DuplicateAddress);
    }

    let mut next = addresses.to_vec();
    let existing = candidate
        .id
        .as_ref()
        .and_then(|id| next.iter().position(|a| a.id.as_ref() == Some(id)));

    let outcome = match existing {
        Some(index) => {
            next[index] = candidate;
            SaveOutcome::Updated(index)
        }
        None => {
            candidate.id = Some(ids.new_id());
            next.push(candidate);
            SaveOutcome::Inserted(next.len() - 1)
        }
    };
    Ok((next, outcome))
}

/// Remove the entry at `index`. An out-of-range index leaves the sequence as is.
pub fn remove_address(addresses: &[Address], index: usize) -> Vec<Address> {
    let mut next = addresses.to_vec();
    if index < next.len() {
        next.remove(index);
    }
    next
}
