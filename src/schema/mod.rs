//! Schema-driven validation.
//!
//! Each schema takes untyped JSON input and returns either the typed model
//! or every failing field, keyed by dotted path. Rules are pure functions of
//! the input: no trimming, no locale, no I/O.

pub mod address;
pub mod contact;
pub mod field_errors;
pub mod profile;
mod reader;

pub use address::validate_address;
pub use contact::validate_contact;
pub use field_errors::{join_path, FieldErrors, FieldIssue, IssueKind, ROOT_PATH};
pub use profile::{validate_profile, ADDRESSES_REQUIRED};
