//! Error types for the profile form core.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::schema::FieldErrors;
use crate::services::SubmissionPhase;
use thiserror::Error;

/// Message shown inline in the address editor when a save collides with an existing entry.
pub const DUPLICATE_ADDRESS_MESSAGE: &str = "This address already exists.";

/// Generic failure indication surfaced after the persist collaborator fails.
pub const SUBMIT_FAILED_MESSAGE: &str = "Profile could not be saved. Please try again.";

/// Errors surfaced by profile operations.
///
/// None of these are fatal: the form stays usable after any of them.
#[derive(Error, Debug)]
pub enum ProfileError {
    /// One or more fields (or a collection-level invariant) failed validation
    #[error("Validation failed: {0}")]
    Validation(#[from] FieldErrors),

    /// Saving an address would duplicate an existing entry
    #[error("{}", DUPLICATE_ADDRESS_MESSAGE)]
    DuplicateAddress,

    /// The persist collaborator failed
    #[error("Persist failed: {0}")]
    Persist(#[from] PersistError),

    /// A draft operation was attempted while the address dialog is closed
    #[error("Address editor is not open")]
    EditorClosed,

    /// Submission is disabled in the current phase
    #[error("Submission unavailable while {phase}")]
    SubmitUnavailable { phase: SubmissionPhase },
}

/// Errors returned by a profile repository.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PersistError {
    /// The store refused the profile
    #[error("Profile rejected: {0}")]
    Rejected(String),

    /// The store did not answer in time
    #[error("Persist timeout")]
    Timeout,

    /// Generic persist error
    #[error("Persist error: {0}")]
    Other(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Failed to load .env file
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),
}

/// Convenience type alias for Results with ProfileError
pub type ProfileResult<T> = Result<T, ProfileError>;

/// Convenience type alias for Results with PersistError
pub type PersistResult<T> = Result<T, PersistError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
