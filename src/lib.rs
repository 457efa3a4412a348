//! Profile Form Core - validation and state management for a user profile form.
//!
//! This library implements the headless core of a profile form: a contact
//! block, an editable collection of postal addresses whose required fields
//! depend on the country, delivery options, and a submit cycle against a
//! pluggable persist collaborator.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (email, phone, address ids)
//! - **models**: Typed contact, address and profile plus editable drafts
//! - **schema**: JSON-in validators that report every failing field by path
//! - **editor**: Address dialog state machine and collection operations
//! - **services**: The profile form and its submission flow
//! - **repositories**: Persist collaborator trait and a simulated store
//! - **metrics**: Counters for editor and persist activity
//! - **config**: Configuration from environment variables
//! - **error**: Custom error types for precise error handling

pub mod config;
pub mod domain;
pub mod editor;
pub mod error;
pub mod metrics;
pub mod models;
pub mod repositories;
pub mod schema;
pub mod services;

// Re-export commonly used types
pub use config::Config;
pub use domain::{AddressId, EmailAddress, IdGenerator, PhoneNumber, SequentialIdGenerator, UuidIdGenerator};
pub use editor::{AddressEditor, FormAction, FormState, SaveOutcome};
pub use error::{ConfigError, PersistError, ProfileError, ProfileResult};
pub use metrics::{Metrics, MetricsSummary, PersistTimer};
pub use models::{Address, AddressDraft, AddressType, Contact, Country, Profile, ProfileDraft, Region};
pub use repositories::{ProfileRepository, SimulatedProfileRepository};
pub use schema::{validate_address, validate_contact, validate_profile, FieldErrors};
pub use services::{FormSnapshot, ProfileForm, SubmissionPhase, SubmissionReceipt};
