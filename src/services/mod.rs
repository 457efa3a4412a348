//! Application service layer.
//!
//! Services orchestrate validation, the address editor and the profile
//! repository. They are the boundary between a rendering layer and the
//! data access layer.

mod profile_form;

pub use profile_form::{FormSnapshot, ProfileForm, SubmissionPhase, SubmissionReceipt};
