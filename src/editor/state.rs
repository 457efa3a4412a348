//! Form UI state and its single transition function.

use crate::models::Address;
use crate::services::SubmissionPhase;

/// What the open address dialog is doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorMode {
    Add,
    Edit(Address),
}

/// Address dialog state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Dialog {
    #[default]
    Closed,
    Open(EditorMode),
}

/// Snapshot of the form's UI flags.
///
/// Only [`reduce`] produces new snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    pub submitted: bool,
    pub loading: bool,
    pub dialog: Dialog,
    /// Inline error shown in the address section (duplicate rejection)
    pub address_error: Option<String>,
    /// Generic failure indication after a failed persist
    pub submit_error: Option<String>,
}

impl FormState {
    pub fn is_modal_open(&self) -> bool {
        matches!(self.dialog, Dialog::Open(_))
    }

    /// The address under edit, if the dialog is open in edit mode.
    pub fn editing_address(&self) -> Option<&Address> {
        match &self.dialog {
            Dialog::Open(EditorMode::Edit(address)) => Some(address),
            _ => None,
        }
    }

    pub fn phase(&self) -> SubmissionPhase {
        if self.loading {
            SubmissionPhase::Submitting
        } else if self.submitted {
            SubmissionPhase::Submitted
        } else {
            SubmissionPhase::Idle
        }
    }

    pub fn dialog_title(&self) -> Option<&'static str> {
        match &self.dialog {
            Dialog::Closed => None,
            Dialog::Open(EditorMode::Add) => Some("Add New Address"),
            Dialog::Open(EditorMode::Edit(_)) => Some("Edit Address"),
        }
    }

    /// Banner shown while the success window is open.
    pub fn success_message(&self) -> Option<&'static str> {
        self.submitted.then_some("Profile saved successfully!")
    }
}

/// Named transitions of the form UI state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    SubmitStart,
    SubmitSuccess,
    SubmitFailed(String),
    SubmitReset,
    OpenForAdd,
    OpenForEdit(Address),
    CloseDialog,
    SetAddressError(Option<String>),
}

/// The one authoritative transition function.
pub fn reduce(state: &FormState, action: FormAction) -> FormState {
    match action {
        FormAction::SubmitStart => FormState {
            loading: true,
            submit_error: None,
            ..state.clone()
        },
        FormAction::SubmitSuccess => FormState {
            loading: false,
            submitted: true,
            ..state.clone()
        },
        FormAction::SubmitFailed(message) => FormState {
            loading: false,
            submitted: false,
            submit_error: Some(message),
            ..state.clone()
        },
        FormAction::SubmitReset => FormState::default(),
        FormAction::OpenForAdd => FormState {
            dialog: Dialog::Open(EditorMode::Add),
            address_error: None,
            ..state.clone()
        },
        FormAction::OpenForEdit(address) => FormState {
            dialog: Dialog::Open(EditorMode::Edit(address)),
            address_error: None,
            ..state.clone()
        },
        FormAction::CloseDialog => FormState {
            dialog: Dialog::Closed,
            ..state.clone()
        },
        FormAction::SetAddressError(error) => FormState {
            address_error: error,
            ..state.clone()
        },
    }
}
