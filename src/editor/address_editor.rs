//! Stateful address editor: owns the address collection and the dialog draft.
//!
//! Every mutation goes through a named transition here; the collection is
//! never exposed mutably.

use super::collection::{find_duplicate, remove_address, upsert_address, SaveOutcome};
use super::state::{reduce, Dialog, EditorMode, FormAction, FormState};
use crate::domain::IdGenerator;
use crate::error::{ProfileError, ProfileResult, DUPLICATE_ADDRESS_MESSAGE};
use crate::metrics::Metrics;
use crate::models::{Address, AddressDraft, Country};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// Address state machine plus the collection it guards.
pub struct AddressEditor {
    state: FormState,
    addresses: Vec<Address>,
    draft: Option<AddressDraft>,
    ids: Arc<dyn IdGenerator>,
    metrics: Metrics,
}

impl AddressEditor {
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        Self::with_addresses(Vec::new(), ids)
    }

    /// Start from an existing collection (e.g. a previously saved profile).
    ///
    /// Entries keep their ids; missing or repeated ids are replaced with
    /// fresh ones. An entry duplicating an earlier one is dropped.
    pub fn with_addresses(addresses: Vec<Address>, ids: Arc<dyn IdGenerator>) -> Self {
        let mut editor = Self {
            state: FormState::default(),
            addresses: Vec::new(),
            draft: None,
            ids,
            metrics: Metrics::new(),
        };
        editor.take_addresses(addresses);
        editor
    }

    /// Report activity into a shared metrics collector.
    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn addresses(&self) -> &[Address] {
        &self.addresses
    }

    /// The in-progress address while the dialog is open.
    pub fn draft(&self) -> Option<&AddressDraft> {
        self.draft.as_ref()
    }

    /// Apply a UI transition.
    pub(crate) fn dispatch(&mut self, action: FormAction) {
        debug!(action = ?action, "Form transition");
        self.state = reduce(&self.state, action);
    }

    pub fn open_for_add(&mut self) {
        self.dispatch(FormAction::OpenForAdd);
        self.draft = Some(AddressDraft::default());
    }

    pub fn open_for_edit(&mut self, existing: Address) {
        self.draft = Some(AddressDraft::from(&existing));
        self.dispatch(FormAction::OpenForEdit(existing));
    }

    /// Open the entry at `index` for editing. Returns `false` if there is none.
    pub fn open_for_edit_at(&mut self, index: usize) -> bool {
        match self.addresses.get(index).cloned() {
            Some(existing) => {
                self.open_for_edit(existing);
                true
            }
            None => false,
        }
    }

    /// Close the dialog, discarding the draft.
    pub fn close(&mut self) {
        self.dispatch(FormAction::CloseDialog);
        self.draft = None;
    }

    /// Edit the open draft. Does nothing while the dialog is closed.
    pub fn update_draft(&mut self, edit: impl FnOnce(&mut AddressDraft)) {
        if let Some(draft) = self.draft.as_mut() {
            edit(draft);
        }
    }

    /// Switch the open draft to another country, clearing region inputs.
    pub fn set_draft_country(&mut self, country: Country) {
        self.update_draft(|draft| draft.set_country(country));
    }

    /// Validate the open draft and save it.
    ///
    /// # Errors
    ///
    /// `ProfileError::EditorClosed` without an open draft,
    /// `ProfileError::Validation` when the draft fails the address schema
    /// (the dialog stays open); otherwise whatever [`AddressEditor::save`] returns.
    pub fn save_draft(&mut self) -> ProfileResult<SaveOutcome> {
        let Some(draft) = self.draft.as_ref() else {
            return Err(ProfileError::EditorClosed);
        };
        let candidate = draft.validate()?;
        self.save(candidate)
    }

    /// Save an already validated address.
    ///
    /// A duplicate keeps the dialog open and sets the inline address error;
    /// anything else updates the collection and closes the dialog.
    pub fn save(&mut self, candidate: Address) -> ProfileResult<SaveOutcome> {
        match upsert_address(&self.addresses, candidate, self.ids.as_ref()) {
            Ok((addresses, outcome)) => {
                self.addresses = addresses;
                self.metrics.record_address_saved();
                debug!(outcome = ?outcome, count = self.addresses.len(), "Address saved");
                self.close();
                Ok(outcome)
            }
            Err(err) => {
                if matches!(err, ProfileError::DuplicateAddress) {
                    self.metrics.record_duplicate_rejected();
                    warn!("Rejected duplicate address");
                    self.dispatch(FormAction::SetAddressError(Some(
                        DUPLICATE_ADDRESS_MESSAGE.to_string(),
                    )));
                }
                Err(err)
            }
        }
    }

    /// Remove the entry at `index`.
    pub fn remove_at(&mut self, index: usize) {
        if index >= self.addresses.len() {
            warn!(index, count = self.addresses.len(), "Ignoring removal of missing address");
            return;
        }
        self.addresses = remove_address(&self.addresses, index);
        self.metrics.record_address_removed();
        debug!(index, count = self.addresses.len(), "Address removed");
    }

    /// Dismiss the inline address error.
    pub fn clear_error(&mut self) {
        self.dispatch(FormAction::SetAddressError(None));
    }

    /// Whether the open dialog is editing (as opposed to adding).
    pub fn is_editing(&self) -> bool {
        matches!(self.state.dialog, Dialog::Open(EditorMode::Edit(_)))
    }

    /// Back to a fresh form: no addresses, initial UI state.
    pub(crate) fn reset(&mut self) {
        self.addresses.clear();
        self.draft = None;
        self.dispatch(FormAction::SubmitReset);
    }

    /// Replace the collection with previously saved addresses.
    ///
    /// Closes the dialog and clears the inline error; submission flags are
    /// left alone.
    pub(crate) fn load(&mut self, addresses: Vec<Address>) {
        self.close();
        self.clear_error();
        self.addresses.clear();
        self.take_addresses(addresses);
    }

    /// Carry over the submission flags of `from`, whatever happened since.
    pub(crate) fn keep_submission_state(&mut self, from: &FormState) {
        self.state.submitted = from.submitted;
        self.state.loading = from.loading;
        self.state.submit_error = from.submit_error.clone();
    }

    fn take_addresses(&mut self, addresses: Vec<Address>) {
        for mut address in addresses {
            if find_duplicate(&self.addresses, &address).is_some() {
                warn!(street = %address.street_address, "Dropped duplicate address on load");
                continue;
            }
            let id_taken = address
                .id
                .as_ref()
                .map_or(true, |id| self.addresses.iter().any(|a| a.id.as_ref() == Some(id)));
            if id_taken {
                address.id = Some(self.ids.new_id());
            }
            self.addresses.push(address);
        }
        debug!(count = self.addresses.len(), "Addresses loaded");
    }
}

impl fmt::Debug for AddressEditor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AddressEditor")
            .field("state", &self.state)
            .field("addresses", &self.addresses.len())
            .field("draft", &self.draft)
            .finish()
    }
}
