//! Profile submission flow.
//!
//! Orchestrates validate, persist and the timed reset that follows a
//! successful save. All form state lives behind one lock that is never held
//! across an await point.

use crate::config::Config;
use crate::domain::IdGenerator;
use crate::editor::{AddressEditor, FormAction, FormState};
use crate::error::{ProfileError, ProfileResult, SUBMIT_FAILED_MESSAGE};
use crate::metrics::{Metrics, PersistTimer};
use crate::models::{Address, AddressDraft, Profile, ProfileDraft};
use crate::repositories::ProfileRepository;
use crate::schema::{validate_profile, FieldErrors};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Where the form is in the submission cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionPhase {
    Idle,
    Submitting,
    Submitted,
}

impl fmt::Display for SubmissionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SubmissionPhase::Idle => "idle",
            SubmissionPhase::Submitting => "submitting",
            SubmissionPhase::Submitted => "submitted",
        };
        f.write_str(name)
    }
}

/// Returned when a profile has been persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionReceipt {
    pub submitted_at: DateTime<Utc>,
    pub address_count: usize,
}

/// Everything the rendering layer needs, copied out of the form.
#[derive(Debug, Clone)]
pub struct FormSnapshot {
    pub state: FormState,
    pub phase: SubmissionPhase,
    pub values: ProfileDraft,
    pub addresses: Vec<Address>,
    pub draft: Option<AddressDraft>,
    /// Current profile validation result; `None` when the profile is valid
    pub errors: Option<FieldErrors>,
}

struct FormSession {
    values: ProfileDraft,
    editor: AddressEditor,
}

impl FormSession {
    fn candidate(&self) -> Value {
        self.values.to_value(self.editor.addresses())
    }

    fn validate(&self) -> Result<Profile, FieldErrors> {
        validate_profile(&self.candidate())
    }

    fn reset(&mut self) {
        self.values = ProfileDraft::default();
        self.editor.reset();
    }
}

fn lock(session: &Mutex<FormSession>) -> MutexGuard<'_, FormSession> {
    session.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Returns the form to `Idle` if a submission is abandoned mid-persist.
struct InFlight<'a> {
    session: &'a Mutex<FormSession>,
    armed: bool,
}

impl<'a> InFlight<'a> {
    fn arm(session: &'a Mutex<FormSession>) -> Self {
        Self {
            session,
            armed: true,
        }
    }

    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if self.armed {
            warn!("Submission abandoned before persist completed");
            lock(self.session)
                .editor
                .dispatch(FormAction::SubmitFailed(SUBMIT_FAILED_MESSAGE.to_string()));
        }
    }
}

/// A user profile form: contact inputs, the address editor and the
/// submission cycle.
///
/// Dropping the form cancels a pending post-success reset.
pub struct ProfileForm {
    session: Arc<Mutex<FormSession>>,
    repository: Arc<dyn ProfileRepository>,
    success_display: Duration,
    metrics: Metrics,
    pending_reset: Mutex<Option<JoinHandle<()>>>,
}

impl ProfileForm {
    /// Create an empty form using the configured success window.
    pub fn new(
        repository: Arc<dyn ProfileRepository>,
        ids: Arc<dyn IdGenerator>,
        config: &Config,
    ) -> Self {
        Self::with_success_display(repository, ids, config.success_display)
    }

    pub fn with_success_display(
        repository: Arc<dyn ProfileRepository>,
        ids: Arc<dyn IdGenerator>,
        success_display: Duration,
    ) -> Self {
        let metrics = Metrics::new();
        let editor = AddressEditor::new(ids).with_metrics(metrics.clone());
        Self {
            session: Arc::new(Mutex::new(FormSession {
                values: ProfileDraft::default(),
                editor,
            })),
            repository,
            success_display,
            metrics,
            pending_reset: Mutex::new(None),
        }
    }

    /// Pre-fill the form from an existing profile.
    ///
    /// # Errors
    ///
    /// `ProfileError::SubmitUnavailable` unless the form is `Idle`.
    pub fn load(&self, profile: &Profile) -> ProfileResult<()> {
        let mut session = lock(&self.session);
        let phase = session.editor.state().phase();
        if phase != SubmissionPhase::Idle {
            debug!(%phase, "Load refused");
            return Err(ProfileError::SubmitUnavailable { phase });
        }
        session.values = ProfileDraft::from(profile);
        session.editor.load(profile.addresses.clone());
        debug!(addresses = session.editor.addresses().len(), "Profile loaded");
        Ok(())
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn values(&self) -> ProfileDraft {
        lock(&self.session).values.clone()
    }

    /// Edit contact inputs and profile options.
    pub fn update_values(&self, edit: impl FnOnce(&mut ProfileDraft)) {
        edit(&mut lock(&self.session).values);
    }

    /// Run address transitions against the editor.
    ///
    /// The submission phase is owned by [`ProfileForm::submit`]; whatever the
    /// transition does, it cannot change it.
    pub fn with_editor<R>(&self, transition: impl FnOnce(&mut AddressEditor) -> R) -> R {
        let mut session = lock(&self.session);
        let before = session.editor.state().clone();
        let result = transition(&mut session.editor);
        session.editor.keep_submission_state(&before);
        result
    }

    pub fn addresses(&self) -> Vec<Address> {
        lock(&self.session).editor.addresses().to_vec()
    }

    pub fn state(&self) -> FormState {
        lock(&self.session).editor.state().clone()
    }

    pub fn phase(&self) -> SubmissionPhase {
        lock(&self.session).editor.state().phase()
    }

    /// The profile as the schema sees it right now.
    pub fn candidate(&self) -> Value {
        lock(&self.session).candidate()
    }

    pub fn validate(&self) -> Result<Profile, FieldErrors> {
        lock(&self.session).validate()
    }

    /// Whether the submit trigger should be enabled.
    pub fn can_submit(&self) -> bool {
        let session = lock(&self.session);
        session.editor.state().phase() == SubmissionPhase::Idle && session.validate().is_ok()
    }

    pub fn snapshot(&self) -> FormSnapshot {
        let session = lock(&self.session);
        let state = session.editor.state().clone();
        FormSnapshot {
            phase: state.phase(),
            state,
            values: session.values.clone(),
            addresses: session.editor.addresses().to_vec(),
            draft: session.editor.draft().cloned(),
            errors: session.validate().err(),
        }
    }

    /// Validate and persist the profile.
    ///
    /// On success the form shows the submitted state and resets itself after
    /// the success window. On persist failure it returns to `Idle` with all
    /// input kept.
    ///
    /// # Errors
    ///
    /// - `ProfileError::SubmitUnavailable` unless the form is `Idle`
    /// - `ProfileError::Validation` if the profile does not validate
    /// - `ProfileError::Persist` if the repository fails
    pub async fn submit(&self) -> ProfileResult<SubmissionReceipt> {
        let profile = {
            let mut session = lock(&self.session);
            let phase = session.editor.state().phase();
            if phase != SubmissionPhase::Idle {
                debug!(%phase, "Submit refused");
                return Err(ProfileError::SubmitUnavailable { phase });
            }
            let profile = match session.validate() {
                Ok(profile) => profile,
                Err(errors) => {
                    self.metrics.record_validation_failure();
                    debug!(issues = errors.len(), "Submit refused: profile invalid");
                    return Err(errors.into());
                }
            };
            session.editor.dispatch(FormAction::SubmitStart);
            profile
        };

        let in_flight = InFlight::arm(&self.session);
        info!(addresses = profile.addresses.len(), "Submitting profile");
        let timer = PersistTimer::new(self.metrics.clone());
        let result = self.repository.persist(&profile).await;
        in_flight.disarm();

        match result {
            Ok(()) => {
                timer.complete();
                lock(&self.session)
                    .editor
                    .dispatch(FormAction::SubmitSuccess);
                self.schedule_reset();
                info!("Profile submitted");
                Ok(SubmissionReceipt {
                    submitted_at: Utc::now(),
                    address_count: profile.addresses.len(),
                })
            }
            Err(err) => {
                timer.complete_with_error();
                warn!(error = %err, "Profile persist failed");
                lock(&self.session)
                    .editor
                    .dispatch(FormAction::SubmitFailed(SUBMIT_FAILED_MESSAGE.to_string()));
                Err(err.into())
            }
        }
    }

    fn schedule_reset(&self) {
        let session = Arc::downgrade(&self.session);
        let delay = self.success_display;

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            match session.upgrade() {
                Some(session) => {
                    lock(&session).reset();
                    debug!("Form reset after success window");
                }
                None => debug!("Form gone before reset"),
            }
        });

        let mut pending = self
            .pending_reset
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = pending.replace(handle) {
            previous.abort();
        }
    }
}

impl Drop for ProfileForm {
    fn drop(&mut self) {
        let pending = self
            .pending_reset
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(handle) = pending.take() {
            handle.abort();
        }
    }
}

impl fmt::Debug for ProfileForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProfileForm")
            .field("phase", &self.phase())
            .field("success_display", &self.success_display)
            .finish()
    }
}
