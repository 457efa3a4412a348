use async_trait::async_trait;
use profile_form_core::error::{PersistError, PersistResult};
use profile_form_core::models::Profile;
use profile_form_core::repositories::ProfileRepository;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Mock profile repository for testing.
///
/// Stores persisted profiles in memory, tracks method calls for
/// verification and can be scripted to fail upcoming calls.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockProfileRepository {
    saved: Arc<Mutex<Vec<Profile>>>,
    failures: Arc<Mutex<VecDeque<PersistError>>>,
    delay: Duration,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockProfileRepository {
    /// Create a new MockProfileRepository that answers immediately.
    pub fn new() -> Self {
        Self::with_delay(Duration::ZERO)
    }

    /// Create a MockProfileRepository whose persist takes `delay`.
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            saved: Arc::new(Mutex::new(Vec::new())),
            failures: Arc::new(Mutex::new(VecDeque::new())),
            delay,
            call_counts: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Make the next persist call fail with `error`.
    pub fn fail_next(&self, error: PersistError) {
        let mut failures = self.failures.lock().unwrap();
        failures.push_back(error);
    }

    /// Profiles persisted so far, oldest first.
    pub fn saved(&self) -> Vec<Profile> {
        self.saved.lock().unwrap().clone()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    /// Reset all call counts.
    pub fn reset_call_counts(&self) {
        let mut counts = self.call_counts.lock().unwrap();
        counts.clear();
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl Default for MockProfileRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProfileRepository for MockProfileRepository {
    async fn persist(&self, profile: &Profile) -> PersistResult<()> {
        self.track_call("persist");

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let failure = self.failures.lock().unwrap().pop_front();
        if let Some(error) = failure {
            return Err(error);
        }

        self.saved.lock().unwrap().push(profile.clone());
        Ok(())
    }
}
