use crate::config::Config;
use crate::error::PersistResult;
use crate::models::Profile;
use crate::repositories::traits::ProfileRepository;
use async_trait::async_trait;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;
use tracing::info;

/// In-memory profile repository that answers after a fixed delay.
///
/// Stands in for a real backend: every persisted profile is kept in order
/// and can be read back with [`SimulatedProfileRepository::saved`].
pub struct SimulatedProfileRepository {
    delay: Duration,
    saved: Mutex<Vec<Profile>>,
}

impl SimulatedProfileRepository {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            saved: Mutex::new(Vec::new()),
        }
    }

    /// Use the configured persist delay.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.persist_delay)
    }

    /// Profiles persisted so far, oldest first.
    pub fn saved(&self) -> Vec<Profile> {
        self.saved
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl ProfileRepository for SimulatedProfileRepository {
    async fn persist(&self, profile: &Profile) -> PersistResult<()> {
        tokio::time::sleep(self.delay).await;
        info!(
            email = %profile.contact.email,
            addresses = profile.addresses.len(),
            "Profile persisted"
        );
        self.saved
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(profile.clone());
        Ok(())
    }
}
