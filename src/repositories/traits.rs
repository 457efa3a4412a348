use crate::error::PersistResult;
use crate::models::Profile;
use async_trait::async_trait;

/// Repository for persisting profiles.
///
/// The form only ever calls `persist` with a profile that already passed
/// the profile schema, and never twice concurrently for the same form.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Store the profile.
    async fn persist(&self, profile: &Profile) -> PersistResult<()>;
}
