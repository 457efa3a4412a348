mod simulated_profile_repository;
mod traits;

pub use simulated_profile_repository::SimulatedProfileRepository;
pub use traits::ProfileRepository;
