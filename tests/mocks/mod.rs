//! Test doubles shared by the integration tests.

mod mock_profile_repository;

#[allow(unused_imports)]
pub use mock_profile_repository::MockProfileRepository;
