//! Repository layer for data access.

pub mod entities;
mod configuration_repository;
mod user_repository;

pub use configuration_repository::{ConfigurationRepository, ConfigurationStore};
pub use user_repository::{UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use configuration_repository::MockConfigurationRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
