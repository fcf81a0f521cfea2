//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies:
//! users and their age categories, password hashing, configuration entries,
//! and recovery of structured JSON from free-form model output.

pub mod analysis;
pub mod configuration;
pub mod constants;
pub mod error;
pub mod password;
pub mod user;

pub use analysis::{extract_json, AnalysisDetails, ExtractionError, HealthAnalysis};
pub use configuration::ConfigEntry;
pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use password::Password;
pub use user::{classify_age, AgeCategory, NewUser, User, UserResponse};
