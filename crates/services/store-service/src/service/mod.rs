//! Configuration lookup business logic.

mod configuration_service;

pub use configuration_service::{ConfigurationLookup, ConfigurationService};
