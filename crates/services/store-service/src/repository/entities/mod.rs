//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod configuration;
pub mod user;
