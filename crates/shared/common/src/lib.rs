//! Common utilities shared across all crates.
//!
//! This crate provides:
//! - Unified error handling with HTTP response conversion
//! - Configuration structures and the runtime environment

pub mod config;
pub mod error;

pub use config::*;
pub use error::{AppError, AppResult, OptionExt};
