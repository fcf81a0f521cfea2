//! Auth Service Library
//!
//! Credential and token authority: password hashing through the domain
//! `Password` value object, JWT issuance and verification, and the
//! registration and login use cases on top of the user store.

pub mod config;
pub mod service;

use std::sync::Arc;

use store_service_lib::repository::UserRepository;

use crate::config::AuthServiceConfig;
use crate::service::{Authenticator, TokenAuthority};

/// Build the authenticator from configuration and an injected user store.
pub fn build_authenticator(
    config: &AuthServiceConfig,
    users: Arc<dyn UserRepository>,
) -> Authenticator {
    let tokens = TokenAuthority::new(&config.jwt_secret, config.token_lifetime());
    Authenticator::new(users, tokens)
}
