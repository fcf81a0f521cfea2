//! Authentication service business logic.

mod auth_service;
mod token;

pub use auth_service::{AuthService, Authenticator, LoginResult};
pub use token::{Claims, SigningSecret, TokenAuthority};
