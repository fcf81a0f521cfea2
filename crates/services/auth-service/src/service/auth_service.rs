//! Authentication service - registration, login and token checks.
//!
//! Passwords go through the domain `Password` value object. bcrypt is CPU
//! bound, so hashing and verification run on the blocking pool.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use std::sync::Arc;

use store_service_lib::repository::UserRepository;

use super::token::{Claims, TokenAuthority};
use common::{AppError, AppResult};
use domain::{classify_age, NewUser, Password, User};

/// Hash verified when the email is unknown, so both login failures cost one
/// bcrypt verification.
static DUMMY_HASH: Lazy<String> = Lazy::new(|| {
    Password::new("dummy-password-never-matches")
        .map(Password::into_string)
        .unwrap_or_default()
});

/// Successful login outcome
#[derive(Debug, Clone)]
pub struct LoginResult {
    pub user: User,
    /// Signed session token
    pub token: String,
    /// Token lifetime in seconds
    pub expires_in: i64,
}

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register a new user and return it
    async fn register(&self, email: String, password: String, age: i32) -> AppResult<User>;

    /// Check credentials and issue a token
    async fn login(&self, email: String, password: String) -> AppResult<LoginResult>;

    /// Verify a token; `None` if it is malformed, foreign or expired
    fn verify_token(&self, token: &str) -> Option<Claims>;
}

/// Concrete implementation of AuthService on top of the user store.
pub struct Authenticator {
    users: Arc<dyn UserRepository>,
    tokens: TokenAuthority,
}

impl Authenticator {
    /// Create new auth service instance
    pub fn new(users: Arc<dyn UserRepository>, tokens: TokenAuthority) -> Self {
        Self { users, tokens }
    }
}

async fn hash_password(plain: String) -> AppResult<String> {
    tokio::task::spawn_blocking(move || Password::new(&plain).map(Password::into_string))
        .await
        .map_err(|e| AppError::internal(format!("Hashing task failed: {}", e)))?
        .map_err(AppError::from)
}

async fn verify_password(plain: String, hash: String) -> AppResult<bool> {
    tokio::task::spawn_blocking(move || Password::from_hash(hash).verify(&plain))
        .await
        .map_err(|e| AppError::internal(format!("Verification task failed: {}", e)))
}

#[async_trait]
impl AuthService for Authenticator {
    async fn register(&self, email: String, password: String, age: i32) -> AppResult<User> {
        if self.users.count_by_email(&email).await? > 0 {
            return Err(AppError::conflict("User"));
        }

        let role = classify_age(age)?;
        let password_hash = hash_password(password).await?;

        let user = self
            .users
            .create(NewUser {
                email,
                password_hash,
                age,
                role: Some(role),
            })
            .await?;

        tracing::info!(user_id = %user.id, role = %role, "User registered");
        Ok(user)
    }

    async fn login(&self, email: String, password: String) -> AppResult<LoginResult> {
        let user = self.users.find_by_email(&email).await?;

        let hash = match &user {
            Some(user) => user.password_hash.clone(),
            None => DUMMY_HASH.clone(),
        };
        let password_valid = verify_password(password, hash).await?;

        let user = match user {
            Some(user) if password_valid => user,
            _ => return Err(AppError::InvalidCredentials),
        };

        let token = self.tokens.issue_token(&user)?;

        Ok(LoginResult {
            user,
            token,
            expires_in: self.tokens.lifetime_seconds(),
        })
    }

    fn verify_token(&self, token: &str) -> Option<Claims> {
        self.tokens.verify_token(token)
    }
}
