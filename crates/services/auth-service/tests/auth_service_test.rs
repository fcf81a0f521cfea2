//! Authenticator tests against a mocked user store.

use std::sync::Arc;

use chrono::Duration;

use auth_service_lib::service::{AuthService, Authenticator, SigningSecret, TokenAuthority};
use common::AppError;
use domain::{AgeCategory, Password, User};
use store_service_lib::repository::MockUserRepository;

const SECRET: &str = "test-secret-key-for-testing-only-32chars";

fn tokens() -> TokenAuthority {
    TokenAuthority::new(&SigningSecret::new(SECRET), Duration::hours(24))
}

fn stored_user(email: &str, plain: &str) -> User {
    let hash = Password::new(plain).unwrap().into_string();
    User::new(email.to_string(), hash, 30, Some(AgeCategory::YoungAdult))
}

fn authenticator(repo: MockUserRepository) -> Authenticator {
    Authenticator::new(Arc::new(repo), tokens())
}

#[tokio::test]
async fn test_register_assigns_age_category() {
    let mut repo = MockUserRepository::new();
    repo.expect_count_by_email()
        .withf(|email| email == "new@example.com")
        .times(1)
        .returning(|_| Ok(0));
    repo.expect_create()
        .withf(|new_user| {
            new_user.email == "new@example.com"
                && new_user.age == 40
                && new_user.role == Some(AgeCategory::MiddleAge)
                && new_user.password_hash.starts_with("$2b$10$")
        })
        .times(1)
        .returning(|new_user| {
            Ok(User::new(
                new_user.email,
                new_user.password_hash,
                new_user.age,
                new_user.role,
            ))
        });

    let user = authenticator(repo)
        .register("new@example.com".to_string(), "password123".to_string(), 40)
        .await
        .unwrap();

    assert_eq!(user.email, "new@example.com");
    assert_eq!(user.role, Some(AgeCategory::MiddleAge));
}

#[tokio::test]
async fn test_register_existing_email_conflicts_without_insert() {
    let mut repo = MockUserRepository::new();
    repo.expect_count_by_email().returning(|_| Ok(1));
    repo.expect_create().never();

    let result = authenticator(repo)
        .register("taken@example.com".to_string(), "password123".to_string(), 30)
        .await;

    assert!(matches!(result, Err(AppError::Conflict(entity)) if entity == "User"));
}

#[tokio::test]
async fn test_register_negative_age_rejected() {
    let mut repo = MockUserRepository::new();
    repo.expect_count_by_email().returning(|_| Ok(0));
    repo.expect_create().never();

    let result = authenticator(repo)
        .register("kid@example.com".to_string(), "password123".to_string(), -1)
        .await;

    assert!(matches!(result, Err(AppError::Validation(msg)) if msg == "Invalid age"));
}

#[tokio::test]
async fn test_register_lost_race_surfaces_conflict() {
    let mut repo = MockUserRepository::new();
    repo.expect_count_by_email().returning(|_| Ok(0));
    repo.expect_create()
        .returning(|_| Err(AppError::conflict("User")));

    let result = authenticator(repo)
        .register("race@example.com".to_string(), "password123".to_string(), 20)
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
}

#[tokio::test]
async fn test_login_success_issues_verifiable_token() {
    let user = stored_user("test@example.com", "password123");
    let user_id = user.id;

    let mut repo = MockUserRepository::new();
    repo.expect_find_by_email()
        .withf(|email| email == "test@example.com")
        .returning(move |_| Ok(Some(user.clone())));

    let service = authenticator(repo);
    let result = service
        .login("test@example.com".to_string(), "password123".to_string())
        .await
        .unwrap();

    assert_eq!(result.user.id, user_id);
    assert_eq!(result.expires_in, 86_400);

    let claims = service.verify_token(&result.token).unwrap();
    assert_eq!(claims.sub, user_id);
    assert_eq!(claims.email, "test@example.com");
    assert_eq!(claims.role, Some(AgeCategory::YoungAdult));
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let user = stored_user("test@example.com", "password123");

    let mut known = MockUserRepository::new();
    known
        .expect_find_by_email()
        .returning(move |_| Ok(Some(user.clone())));

    let mut unknown = MockUserRepository::new();
    unknown.expect_find_by_email().returning(|_| Ok(None));

    let wrong_password = authenticator(known)
        .login("test@example.com".to_string(), "wrong".to_string())
        .await
        .unwrap_err();
    let unknown_email = authenticator(unknown)
        .login("nobody@example.com".to_string(), "password123".to_string())
        .await
        .unwrap_err();

    assert!(matches!(wrong_password, AppError::InvalidCredentials));
    assert!(matches!(unknown_email, AppError::InvalidCredentials));
    assert_eq!(wrong_password.to_string(), unknown_email.to_string());
}

#[tokio::test]
async fn test_login_with_corrupt_stored_hash_fails() {
    let mut user = stored_user("test@example.com", "password123");
    user.password_hash = "not-a-bcrypt-hash".to_string();

    let mut repo = MockUserRepository::new();
    repo.expect_find_by_email()
        .returning(move |_| Ok(Some(user.clone())));

    let result = authenticator(repo)
        .login("test@example.com".to_string(), "password123".to_string())
        .await;

    assert!(matches!(result, Err(AppError::InvalidCredentials)));
}

#[test]
fn test_verify_rejects_garbage() {
    let service = authenticator(MockUserRepository::new());
    assert!(service.verify_token("garbage").is_none());
}
