//! Authentication flow tests over the in-memory Unit of Work.

mod common;

use common::{seed_user, MemUow};
use eventra::config::Config;
use eventra::domain::UserRole;
use eventra::errors::AppError;
use eventra::services::{AuthService, Authenticator};

fn authenticator(uow: std::sync::Arc<MemUow>) -> Authenticator<MemUow> {
    Authenticator::new(uow, Config::for_tests())
}

#[tokio::test]
async fn test_register_defaults_to_user_role() {
    let uow = MemUow::new();
    let auth = authenticator(uow.clone());

    let user = auth
        .register(
            "new@example.com".to_string(),
            "password123".to_string(),
            "New User".to_string(),
            None,
        )
        .await
        .unwrap();

    assert_eq!(user.role, UserRole::User);
    assert_ne!(user.password_hash, "password123");
}

#[tokio::test]
async fn test_register_vendor_role() {
    let uow = MemUow::new();
    let auth = authenticator(uow.clone());

    let user = auth
        .register(
            "vendor@example.com".to_string(),
            "password123".to_string(),
            "Vendor".to_string(),
            Some("vendor".to_string()),
        )
        .await
        .unwrap();

    assert_eq!(user.role, UserRole::Vendor);
}

#[tokio::test]
async fn test_register_rejects_admin_role() {
    let uow = MemUow::new();
    let auth = authenticator(uow.clone());

    let result = auth
        .register(
            "sneaky@example.com".to_string(),
            "password123".to_string(),
            "Sneaky".to_string(),
            Some("admin".to_string()),
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
}

#[tokio::test]
async fn test_register_rejects_duplicate_email() {
    let uow = MemUow::new();
    let auth = authenticator(uow.clone());

    auth.register(
        "dup@example.com".to_string(),
        "password123".to_string(),
        "First".to_string(),
        None,
    )
    .await
    .unwrap();

    let result = auth
        .register(
            "dup@example.com".to_string(),
            "password456".to_string(),
            "Second".to_string(),
            None,
        )
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
}

#[tokio::test]
async fn test_register_rejects_soft_deleted_email() {
    let uow = MemUow::new();
    let auth = authenticator(uow.clone());

    let user = seed_user(&uow.store(), UserRole::User);
    uow.store()
        .users
        .lock()
        .unwrap()
        .iter_mut()
        .find(|u| u.id == user.id)
        .unwrap()
        .deleted_at = Some(chrono::Utc::now());

    let result = auth
        .register(
            user.email.clone(),
            "password123".to_string(),
            "Again".to_string(),
            None,
        )
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
}

#[tokio::test]
async fn test_register_rejects_short_password() {
    let uow = MemUow::new();
    let auth = authenticator(uow.clone());

    let result = auth
        .register(
            "short@example.com".to_string(),
            "short".to_string(),
            "Short".to_string(),
            None,
        )
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));
}

#[tokio::test]
async fn test_login_issues_verifiable_token() {
    let uow = MemUow::new();
    let auth = authenticator(uow.clone());

    let user = auth
        .register(
            "login@example.com".to_string(),
            "password123".to_string(),
            "Login User".to_string(),
            Some("vendor".to_string()),
        )
        .await
        .unwrap();

    let token = auth
        .login("login@example.com".to_string(), "password123".to_string())
        .await
        .unwrap();

    assert_eq!(token.token_type, "Bearer");

    let claims = auth.verify_token(&token.access_token).unwrap();
    assert_eq!(claims.sub, user.id);
    assert_eq!(claims.role, "vendor");
}

#[tokio::test]
async fn test_login_uniform_failure() {
    let uow = MemUow::new();
    let auth = authenticator(uow.clone());

    auth.register(
        "known@example.com".to_string(),
        "password123".to_string(),
        "Known".to_string(),
        None,
    )
    .await
    .unwrap();

    // Wrong password and unknown email fail identically
    let wrong_password = auth
        .login("known@example.com".to_string(), "wrong-password".to_string())
        .await;
    let unknown_email = auth
        .login("nobody@example.com".to_string(), "password123".to_string())
        .await;

    assert!(matches!(wrong_password, Err(AppError::InvalidCredentials)));
    assert!(matches!(unknown_email, Err(AppError::InvalidCredentials)));
}

#[tokio::test]
async fn test_verify_rejects_garbage() {
    let uow = MemUow::new();
    let auth = authenticator(uow);

    assert!(auth.verify_token("garbage").is_err());
}
