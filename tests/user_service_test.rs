//! User service tests: profile updates, admin listing and soft delete.

mod common;

use common::{seed_user, MemUow};
use eventra::domain::{Password, UserFilter, UserRole};
use eventra::errors::AppError;
use eventra::services::{UserManager, UserService};
use eventra::types::PaginationParams;

#[tokio::test]
async fn test_get_user_not_found() {
    let uow = MemUow::new();
    let service = UserManager::new(uow);

    let result = service.get_user(uuid::Uuid::new_v4()).await;
    assert!(matches!(result, Err(AppError::NotFound)));
}

#[tokio::test]
async fn test_update_name_only() {
    let uow = MemUow::new();
    let user = seed_user(&uow.store(), UserRole::User);
    let service = UserManager::new(uow.clone());

    let updated = service
        .update_profile(user.id, Some("Renamed".to_string()), None, None)
        .await
        .unwrap();

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.password_hash, user.password_hash);
}

#[tokio::test]
async fn test_password_change_requires_current_password() {
    let uow = MemUow::new();
    let user = seed_user(&uow.store(), UserRole::User);

    // Store a real hash so verification can succeed
    let hash = Password::new("password123").unwrap().into_string();
    uow.store()
        .users
        .lock()
        .unwrap()
        .iter_mut()
        .find(|u| u.id == user.id)
        .unwrap()
        .password_hash = hash;

    let service = UserManager::new(uow.clone());

    // Missing current password
    let missing = service
        .update_profile(user.id, None, None, Some("new-password-1".to_string()))
        .await;
    assert!(matches!(missing, Err(AppError::BadRequest(_))));

    // Wrong current password
    let wrong = service
        .update_profile(
            user.id,
            None,
            Some("not-the-password".to_string()),
            Some("new-password-1".to_string()),
        )
        .await;
    assert!(matches!(wrong, Err(AppError::InvalidCredentials)));

    // Correct current password re-hashes
    let updated = service
        .update_profile(
            user.id,
            None,
            Some("password123".to_string()),
            Some("new-password-1".to_string()),
        )
        .await
        .unwrap();

    assert!(Password::from_hash(updated.password_hash).verify("new-password-1"));
}

#[tokio::test]
async fn test_soft_delete_and_restore() {
    let uow = MemUow::new();
    let user = seed_user(&uow.store(), UserRole::User);
    let service = UserManager::new(uow.clone());

    service.delete_user(user.id).await.unwrap();

    // Gone from normal lookups
    assert!(matches!(
        service.get_user(user.id).await,
        Err(AppError::NotFound)
    ));

    // Deleting twice is NotFound
    assert!(matches!(
        service.delete_user(user.id).await,
        Err(AppError::NotFound)
    ));

    let restored = service.restore_user(user.id).await.unwrap();
    assert!(restored.deleted_at.is_none());
    assert!(service.get_user(user.id).await.is_ok());

    // Restoring an active user is an error
    assert!(service.restore_user(user.id).await.is_err());
}

#[tokio::test]
async fn test_admin_listing_filters() {
    let uow = MemUow::new();
    let service = UserManager::new(uow.clone());

    seed_user(&uow.store(), UserRole::User);
    seed_user(&uow.store(), UserRole::Vendor);
    let deleted = seed_user(&uow.store(), UserRole::Vendor);
    service.delete_user(deleted.id).await.unwrap();

    // Active only by default
    let (active, active_total) = service
        .list_users(UserFilter::default(), PaginationParams::default())
        .await
        .unwrap();
    assert_eq!(active_total, 2);
    assert!(active.iter().all(|u| u.deleted_at.is_none()));

    // Role filter
    let (vendors, vendor_total) = service
        .list_users(
            UserFilter {
                role: Some(UserRole::Vendor),
                ..Default::default()
            },
            PaginationParams::default(),
        )
        .await
        .unwrap();
    assert_eq!(vendor_total, 1);
    assert_eq!(vendors[0].role, UserRole::Vendor);

    // Deleted accounts appear on request
    let (_, all_total) = service
        .list_users(
            UserFilter {
                include_deleted: true,
                ..Default::default()
            },
            PaginationParams::default(),
        )
        .await
        .unwrap();
    assert_eq!(all_total, 3);
}

#[tokio::test]
async fn test_user_reviews_requires_existing_user() {
    let uow = MemUow::new();
    let service = UserManager::new(uow);

    let result = service.list_user_reviews(uuid::Uuid::new_v4()).await;
    assert!(matches!(result, Err(AppError::NotFound)));
}
