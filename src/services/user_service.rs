//! User service - profile management and admin user operations.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{Password, Review, User, UserFilter};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UnitOfWork;
use crate::types::PaginationParams;

/// User service trait for dependency injection.
///
/// Query operations exclude soft-deleted users unless stated otherwise.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Get active user by ID
    async fn get_user(&self, id: Uuid) -> AppResult<User>;

    /// Update own profile. Changing the password requires the
    /// current one; a mismatch fails with InvalidCredentials.
    async fn update_profile(
        &self,
        id: Uuid,
        name: Option<String>,
        current_password: Option<String>,
        new_password: Option<String>,
    ) -> AppResult<User>;

    /// Admin listing with role/search filters and pagination
    async fn list_users(
        &self,
        filter: UserFilter,
        page: PaginationParams,
    ) -> AppResult<(Vec<User>, u64)>;

    /// Soft delete user (sets deleted_at timestamp)
    async fn delete_user(&self, id: Uuid) -> AppResult<()>;

    /// Restore a soft-deleted user
    async fn restore_user(&self, id: Uuid) -> AppResult<User>;

    /// Reviews written by a user
    async fn list_user_reviews(&self, id: Uuid) -> AppResult<Vec<Review>>;
}

/// Concrete implementation of UserService using Unit of Work.
pub struct UserManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> UserManager<U> {
    /// Create new user service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> UserService for UserManager<U> {
    async fn get_user(&self, id: Uuid) -> AppResult<User> {
        self.uow.users().find_by_id(id).await?.ok_or_not_found()
    }

    async fn update_profile(
        &self,
        id: Uuid,
        name: Option<String>,
        current_password: Option<String>,
        new_password: Option<String>,
    ) -> AppResult<User> {
        let new_hash = match new_password {
            Some(new_password) => {
                let user = self
                    .uow
                    .users()
                    .find_by_id(id)
                    .await?
                    .ok_or(AppError::NotFound)?;

                let current = current_password.ok_or_else(|| {
                    AppError::BadRequest(
                        "Current password is required to set a new password".to_string(),
                    )
                })?;

                if !Password::from_hash(user.password_hash).verify(&current) {
                    return Err(AppError::InvalidCredentials);
                }

                Some(Password::new(&new_password)?.into_string())
            }
            None => None,
        };

        self.uow.users().update_profile(id, name, new_hash).await
    }

    async fn list_users(
        &self,
        filter: UserFilter,
        page: PaginationParams,
    ) -> AppResult<(Vec<User>, u64)> {
        self.uow.users().list(&filter, &page).await
    }

    async fn delete_user(&self, id: Uuid) -> AppResult<()> {
        self.uow.users().delete(id).await
    }

    async fn restore_user(&self, id: Uuid) -> AppResult<User> {
        self.uow.users().restore(id).await
    }

    async fn list_user_reviews(&self, id: Uuid) -> AppResult<Vec<Review>> {
        // 404 for unknown users rather than an empty list
        self.uow
            .users()
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound)?;

        self.uow.reviews().list_by_author(id).await
    }
}
