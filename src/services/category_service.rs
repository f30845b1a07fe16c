//! Category service - public listing and admin management.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{slugify, Category};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

/// Category service trait for dependency injection.
#[async_trait]
pub trait CategoryService: Send + Sync {
    /// List all categories
    async fn list_categories(&self) -> AppResult<Vec<Category>>;

    /// Get a single category
    async fn get_category(&self, id: Uuid) -> AppResult<Category>;

    /// Create a category; slug is derived from the name when omitted
    async fn create_category(
        &self,
        name: String,
        slug: Option<String>,
        description: Option<String>,
    ) -> AppResult<Category>;

    /// Update category fields
    async fn update_category(
        &self,
        id: Uuid,
        name: Option<String>,
        slug: Option<String>,
        description: Option<Option<String>>,
    ) -> AppResult<Category>;

    /// Delete a category; fails while events still reference it
    async fn delete_category(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of CategoryService using Unit of Work.
pub struct CategoryManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> CategoryManager<U> {
    /// Create new category service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }

    async fn ensure_unique(&self, name: &str, slug: &str, exclude: Option<Uuid>) -> AppResult<()> {
        if let Some(existing) = self.uow.categories().find_by_name(name).await? {
            if Some(existing.id) != exclude {
                return Err(AppError::conflict("A category with this name already exists"));
            }
        }
        if let Some(existing) = self.uow.categories().find_by_slug(slug).await? {
            if Some(existing.id) != exclude {
                return Err(AppError::conflict("A category with this slug already exists"));
            }
        }
        Ok(())
    }
}

#[async_trait]
impl<U: UnitOfWork> CategoryService for CategoryManager<U> {
    async fn list_categories(&self) -> AppResult<Vec<Category>> {
        self.uow.categories().list().await
    }

    async fn get_category(&self, id: Uuid) -> AppResult<Category> {
        self.uow
            .categories()
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound)
    }

    async fn create_category(
        &self,
        name: String,
        slug: Option<String>,
        description: Option<String>,
    ) -> AppResult<Category> {
        let slug = slug.unwrap_or_else(|| slugify(&name));
        if slug.is_empty() {
            return Err(AppError::validation("Category slug cannot be empty"));
        }

        self.ensure_unique(&name, &slug, None).await?;
        self.uow.categories().create(name, slug, description).await
    }

    async fn update_category(
        &self,
        id: Uuid,
        name: Option<String>,
        slug: Option<String>,
        description: Option<Option<String>>,
    ) -> AppResult<Category> {
        let current = self
            .uow
            .categories()
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound)?;

        let next_name = name.clone().unwrap_or_else(|| current.name.clone());
        let next_slug = slug.clone().unwrap_or_else(|| current.slug.clone());
        self.ensure_unique(&next_name, &next_slug, Some(id)).await?;

        self.uow
            .categories()
            .update(id, name, slug, description)
            .await
    }

    async fn delete_category(&self, id: Uuid) -> AppResult<()> {
        self.uow
            .categories()
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound)?;

        let in_use = self.uow.events().count_by_category(id).await?;
        if in_use > 0 {
            return Err(AppError::conflict(format!(
                "Category is still used by {} event(s)",
                in_use
            )));
        }

        self.uow.categories().delete(id).await
    }
}
