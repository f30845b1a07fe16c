//! Vendor service repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

use super::entities::vendor_service::{self, ActiveModel, Entity as ServiceEntity};
use crate::domain::{NewVendorService, VendorService, VendorServiceUpdate};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Vendor service repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait VendorServiceRepository: Send + Sync {
    /// Find service by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<VendorService>>;

    /// All services of one vendor, newest first
    async fn list_by_vendor(&self, vendor_id: Uuid) -> AppResult<Vec<VendorService>>;

    /// Create a new service offering
    async fn create(&self, data: NewVendorService) -> AppResult<VendorService>;

    /// Apply a partial update to a service
    async fn update(&self, id: Uuid, changes: VendorServiceUpdate) -> AppResult<VendorService>;

    /// Delete a service (its bids cascade)
    async fn delete(&self, id: Uuid) -> AppResult<()>;

    /// Count services of one vendor
    async fn count_by_vendor(&self, vendor_id: Uuid) -> AppResult<u64>;
}

/// Concrete implementation of VendorServiceRepository
pub struct VendorServiceStore {
    db: DatabaseConnection,
}

impl VendorServiceStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl VendorServiceRepository for VendorServiceStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<VendorService>> {
        let result = ServiceEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(VendorService::from))
    }

    async fn list_by_vendor(&self, vendor_id: Uuid) -> AppResult<Vec<VendorService>> {
        let models = ServiceEntity::find()
            .filter(vendor_service::Column::VendorId.eq(vendor_id))
            .order_by_desc(vendor_service::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(VendorService::from).collect())
    }

    async fn create(&self, data: NewVendorService) -> AppResult<VendorService> {
        let now = chrono::Utc::now();
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            vendor_id: Set(data.vendor_id),
            category_id: Set(data.category_id),
            title: Set(data.title),
            description: Set(data.description),
            price_from: Set(data.price_from),
            price_to: Set(data.price_to),
            active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(VendorService::from(model))
    }

    async fn update(&self, id: Uuid, changes: VendorServiceUpdate) -> AppResult<VendorService> {
        let model = ServiceEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: ActiveModel = model.into();

        if let Some(category_id) = changes.category_id {
            active.category_id = Set(category_id);
        }
        if let Some(title) = changes.title {
            active.title = Set(title);
        }
        if let Some(description) = changes.description {
            active.description = Set(description);
        }
        if let Some(price_from) = changes.price_from {
            active.price_from = Set(price_from);
        }
        if let Some(price_to) = changes.price_to {
            active.price_to = Set(price_to);
        }
        if let Some(is_active) = changes.active {
            active.active = Set(is_active);
        }
        active.updated_at = Set(chrono::Utc::now());

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(VendorService::from(model))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = ServiceEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }

    async fn count_by_vendor(&self, vendor_id: Uuid) -> AppResult<u64> {
        ServiceEntity::find()
            .filter(vendor_service::Column::VendorId.eq(vendor_id))
            .count(&self.db)
            .await
            .map_err(AppError::from)
    }
}
