//! Service bid repository implementation.
//!
//! The transactional award flow lives in the unit of work; this
//! repository covers the single-row operations.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

use super::entities::service_bid::{self, ActiveModel, Entity as BidEntity};
use crate::domain::{Bid, BidStatus, NewBid};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Bid repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait BidRepository: Send + Sync {
    /// Find bid by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Bid>>;

    /// Place a new bid (starts pending)
    async fn create(&self, data: NewBid) -> AppResult<Bid>;

    /// All bids of one vendor, optionally restricted to a status
    async fn list_by_vendor(
        &self,
        vendor_id: Uuid,
        status: Option<BidStatus>,
    ) -> AppResult<Vec<Bid>>;

    /// Most recent bids of one vendor
    async fn list_recent_by_vendor(&self, vendor_id: Uuid, limit: u64) -> AppResult<Vec<Bid>>;

    /// All bids on one event
    async fn list_by_event(&self, event_id: Uuid) -> AppResult<Vec<Bid>>;

    /// Move a bid to a new status
    async fn set_status(&self, id: Uuid, status: BidStatus) -> AppResult<Bid>;

    /// Find a pending bid for a (event, service) pair
    async fn find_pending_for_service(
        &self,
        event_id: Uuid,
        service_id: Uuid,
    ) -> AppResult<Option<Bid>>;

    /// Count bids of one vendor in a status
    async fn count_by_vendor_and_status(
        &self,
        vendor_id: Uuid,
        status: BidStatus,
    ) -> AppResult<u64>;

    /// Count all bids
    async fn count_all(&self) -> AppResult<u64>;
}

/// Concrete implementation of BidRepository
pub struct BidStore {
    db: DatabaseConnection,
}

impl BidStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BidRepository for BidStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Bid>> {
        let result = BidEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Bid::from))
    }

    async fn create(&self, data: NewBid) -> AppResult<Bid> {
        let now = chrono::Utc::now();
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            event_id: Set(data.event_id),
            service_id: Set(data.service_id),
            vendor_id: Set(data.vendor_id),
            amount: Set(data.amount),
            message: Set(data.message),
            status: Set(BidStatus::Pending.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Bid::from(model))
    }

    async fn list_by_vendor(
        &self,
        vendor_id: Uuid,
        status: Option<BidStatus>,
    ) -> AppResult<Vec<Bid>> {
        let mut query = BidEntity::find().filter(service_bid::Column::VendorId.eq(vendor_id));

        if let Some(status) = status {
            query = query.filter(service_bid::Column::Status.eq(status.as_str()));
        }

        let models = query
            .order_by_desc(service_bid::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Bid::from).collect())
    }

    async fn list_recent_by_vendor(&self, vendor_id: Uuid, limit: u64) -> AppResult<Vec<Bid>> {
        let models = BidEntity::find()
            .filter(service_bid::Column::VendorId.eq(vendor_id))
            .order_by_desc(service_bid::Column::CreatedAt)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Bid::from).collect())
    }

    async fn list_by_event(&self, event_id: Uuid) -> AppResult<Vec<Bid>> {
        let models = BidEntity::find()
            .filter(service_bid::Column::EventId.eq(event_id))
            .order_by_desc(service_bid::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Bid::from).collect())
    }

    async fn set_status(&self, id: Uuid, status: BidStatus) -> AppResult<Bid> {
        let model = BidEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: ActiveModel = model.into();
        active.status = Set(status.to_string());
        active.updated_at = Set(chrono::Utc::now());

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(Bid::from(model))
    }

    async fn find_pending_for_service(
        &self,
        event_id: Uuid,
        service_id: Uuid,
    ) -> AppResult<Option<Bid>> {
        let result = BidEntity::find()
            .filter(service_bid::Column::EventId.eq(event_id))
            .filter(service_bid::Column::ServiceId.eq(service_id))
            .filter(service_bid::Column::Status.eq(BidStatus::Pending.as_str()))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Bid::from))
    }

    async fn count_by_vendor_and_status(
        &self,
        vendor_id: Uuid,
        status: BidStatus,
    ) -> AppResult<u64> {
        BidEntity::find()
            .filter(service_bid::Column::VendorId.eq(vendor_id))
            .filter(service_bid::Column::Status.eq(status.as_str()))
            .count(&self.db)
            .await
            .map_err(AppError::from)
    }

    async fn count_all(&self) -> AppResult<u64> {
        BidEntity::find()
            .count(&self.db)
            .await
            .map_err(AppError::from)
    }
}
