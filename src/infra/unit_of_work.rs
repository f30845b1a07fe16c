//! Unit of Work - centralized repository access and transactions.
//!
//! Everyday operations go through the per-aggregate repositories.
//! Flows that must touch several rows atomically (awarding a bid
//! accepts one row and rejects its competitors) run here inside a
//! single database transaction.

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    AccessMode, ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction,
    EntityTrait, IsolationLevel, QueryFilter, Set, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use super::repositories::entities::service_bid::{self, ActiveModel, Entity as BidEntity};
use super::repositories::{
    BidRepository, BidStore, CategoryRepository, CategoryStore, EventRepository, EventStore,
    ReviewRepository, ReviewStore, UserRepository, UserStore, VendorServiceRepository,
    VendorServiceStore,
};
use crate::domain::{Bid, BidStatus};
use crate::errors::{AppError, AppResult};

/// Unit of Work trait for dependency injection.
///
/// Provides centralized access to all repositories plus the
/// multi-row transactional operations of the marketplace.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    /// Get user repository
    fn users(&self) -> Arc<dyn UserRepository>;

    /// Get category repository
    fn categories(&self) -> Arc<dyn CategoryRepository>;

    /// Get event repository
    fn events(&self) -> Arc<dyn EventRepository>;

    /// Get vendor service repository
    fn services(&self) -> Arc<dyn VendorServiceRepository>;

    /// Get bid repository
    fn bids(&self) -> Arc<dyn BidRepository>;

    /// Get review repository
    fn reviews(&self) -> Arc<dyn ReviewRepository>;

    /// Award a bid atomically: the chosen bid becomes accepted and
    /// every other pending bid on the event is rejected.
    ///
    /// Fails with BadRequest when the bid is not pending, NotFound
    /// when it does not belong to the event.
    async fn award_bid(&self, event_id: Uuid, bid_id: Uuid) -> AppResult<Bid>;
}

/// Concrete implementation of UnitOfWork
pub struct Persistence {
    db: DatabaseConnection,
    user_repo: Arc<UserStore>,
    category_repo: Arc<CategoryStore>,
    event_repo: Arc<EventStore>,
    service_repo: Arc<VendorServiceStore>,
    bid_repo: Arc<BidStore>,
    review_repo: Arc<ReviewStore>,
}

impl Persistence {
    /// Create new UnitOfWork instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            user_repo: Arc::new(UserStore::new(db.clone())),
            category_repo: Arc::new(CategoryStore::new(db.clone())),
            event_repo: Arc::new(EventStore::new(db.clone())),
            service_repo: Arc::new(VendorServiceStore::new(db.clone())),
            bid_repo: Arc::new(BidStore::new(db.clone())),
            review_repo: Arc::new(ReviewStore::new(db.clone())),
            db,
        }
    }

    async fn award_bid_in(
        txn: &DatabaseTransaction,
        event_id: Uuid,
        bid_id: Uuid,
    ) -> AppResult<Bid> {
        let bid = BidEntity::find_by_id(bid_id)
            .filter(service_bid::Column::EventId.eq(event_id))
            .one(txn)
            .await?
            .ok_or(AppError::NotFound)?;

        if bid.status != BidStatus::Pending.as_str() {
            return Err(AppError::BadRequest(
                "Only pending bids can be accepted".to_string(),
            ));
        }

        let now = chrono::Utc::now();

        // Reject the competing pending bids first
        BidEntity::update_many()
            .col_expr(
                service_bid::Column::Status,
                Expr::value(BidStatus::Rejected.as_str()),
            )
            .col_expr(service_bid::Column::UpdatedAt, Expr::value(now))
            .filter(service_bid::Column::EventId.eq(event_id))
            .filter(service_bid::Column::Status.eq(BidStatus::Pending.as_str()))
            .filter(service_bid::Column::Id.ne(bid_id))
            .exec(txn)
            .await
            .map_err(AppError::from)?;

        let mut active: ActiveModel = bid.into();
        active.status = Set(BidStatus::Accepted.to_string());
        active.updated_at = Set(now);

        let model = active.update(txn).await.map_err(AppError::from)?;
        Ok(Bid::from(model))
    }
}

#[async_trait]
impl UnitOfWork for Persistence {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.user_repo.clone()
    }

    fn categories(&self) -> Arc<dyn CategoryRepository> {
        self.category_repo.clone()
    }

    fn events(&self) -> Arc<dyn EventRepository> {
        self.event_repo.clone()
    }

    fn services(&self) -> Arc<dyn VendorServiceRepository> {
        self.service_repo.clone()
    }

    fn bids(&self) -> Arc<dyn BidRepository> {
        self.bid_repo.clone()
    }

    fn reviews(&self) -> Arc<dyn ReviewRepository> {
        self.review_repo.clone()
    }

    async fn award_bid(&self, event_id: Uuid, bid_id: Uuid) -> AppResult<Bid> {
        let txn = self
            .db
            .begin_with_config(
                Some(IsolationLevel::ReadCommitted),
                Some(AccessMode::ReadWrite),
            )
            .await
            .map_err(AppError::from)?;

        match Self::award_bid_in(&txn, event_id, bid_id).await {
            Ok(bid) => {
                txn.commit().await.map_err(AppError::from)?;
                Ok(bid)
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Transaction rollback failed: {}", rollback_err);
                }
                Err(e)
            }
        }
    }
}
