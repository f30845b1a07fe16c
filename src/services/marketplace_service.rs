//! Marketplace service - vendor offerings, bidding and the vendor dashboard.

use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

use super::container::parallel;
use crate::domain::{
    Bid, BidResponse, BidStatus, EventStatus, NewBid, NewVendorService, VendorService,
    VendorServiceUpdate,
};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

/// Vendor dashboard aggregates
#[derive(Debug, Serialize, ToSchema)]
pub struct VendorDashboard {
    /// Number of service offerings
    pub services: u64,
    /// Open bids
    pub pending_bids: u64,
    /// Bids won
    pub accepted_bids: u64,
    /// Bids lost
    pub rejected_bids: u64,
    /// Latest bids, newest first
    pub recent_bids: Vec<BidResponse>,
}

/// Number of recent bids shown on the dashboard
const DASHBOARD_RECENT_BIDS: u64 = 5;

/// Marketplace service trait for dependency injection.
#[async_trait]
pub trait MarketplaceService: Send + Sync {
    /// Vendor dashboard aggregates, gathered concurrently
    async fn dashboard(&self, vendor_id: Uuid) -> AppResult<VendorDashboard>;

    /// List own service offerings
    async fn list_services(&self, vendor_id: Uuid) -> AppResult<Vec<VendorService>>;

    /// Create a service offering
    async fn create_service(&self, data: NewVendorService) -> AppResult<VendorService>;

    /// Update an own service offering
    async fn update_service(
        &self,
        id: Uuid,
        actor_id: Uuid,
        is_admin: bool,
        changes: VendorServiceUpdate,
    ) -> AppResult<VendorService>;

    /// Delete an own service offering
    async fn delete_service(&self, id: Uuid, actor_id: Uuid, is_admin: bool) -> AppResult<()>;

    /// Place a bid on a published event
    async fn place_bid(&self, data: NewBid) -> AppResult<Bid>;

    /// List own bids, optionally restricted to a status
    async fn list_bids(&self, vendor_id: Uuid, status: Option<BidStatus>) -> AppResult<Vec<Bid>>;

    /// Withdraw an own pending bid
    async fn withdraw_bid(&self, bid_id: Uuid, vendor_id: Uuid) -> AppResult<Bid>;
}

/// Concrete implementation of MarketplaceService using Unit of Work.
pub struct MarketplaceManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> MarketplaceManager<U> {
    /// Create new marketplace service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }

    async fn require_owned_service(
        &self,
        id: Uuid,
        actor_id: Uuid,
        is_admin: bool,
    ) -> AppResult<VendorService> {
        let service = self
            .uow
            .services()
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound)?;

        if service.vendor_id != actor_id && !is_admin {
            return Err(AppError::Forbidden);
        }

        Ok(service)
    }

    fn validate_price_range(price_from: i64, price_to: i64) -> AppResult<()> {
        if price_from < 0 || price_to < 0 {
            return Err(AppError::validation("Prices cannot be negative"));
        }
        if price_from > price_to {
            return Err(AppError::validation(
                "Lower price bound cannot exceed the upper bound",
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl<U: UnitOfWork> MarketplaceService for MarketplaceManager<U> {
    async fn dashboard(&self, vendor_id: Uuid) -> AppResult<VendorDashboard> {
        let services = self.uow.services();
        let bids = self.uow.bids();

        let (service_count, pending, accepted) = parallel::join3(
            services.count_by_vendor(vendor_id),
            bids.count_by_vendor_and_status(vendor_id, BidStatus::Pending),
            bids.count_by_vendor_and_status(vendor_id, BidStatus::Accepted),
        )
        .await?;

        let (rejected, recent) = parallel::join2(
            bids.count_by_vendor_and_status(vendor_id, BidStatus::Rejected),
            bids.list_recent_by_vendor(vendor_id, DASHBOARD_RECENT_BIDS),
        )
        .await?;

        Ok(VendorDashboard {
            services: service_count,
            pending_bids: pending,
            accepted_bids: accepted,
            rejected_bids: rejected,
            recent_bids: recent.into_iter().map(BidResponse::from).collect(),
        })
    }

    async fn list_services(&self, vendor_id: Uuid) -> AppResult<Vec<VendorService>> {
        self.uow.services().list_by_vendor(vendor_id).await
    }

    async fn create_service(&self, data: NewVendorService) -> AppResult<VendorService> {
        Self::validate_price_range(data.price_from, data.price_to)?;

        self.uow
            .categories()
            .find_by_id(data.category_id)
            .await?
            .ok_or_else(|| AppError::BadRequest("Unknown category".to_string()))?;

        self.uow.services().create(data).await
    }

    async fn update_service(
        &self,
        id: Uuid,
        actor_id: Uuid,
        is_admin: bool,
        changes: VendorServiceUpdate,
    ) -> AppResult<VendorService> {
        let current = self.require_owned_service(id, actor_id, is_admin).await?;

        let price_from = changes.price_from.unwrap_or(current.price_from);
        let price_to = changes.price_to.unwrap_or(current.price_to);
        Self::validate_price_range(price_from, price_to)?;

        if let Some(category_id) = changes.category_id {
            self.uow
                .categories()
                .find_by_id(category_id)
                .await?
                .ok_or_else(|| AppError::BadRequest("Unknown category".to_string()))?;
        }

        self.uow.services().update(id, changes).await
    }

    async fn delete_service(&self, id: Uuid, actor_id: Uuid, is_admin: bool) -> AppResult<()> {
        self.require_owned_service(id, actor_id, is_admin).await?;
        self.uow.services().delete(id).await
    }

    async fn place_bid(&self, data: NewBid) -> AppResult<Bid> {
        if data.amount <= 0 {
            return Err(AppError::validation("Bid amount must be positive"));
        }

        let service = self
            .uow
            .services()
            .find_by_id(data.service_id)
            .await?
            .ok_or(AppError::NotFound)?;

        if service.vendor_id != data.vendor_id {
            return Err(AppError::Forbidden);
        }
        if !service.active {
            return Err(AppError::BadRequest(
                "Inactive services cannot be used to bid".to_string(),
            ));
        }

        let event = self
            .uow
            .events()
            .find_by_id(data.event_id)
            .await?
            .ok_or(AppError::NotFound)?;

        if event.status != EventStatus::Published {
            return Err(AppError::BadRequest(
                "Bids can only be placed on published events".to_string(),
            ));
        }
        if event.organizer_id == data.vendor_id {
            return Err(AppError::conflict("You cannot bid on your own event"));
        }

        if self
            .uow
            .bids()
            .find_pending_for_service(data.event_id, data.service_id)
            .await?
            .is_some()
        {
            return Err(AppError::conflict(
                "This service already has a pending bid on the event",
            ));
        }

        self.uow.bids().create(data).await
    }

    async fn list_bids(&self, vendor_id: Uuid, status: Option<BidStatus>) -> AppResult<Vec<Bid>> {
        self.uow.bids().list_by_vendor(vendor_id, status).await
    }

    async fn withdraw_bid(&self, bid_id: Uuid, vendor_id: Uuid) -> AppResult<Bid> {
        let bid = self
            .uow
            .bids()
            .find_by_id(bid_id)
            .await?
            .ok_or(AppError::NotFound)?;

        if bid.vendor_id != vendor_id {
            return Err(AppError::Forbidden);
        }
        if bid.status != BidStatus::Pending {
            return Err(AppError::BadRequest(
                "Only pending bids can be withdrawn".to_string(),
            ));
        }

        self.uow.bids().set_status(bid_id, BidStatus::Withdrawn).await
    }
}
