//! Admin service - platform-wide dashboard aggregates.

use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

use super::container::parallel;
use crate::domain::{EventStatus, UserResponse, UserRole};
use crate::errors::AppResult;
use crate::infra::UnitOfWork;

/// Event totals per lifecycle status
#[derive(Debug, Serialize, ToSchema)]
pub struct EventTotals {
    pub draft: u64,
    pub pending: u64,
    pub published: u64,
    pub rejected: u64,
    pub cancelled: u64,
}

/// Admin dashboard aggregates
#[derive(Debug, Serialize, ToSchema)]
pub struct AdminDashboard {
    /// Active accounts
    pub total_users: u64,
    /// Active accounts holding the vendor role
    pub total_vendors: u64,
    pub events: EventTotals,
    pub total_bids: u64,
    pub total_reviews: u64,
    /// Latest registrations, newest first
    pub recent_users: Vec<UserResponse>,
}

/// Number of recent registrations shown on the dashboard
const DASHBOARD_RECENT_USERS: u64 = 5;

/// Admin service trait for dependency injection.
#[async_trait]
pub trait AdminService: Send + Sync {
    /// Platform dashboard aggregates, gathered concurrently
    async fn dashboard(&self) -> AppResult<AdminDashboard>;
}

/// Concrete implementation of AdminService using Unit of Work.
pub struct AdminManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> AdminManager<U> {
    /// Create new admin service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> AdminService for AdminManager<U> {
    async fn dashboard(&self) -> AppResult<AdminDashboard> {
        let users = self.uow.users();
        let events = self.uow.events();
        let bids = self.uow.bids();
        let reviews = self.uow.reviews();

        let (total_users, total_vendors, recent_users) = parallel::join3(
            users.count_active(),
            users.count_by_role(UserRole::Vendor),
            users.list_recent(DASHBOARD_RECENT_USERS),
        )
        .await?;

        let status_counts = parallel::join_all(
            [
                EventStatus::Draft,
                EventStatus::Pending,
                EventStatus::Published,
                EventStatus::Rejected,
                EventStatus::Cancelled,
            ]
            .into_iter()
            .map(|status| events.count_by_status(status))
            .collect(),
        )
        .await?;

        let (total_bids, total_reviews) =
            parallel::join2(bids.count_all(), reviews.count_all()).await?;

        Ok(AdminDashboard {
            total_users,
            total_vendors,
            events: EventTotals {
                draft: status_counts[0],
                pending: status_counts[1],
                published: status_counts[2],
                rejected: status_counts[3],
                cancelled: status_counts[4],
            },
            total_bids,
            total_reviews,
            recent_users: recent_users.into_iter().map(UserResponse::from).collect(),
        })
    }
}
