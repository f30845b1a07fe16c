//! Event service - lifecycle, listings, reviews and organizer-side bids.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::config::{MAX_RATING, MIN_RATING};
use crate::domain::{
    Bid, Event, EventFilter, EventStatus, EventUpdate, NewEvent, NewReview, RatingSummary, Review,
};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UnitOfWork;
use crate::types::PaginationParams;

/// Event service trait for dependency injection.
#[async_trait]
pub trait EventService: Send + Sync {
    /// Create an event in draft status
    async fn create_event(&self, data: NewEvent) -> AppResult<Event>;

    /// Fetch one event with its rating summary.
    ///
    /// Unpublished events are only visible to their organizer and to
    /// admins; everyone else gets NotFound rather than a hint that
    /// the event exists.
    async fn get_event(
        &self,
        id: Uuid,
        viewer: Option<(Uuid, bool)>,
    ) -> AppResult<(Event, RatingSummary)>;

    /// Update an event as organizer or admin. A non-admin edit of a
    /// published event sends it back to review (pending).
    async fn update_event(
        &self,
        id: Uuid,
        actor_id: Uuid,
        is_admin: bool,
        changes: EventUpdate,
    ) -> AppResult<Event>;

    /// Submit a draft for review (draft -> pending)
    async fn submit_event(&self, id: Uuid, actor_id: Uuid) -> AppResult<Event>;

    /// Delete an event as organizer or admin
    async fn delete_event(&self, id: Uuid, actor_id: Uuid, is_admin: bool) -> AppResult<()>;

    /// Public listing: published events only
    async fn list_public(
        &self,
        category_slug: Option<String>,
        filter: EventFilter,
        page: PaginationParams,
    ) -> AppResult<(Vec<Event>, u64)>;

    /// Admin listing across all statuses
    async fn list_admin(
        &self,
        filter: EventFilter,
        page: PaginationParams,
    ) -> AppResult<(Vec<Event>, u64)>;

    /// Events of one organizer
    async fn list_by_organizer(&self, organizer_id: Uuid) -> AppResult<Vec<Event>>;

    /// Approve a pending event (pending -> published)
    async fn approve_event(&self, id: Uuid) -> AppResult<Event>;

    /// Reject a pending event (pending -> rejected)
    async fn reject_event(&self, id: Uuid) -> AppResult<Event>;

    /// Leave a review on a published event
    async fn add_review(&self, data: NewReview) -> AppResult<Review>;

    /// Paginated reviews of an event
    async fn list_reviews(
        &self,
        event_id: Uuid,
        page: PaginationParams,
    ) -> AppResult<(Vec<Review>, u64)>;

    /// Bids placed on an event, for its organizer or an admin
    async fn list_event_bids(
        &self,
        event_id: Uuid,
        actor_id: Uuid,
        is_admin: bool,
    ) -> AppResult<Vec<Bid>>;

    /// Accept one bid and reject the competing pending bids
    async fn accept_bid(
        &self,
        event_id: Uuid,
        bid_id: Uuid,
        actor_id: Uuid,
        is_admin: bool,
    ) -> AppResult<Bid>;
}

/// Concrete implementation of EventService using Unit of Work.
pub struct EventManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> EventManager<U> {
    /// Create new event service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }

    async fn require_event(&self, id: Uuid) -> AppResult<Event> {
        self.uow.events().find_by_id(id).await?.ok_or_not_found()
    }

    async fn require_owned_event(
        &self,
        id: Uuid,
        actor_id: Uuid,
        is_admin: bool,
    ) -> AppResult<Event> {
        let event = self.require_event(id).await?;
        if event.organizer_id != actor_id && !is_admin {
            return Err(AppError::Forbidden);
        }
        Ok(event)
    }

    async fn validate_category(&self, category_id: Uuid) -> AppResult<()> {
        self.uow
            .categories()
            .find_by_id(category_id)
            .await?
            .ok_or_else(|| AppError::BadRequest("Unknown category".to_string()))?;
        Ok(())
    }
}

fn validate_schedule_bounds(data: &NewEvent) -> AppResult<()> {
    if let Some(ends_at) = data.ends_at {
        if ends_at < data.starts_at {
            return Err(AppError::validation("Event cannot end before it starts"));
        }
    }
    if data.capacity <= 0 {
        return Err(AppError::validation("Capacity must be positive"));
    }
    if data.price < 0 {
        return Err(AppError::validation("Price cannot be negative"));
    }
    Ok(())
}

#[async_trait]
impl<U: UnitOfWork> EventService for EventManager<U> {
    async fn create_event(&self, data: NewEvent) -> AppResult<Event> {
        validate_schedule_bounds(&data)?;
        self.validate_category(data.category_id).await?;
        self.uow.events().create(data).await
    }

    async fn get_event(
        &self,
        id: Uuid,
        viewer: Option<(Uuid, bool)>,
    ) -> AppResult<(Event, RatingSummary)> {
        let event = self.require_event(id).await?;
        if !event.visible_to(viewer) {
            return Err(AppError::NotFound);
        }

        let rating = self.uow.reviews().stats_for_event(id).await?;
        Ok((event, rating))
    }

    async fn update_event(
        &self,
        id: Uuid,
        actor_id: Uuid,
        is_admin: bool,
        changes: EventUpdate,
    ) -> AppResult<Event> {
        let event = self.require_owned_event(id, actor_id, is_admin).await?;

        if let Some(category_id) = changes.category_id {
            self.validate_category(category_id).await?;
        }

        let updated = self.uow.events().update(id, changes).await?;

        // Published content changes go back through review
        if event.status == EventStatus::Published && !is_admin {
            return self.uow.events().set_status(id, EventStatus::Pending).await;
        }

        Ok(updated)
    }

    async fn submit_event(&self, id: Uuid, actor_id: Uuid) -> AppResult<Event> {
        let event = self.require_owned_event(id, actor_id, false).await?;

        if event.status != EventStatus::Draft {
            return Err(AppError::BadRequest(format!(
                "Only draft events can be submitted (current status: {})",
                event.status
            )));
        }

        self.uow.events().set_status(id, EventStatus::Pending).await
    }

    async fn delete_event(&self, id: Uuid, actor_id: Uuid, is_admin: bool) -> AppResult<()> {
        self.require_owned_event(id, actor_id, is_admin).await?;
        self.uow.events().delete(id).await
    }

    async fn list_public(
        &self,
        category_slug: Option<String>,
        mut filter: EventFilter,
        page: PaginationParams,
    ) -> AppResult<(Vec<Event>, u64)> {
        filter.status = Some(EventStatus::Published);

        if let Some(slug) = category_slug {
            match self.uow.categories().find_by_slug(&slug).await? {
                Some(category) => filter.category_id = Some(category.id),
                // Unknown category slug matches nothing
                None => return Ok((Vec::new(), 0)),
            }
        }

        self.uow.events().list(&filter, &page).await
    }

    async fn list_admin(
        &self,
        filter: EventFilter,
        page: PaginationParams,
    ) -> AppResult<(Vec<Event>, u64)> {
        self.uow.events().list(&filter, &page).await
    }

    async fn list_by_organizer(&self, organizer_id: Uuid) -> AppResult<Vec<Event>> {
        self.uow.events().list_by_organizer(organizer_id).await
    }

    async fn approve_event(&self, id: Uuid) -> AppResult<Event> {
        let event = self.require_event(id).await?;
        if event.status != EventStatus::Pending {
            return Err(AppError::BadRequest(format!(
                "Only pending events can be approved (current status: {})",
                event.status
            )));
        }

        self.uow.events().set_status(id, EventStatus::Published).await
    }

    async fn reject_event(&self, id: Uuid) -> AppResult<Event> {
        let event = self.require_event(id).await?;
        if event.status != EventStatus::Pending {
            return Err(AppError::BadRequest(format!(
                "Only pending events can be rejected (current status: {})",
                event.status
            )));
        }

        self.uow.events().set_status(id, EventStatus::Rejected).await
    }

    async fn add_review(&self, data: NewReview) -> AppResult<Review> {
        if !(MIN_RATING..=MAX_RATING).contains(&data.rating) {
            return Err(AppError::validation(format!(
                "Rating must be between {} and {}",
                MIN_RATING, MAX_RATING
            )));
        }

        let event = self.require_event(data.event_id).await?;

        if event.status != EventStatus::Published {
            return Err(AppError::BadRequest(
                "Only published events can be reviewed".to_string(),
            ));
        }
        if event.organizer_id == data.author_id {
            return Err(AppError::conflict("You cannot review your own event"));
        }
        if self
            .uow
            .reviews()
            .find_by_event_and_author(data.event_id, data.author_id)
            .await?
            .is_some()
        {
            return Err(AppError::conflict("You already reviewed this event"));
        }

        self.uow.reviews().create(data).await
    }

    async fn list_reviews(
        &self,
        event_id: Uuid,
        page: PaginationParams,
    ) -> AppResult<(Vec<Review>, u64)> {
        self.require_event(event_id).await?;
        self.uow.reviews().list_by_event(event_id, &page).await
    }

    async fn list_event_bids(
        &self,
        event_id: Uuid,
        actor_id: Uuid,
        is_admin: bool,
    ) -> AppResult<Vec<Bid>> {
        self.require_owned_event(event_id, actor_id, is_admin).await?;
        self.uow.bids().list_by_event(event_id).await
    }

    async fn accept_bid(
        &self,
        event_id: Uuid,
        bid_id: Uuid,
        actor_id: Uuid,
        is_admin: bool,
    ) -> AppResult<Bid> {
        self.require_owned_event(event_id, actor_id, is_admin).await?;
        self.uow.award_bid(event_id, bid_id).await
    }
}
