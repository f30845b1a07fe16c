//! Event repository implementation.
//!
//! Listing queries are driven by `EventFilter`; services compose the
//! filter for public, organizer and admin views.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use super::entities::event::{self, json_from, ActiveModel, Entity as EventEntity};
use crate::domain::{Event, EventFilter, EventStatus, EventUpdate, NewEvent};
use crate::errors::{AppError, AppResult};
use crate::types::PaginationParams;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Event repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Find event by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Event>>;

    /// Create a new event (starts in draft status)
    async fn create(&self, data: NewEvent) -> AppResult<Event>;

    /// Apply a partial update to an event
    async fn update(&self, id: Uuid, changes: EventUpdate) -> AppResult<Event>;

    /// Move an event to a new lifecycle status
    async fn set_status(&self, id: Uuid, status: EventStatus) -> AppResult<Event>;

    /// Hard delete an event (bids and reviews cascade)
    async fn delete(&self, id: Uuid) -> AppResult<()>;

    /// List events matching the filter
    async fn list(
        &self,
        filter: &EventFilter,
        page: &PaginationParams,
    ) -> AppResult<(Vec<Event>, u64)>;

    /// All events of one organizer, newest first
    async fn list_by_organizer(&self, organizer_id: Uuid) -> AppResult<Vec<Event>>;

    /// Count events in a lifecycle status
    async fn count_by_status(&self, status: EventStatus) -> AppResult<u64>;

    /// Count events referencing a category
    async fn count_by_category(&self, category_id: Uuid) -> AppResult<u64>;

    /// Count all events
    async fn count_all(&self) -> AppResult<u64>;
}

/// Concrete implementation of EventRepository
pub struct EventStore {
    db: DatabaseConnection,
}

impl EventStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn apply_filter(filter: &EventFilter) -> sea_orm::Select<EventEntity> {
        let mut query = EventEntity::find();

        if let Some(status) = filter.status {
            query = query.filter(event::Column::Status.eq(status.as_str()));
        }
        if let Some(organizer_id) = filter.organizer_id {
            query = query.filter(event::Column::OrganizerId.eq(organizer_id));
        }
        if let Some(category_id) = filter.category_id {
            query = query.filter(event::Column::CategoryId.eq(category_id));
        }
        if let Some(q) = &filter.q {
            query = query.filter(
                Condition::any()
                    .add(event::Column::Title.contains(q))
                    .add(event::Column::Description.contains(q)),
            );
        }
        if let Some(city) = &filter.city {
            query = query.filter(event::Column::City.eq(city));
        }
        if let Some(from) = filter.from {
            query = query.filter(event::Column::StartsAt.gte(from));
        }
        if let Some(to) = filter.to {
            query = query.filter(event::Column::StartsAt.lte(to));
        }
        if let Some(max_price) = filter.max_price {
            query = query.filter(event::Column::Price.lte(max_price));
        }

        query
    }
}

#[async_trait]
impl EventRepository for EventStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Event>> {
        let result = EventEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Event::from))
    }

    async fn create(&self, data: NewEvent) -> AppResult<Event> {
        let now = chrono::Utc::now();
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            organizer_id: Set(data.organizer_id),
            category_id: Set(data.category_id),
            title: Set(data.title),
            description: Set(data.description),
            venue: Set(data.venue),
            city: Set(data.city),
            starts_at: Set(data.starts_at),
            ends_at: Set(data.ends_at),
            price: Set(data.price),
            capacity: Set(data.capacity),
            status: Set(EventStatus::Draft.to_string()),
            image_url: Set(data.image_url),
            features: Set(json_from(&data.features)),
            faqs: Set(json_from(&data.faqs)),
            schedule: Set(json_from(&data.schedule)),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Event::from(model))
    }

    async fn update(&self, id: Uuid, changes: EventUpdate) -> AppResult<Event> {
        let model = EventEntity::find_by_id(id)
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
        if let Some(venue) = changes.venue {
            active.venue = Set(venue);
        }
        if let Some(city) = changes.city {
            active.city = Set(city);
        }
        if let Some(starts_at) = changes.starts_at {
            active.starts_at = Set(starts_at);
        }
        if let Some(ends_at) = changes.ends_at {
            active.ends_at = Set(ends_at);
        }
        if let Some(price) = changes.price {
            active.price = Set(price);
        }
        if let Some(capacity) = changes.capacity {
            active.capacity = Set(capacity);
        }
        if let Some(image_url) = changes.image_url {
            active.image_url = Set(image_url);
        }
        if let Some(features) = changes.features {
            active.features = Set(json_from(&features));
        }
        if let Some(faqs) = changes.faqs {
            active.faqs = Set(json_from(&faqs));
        }
        if let Some(schedule) = changes.schedule {
            active.schedule = Set(json_from(&schedule));
        }
        active.updated_at = Set(chrono::Utc::now());

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(Event::from(model))
    }

    async fn set_status(&self, id: Uuid, status: EventStatus) -> AppResult<Event> {
        let model = EventEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: ActiveModel = model.into();
        active.status = Set(status.to_string());
        active.updated_at = Set(chrono::Utc::now());

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(Event::from(model))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = EventEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }

    async fn list(
        &self,
        filter: &EventFilter,
        page: &PaginationParams,
    ) -> AppResult<(Vec<Event>, u64)> {
        let query = Self::apply_filter(filter);

        // Public listings read best in chronological order; everything
        // else shows the newest changes first.
        let query = if filter.status == Some(EventStatus::Published) {
            query.order_by_asc(event::Column::StartsAt)
        } else {
            query.order_by_desc(event::Column::CreatedAt)
        };

        let paginator = query.paginate(&self.db, page.limit());
        let total = paginator.num_items().await?;
        let models = paginator.fetch_page(page.zero_indexed_page()).await?;

        Ok((models.into_iter().map(Event::from).collect(), total))
    }

    async fn list_by_organizer(&self, organizer_id: Uuid) -> AppResult<Vec<Event>> {
        let models = EventEntity::find()
            .filter(event::Column::OrganizerId.eq(organizer_id))
            .order_by_desc(event::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Event::from).collect())
    }

    async fn count_by_status(&self, status: EventStatus) -> AppResult<u64> {
        EventEntity::find()
            .filter(event::Column::Status.eq(status.as_str()))
            .count(&self.db)
            .await
            .map_err(AppError::from)
    }

    async fn count_by_category(&self, category_id: Uuid) -> AppResult<u64> {
        EventEntity::find()
            .filter(event::Column::CategoryId.eq(category_id))
            .count(&self.db)
            .await
            .map_err(AppError::from)
    }

    async fn count_all(&self) -> AppResult<u64> {
        EventEntity::find()
            .count(&self.db)
            .await
            .map_err(AppError::from)
    }
}
