//! Review repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

use super::entities::review::{self, ActiveModel, Entity as ReviewEntity};
use crate::domain::{NewReview, RatingSummary, Review};
use crate::errors::{AppError, AppResult};
use crate::types::PaginationParams;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Review repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Create a review
    async fn create(&self, data: NewReview) -> AppResult<Review>;

    /// Paginated reviews for one event, newest first
    async fn list_by_event(
        &self,
        event_id: Uuid,
        page: &PaginationParams,
    ) -> AppResult<(Vec<Review>, u64)>;

    /// All reviews written by one author
    async fn list_by_author(&self, author_id: Uuid) -> AppResult<Vec<Review>>;

    /// Find the review one author left on one event
    async fn find_by_event_and_author(
        &self,
        event_id: Uuid,
        author_id: Uuid,
    ) -> AppResult<Option<Review>>;

    /// Average rating and review count for an event
    async fn stats_for_event(&self, event_id: Uuid) -> AppResult<RatingSummary>;

    /// Count all reviews
    async fn count_all(&self) -> AppResult<u64>;
}

/// Concrete implementation of ReviewRepository
pub struct ReviewStore {
    db: DatabaseConnection,
}

impl ReviewStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReviewRepository for ReviewStore {
    async fn create(&self, data: NewReview) -> AppResult<Review> {
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            event_id: Set(data.event_id),
            author_id: Set(data.author_id),
            rating: Set(data.rating),
            comment: Set(data.comment),
            created_at: Set(chrono::Utc::now()),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Review::from(model))
    }

    async fn list_by_event(
        &self,
        event_id: Uuid,
        page: &PaginationParams,
    ) -> AppResult<(Vec<Review>, u64)> {
        let paginator = ReviewEntity::find()
            .filter(review::Column::EventId.eq(event_id))
            .order_by_desc(review::Column::CreatedAt)
            .paginate(&self.db, page.limit());

        let total = paginator.num_items().await?;
        let models = paginator.fetch_page(page.zero_indexed_page()).await?;

        Ok((models.into_iter().map(Review::from).collect(), total))
    }

    async fn list_by_author(&self, author_id: Uuid) -> AppResult<Vec<Review>> {
        let models = ReviewEntity::find()
            .filter(review::Column::AuthorId.eq(author_id))
            .order_by_desc(review::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Review::from).collect())
    }

    async fn find_by_event_and_author(
        &self,
        event_id: Uuid,
        author_id: Uuid,
    ) -> AppResult<Option<Review>> {
        let result = ReviewEntity::find()
            .filter(review::Column::EventId.eq(event_id))
            .filter(review::Column::AuthorId.eq(author_id))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Review::from))
    }

    async fn stats_for_event(&self, event_id: Uuid) -> AppResult<RatingSummary> {
        // Ratings are tiny per event; fold the column in memory rather
        // than teaching the query builder aggregate plumbing.
        let ratings: Vec<i16> = ReviewEntity::find()
            .filter(review::Column::EventId.eq(event_id))
            .select_only()
            .column(review::Column::Rating)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        let count = ratings.len() as u64;
        let average = if count == 0 {
            0.0
        } else {
            ratings.iter().map(|r| *r as f64).sum::<f64>() / count as f64
        };

        Ok(RatingSummary { average, count })
    }

    async fn count_all(&self) -> AppResult<u64> {
        ReviewEntity::find()
            .count(&self.db)
            .await
            .map_err(AppError::from)
    }
}
