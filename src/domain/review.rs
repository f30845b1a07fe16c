//! Event reviews.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Review domain entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub id: Uuid,
    pub event_id: Uuid,
    pub author_id: Uuid,
    /// Star rating, 1..=5
    pub rating: i16,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

/// Data for creating a review
#[derive(Debug, Clone)]
pub struct NewReview {
    pub event_id: Uuid,
    pub author_id: Uuid,
    pub rating: i16,
    pub comment: String,
}

/// Review response
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ReviewResponse {
    pub id: Uuid,
    pub event_id: Uuid,
    pub author_id: Uuid,
    #[schema(example = 4)]
    pub rating: i16,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

impl From<Review> for ReviewResponse {
    fn from(review: Review) -> Self {
        Self {
            id: review.id,
            event_id: review.event_id,
            author_id: review.author_id,
            rating: review.rating,
            comment: review.comment,
            created_at: review.created_at,
        }
    }
}
