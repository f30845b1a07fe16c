//! Event domain entity, lifecycle status and listing filters.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Event lifecycle status.
///
/// draft -> pending (organizer submits)
/// pending -> published | rejected (admin review)
/// published -> pending (non-admin edit) | cancelled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Draft,
    Pending,
    Published,
    Rejected,
    Cancelled,
}

impl EventStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Draft => "draft",
            EventStatus::Pending => "pending",
            EventStatus::Published => "published",
            EventStatus::Rejected => "rejected",
            EventStatus::Cancelled => "cancelled",
        }
    }

    /// Parse from the database representation; unknown values are rejected
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "draft" => Some(EventStatus::Draft),
            "pending" => Some(EventStatus::Pending),
            "published" => Some(EventStatus::Published),
            "rejected" => Some(EventStatus::Rejected),
            "cancelled" => Some(EventStatus::Cancelled),
            _ => None,
        }
    }
}

impl std::fmt::Display for EventStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Frequently asked question attached to an event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

/// Single agenda line of an event schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ScheduleItem {
    /// Display time, e.g. "18:30"
    pub time: String,
    pub item: String,
}

/// Event domain entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: Uuid,
    pub organizer_id: Uuid,
    pub category_id: Uuid,
    pub title: String,
    pub description: String,
    pub venue: String,
    pub city: String,
    pub starts_at: DateTime<Utc>,
    pub ends_at: Option<DateTime<Utc>>,
    /// Ticket price in minor currency units (cents)
    pub price: i64,
    pub capacity: i32,
    pub status: EventStatus,
    pub image_url: Option<String>,
    pub features: Vec<String>,
    pub faqs: Vec<Faq>,
    pub schedule: Vec<ScheduleItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Event {
    /// Check whether a user may see this event
    pub fn visible_to(&self, viewer: Option<(Uuid, bool)>) -> bool {
        if self.status == EventStatus::Published {
            return true;
        }
        match viewer {
            Some((id, is_admin)) => is_admin || id == self.organizer_id,
            None => false,
        }
    }
}

/// Data for creating an event
#[derive(Debug, Clone)]
pub struct NewEvent {
    pub organizer_id: Uuid,
    pub category_id: Uuid,
    pub title: String,
    pub description: String,
    pub venue: String,
    pub city: String,
    pub starts_at: DateTime<Utc>,
    pub ends_at: Option<DateTime<Utc>>,
    pub price: i64,
    pub capacity: i32,
    pub image_url: Option<String>,
    pub features: Vec<String>,
    pub faqs: Vec<Faq>,
    pub schedule: Vec<ScheduleItem>,
}

/// Partial update of an event; None fields are left untouched
#[derive(Debug, Clone, Default)]
pub struct EventUpdate {
    pub category_id: Option<Uuid>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub venue: Option<String>,
    pub city: Option<String>,
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<Option<DateTime<Utc>>>,
    pub price: Option<i64>,
    pub capacity: Option<i32>,
    pub image_url: Option<Option<String>>,
    pub features: Option<Vec<String>>,
    pub faqs: Option<Vec<Faq>>,
    pub schedule: Option<Vec<ScheduleItem>>,
}

/// Filter for event listings
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    /// Restrict to a single status (admin listings)
    pub status: Option<EventStatus>,
    /// Restrict to a single organizer
    pub organizer_id: Option<Uuid>,
    /// Restrict to a category
    pub category_id: Option<Uuid>,
    /// Substring match on title or description
    pub q: Option<String>,
    /// Exact city match
    pub city: Option<String>,
    /// Events starting at or after this instant
    pub from: Option<DateTime<Utc>>,
    /// Events starting at or before this instant
    pub to: Option<DateTime<Utc>>,
    /// Maximum ticket price in minor units
    pub max_price: Option<i64>,
}

/// Aggregated review data for an event
#[derive(Debug, Clone, Copy, Default, Serialize, ToSchema)]
pub struct RatingSummary {
    /// Average rating, 0.0 when unreviewed
    pub average: f64,
    pub count: u64,
}

/// Event response returned to clients
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EventResponse {
    pub id: Uuid,
    pub organizer_id: Uuid,
    pub category_id: Uuid,
    #[schema(example = "Summer Jazz Evening")]
    pub title: String,
    pub description: String,
    #[schema(example = "Riverside Hall")]
    pub venue: String,
    #[schema(example = "Rotterdam")]
    pub city: String,
    pub starts_at: DateTime<Utc>,
    pub ends_at: Option<DateTime<Utc>>,
    /// Ticket price in minor currency units
    #[schema(example = 2500)]
    pub price: i64,
    pub capacity: i32,
    #[schema(example = "published")]
    pub status: String,
    pub image_url: Option<String>,
    pub features: Vec<String>,
    pub faqs: Vec<Faq>,
    pub schedule: Vec<ScheduleItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<RatingSummary>,
    pub created_at: DateTime<Utc>,
}

impl From<Event> for EventResponse {
    fn from(event: Event) -> Self {
        Self {
            id: event.id,
            organizer_id: event.organizer_id,
            category_id: event.category_id,
            title: event.title,
            description: event.description,
            venue: event.venue,
            city: event.city,
            starts_at: event.starts_at,
            ends_at: event.ends_at,
            price: event.price,
            capacity: event.capacity,
            status: event.status.to_string(),
            image_url: event.image_url,
            features: event.features,
            faqs: event.faqs,
            schedule: event.schedule,
            rating: None,
            created_at: event.created_at,
        }
    }
}

impl EventResponse {
    /// Attach aggregated review data
    pub fn with_rating(mut self, rating: RatingSummary) -> Self {
        self.rating = Some(rating);
        self
    }
}
