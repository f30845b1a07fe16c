//! Event handlers.
//!
//! Listing and detail routes are public; everything that mutates an
//! event authenticates through the `CurrentUser` extractor.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::domain::{
    BidResponse, EventFilter, EventResponse, EventUpdate, Faq, NewEvent, NewReview, ReviewResponse,
    ScheduleItem,
};
use crate::errors::AppResult;
use crate::jobs::EmailJob;
use crate::types::{Paginated, PaginationParams};

/// Event creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateEventRequest {
    pub category_id: Uuid,
    /// Event title
    #[validate(length(min = 1, message = "Title is required"))]
    #[schema(example = "Summer Jazz Evening")]
    pub title: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    #[validate(length(min = 1, message = "Venue is required"))]
    #[schema(example = "Riverside Hall")]
    pub venue: String,
    #[validate(length(min = 1, message = "City is required"))]
    #[schema(example = "Rotterdam")]
    pub city: String,
    pub starts_at: DateTime<Utc>,
    pub ends_at: Option<DateTime<Utc>>,
    /// Ticket price in minor currency units
    #[schema(example = 2500)]
    pub price: i64,
    #[schema(example = 150)]
    pub capacity: i32,
    pub image_url: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub faqs: Vec<Faq>,
    #[serde(default)]
    pub schedule: Vec<ScheduleItem>,
}

/// Event update request; omitted fields are left untouched
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateEventRequest {
    pub category_id: Option<Uuid>,
    #[validate(length(min = 1, message = "Title cannot be empty"))]
    pub title: Option<String>,
    pub description: Option<String>,
    pub venue: Option<String>,
    pub city: Option<String>,
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
    pub price: Option<i64>,
    pub capacity: Option<i32>,
    pub image_url: Option<String>,
    pub features: Option<Vec<String>>,
    pub faqs: Option<Vec<Faq>>,
    pub schedule: Option<Vec<ScheduleItem>>,
}

/// Review creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateReviewRequest {
    /// Star rating, 1 to 5
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    #[schema(example = 4)]
    pub rating: i16,
    #[validate(length(min = 1, message = "Comment is required"))]
    pub comment: String,
}

/// Public listing filters
#[derive(Debug, Deserialize, IntoParams)]
pub struct EventListQuery {
    /// Category slug
    pub category: Option<String>,
    /// Substring match on title or description
    pub q: Option<String>,
    pub city: Option<String>,
    /// Events starting at or after this instant
    pub from: Option<DateTime<Utc>>,
    /// Events starting at or before this instant
    pub to: Option<DateTime<Utc>>,
    /// Maximum ticket price in minor units
    pub max_price: Option<i64>,
}

/// Create event routes
pub fn event_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_events).post(create_event))
        .route("/mine", get(my_events))
        .route(
            "/:id",
            get(get_event).put(update_event).delete(delete_event),
        )
        .route("/:id/submit", post(submit_event))
        .route("/:id/reviews", get(list_reviews).post(create_review))
        .route("/:id/bids", get(list_event_bids))
        .route("/:id/bids/:bid_id/accept", post(accept_bid))
}

/// List published events
#[utoipa::path(
    get,
    path = "/api/events",
    tag = "Events",
    params(EventListQuery, PaginationParams),
    responses(
        (status = 200, description = "Paginated list of published events")
    )
)]
pub async fn list_events(
    State(state): State<AppState>,
    Query(query): Query<EventListQuery>,
    Query(page): Query<PaginationParams>,
) -> AppResult<Json<Paginated<EventResponse>>> {
    let filter = EventFilter {
        q: query.q,
        city: query.city,
        from: query.from,
        to: query.to,
        max_price: query.max_price,
        ..Default::default()
    };

    let (events, total) = state
        .event_service
        .list_public(query.category, filter, page.clone())
        .await?;

    let data = events.into_iter().map(EventResponse::from).collect();
    Ok(Json(Paginated::new(data, &page, total)))
}

/// Get a single event with rating summary
#[utoipa::path(
    get,
    path = "/api/events/{id}",
    tag = "Events",
    params(
        ("id" = Uuid, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Event detail", body = EventResponse),
        (status = 404, description = "Event not found or not visible")
    )
)]
pub async fn get_event(
    State(state): State<AppState>,
    user: Option<CurrentUser>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<EventResponse>> {
    let viewer = user.map(|u| (u.id, u.is_admin()));
    let (event, rating) = state.event_service.get_event(id, viewer).await?;

    Ok(Json(EventResponse::from(event).with_rating(rating)))
}

/// Create an event (any authenticated user; starts as draft)
#[utoipa::path(
    post,
    path = "/api/events",
    tag = "Events",
    security(("bearer_auth" = [])),
    request_body = CreateEventRequest,
    responses(
        (status = 201, description = "Event created as draft", body = EventResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn create_event(
    State(state): State<AppState>,
    user: CurrentUser,
    ValidatedJson(payload): ValidatedJson<CreateEventRequest>,
) -> AppResult<(StatusCode, Json<EventResponse>)> {
    let event = state
        .event_service
        .create_event(NewEvent {
            organizer_id: user.id,
            category_id: payload.category_id,
            title: payload.title,
            description: payload.description,
            venue: payload.venue,
            city: payload.city,
            starts_at: payload.starts_at,
            ends_at: payload.ends_at,
            price: payload.price,
            capacity: payload.capacity,
            image_url: payload.image_url,
            features: payload.features,
            faqs: payload.faqs,
            schedule: payload.schedule,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(EventResponse::from(event))))
}

/// List own events across all statuses
#[utoipa::path(
    get,
    path = "/api/events/mine",
    tag = "Events",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Own events", body = Vec<EventResponse>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn my_events(
    State(state): State<AppState>,
    user: CurrentUser,
) -> AppResult<Json<Vec<EventResponse>>> {
    let events = state.event_service.list_by_organizer(user.id).await?;
    Ok(Json(events.into_iter().map(EventResponse::from).collect()))
}

/// Update an event (organizer or admin)
#[utoipa::path(
    put,
    path = "/api/events/{id}",
    tag = "Events",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Event ID")
    ),
    request_body = UpdateEventRequest,
    responses(
        (status = 200, description = "Event updated", body = EventResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - not the organizer"),
        (status = 404, description = "Event not found")
    )
)]
pub async fn update_event(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateEventRequest>,
) -> AppResult<Json<EventResponse>> {
    let changes = EventUpdate {
        category_id: payload.category_id,
        title: payload.title,
        description: payload.description,
        venue: payload.venue,
        city: payload.city,
        starts_at: payload.starts_at,
        ends_at: payload.ends_at.map(Some),
        price: payload.price,
        capacity: payload.capacity,
        image_url: payload.image_url.map(Some),
        features: payload.features,
        faqs: payload.faqs,
        schedule: payload.schedule,
    };

    let event = state
        .event_service
        .update_event(id, user.id, user.is_admin(), changes)
        .await?;

    Ok(Json(EventResponse::from(event)))
}

/// Submit a draft event for review
#[utoipa::path(
    post,
    path = "/api/events/{id}/submit",
    tag = "Events",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Event submitted for review", body = EventResponse),
        (status = 400, description = "Event is not a draft"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - not the organizer"),
        (status = 404, description = "Event not found")
    )
)]
pub async fn submit_event(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<EventResponse>> {
    let event = state.event_service.submit_event(id, user.id).await?;
    Ok(Json(EventResponse::from(event)))
}

/// Delete an event (organizer or admin)
#[utoipa::path(
    delete,
    path = "/api/events/{id}",
    tag = "Events",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Event ID")
    ),
    responses(
        (status = 204, description = "Event deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - not the organizer"),
        (status = 404, description = "Event not found")
    )
)]
pub async fn delete_event(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state
        .event_service
        .delete_event(id, user.id, user.is_admin())
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// List reviews of an event
#[utoipa::path(
    get,
    path = "/api/events/{id}/reviews",
    tag = "Events",
    params(
        ("id" = Uuid, Path, description = "Event ID"),
        PaginationParams
    ),
    responses(
        (status = 200, description = "Paginated reviews"),
        (status = 404, description = "Event not found")
    )
)]
pub async fn list_reviews(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(page): Query<PaginationParams>,
) -> AppResult<Json<Paginated<ReviewResponse>>> {
    let (reviews, total) = state.event_service.list_reviews(id, page.clone()).await?;

    let data = reviews.into_iter().map(ReviewResponse::from).collect();
    Ok(Json(Paginated::new(data, &page, total)))
}

/// Review a published event
#[utoipa::path(
    post,
    path = "/api/events/{id}/reviews",
    tag = "Events",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Event ID")
    ),
    request_body = CreateReviewRequest,
    responses(
        (status = 201, description = "Review created", body = ReviewResponse),
        (status = 400, description = "Validation error or event not published"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Event not found"),
        (status = 409, description = "Already reviewed or own event")
    )
)]
pub async fn create_review(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<CreateReviewRequest>,
) -> AppResult<(StatusCode, Json<ReviewResponse>)> {
    let review = state
        .event_service
        .add_review(NewReview {
            event_id: id,
            author_id: user.id,
            rating: payload.rating,
            comment: payload.comment,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(ReviewResponse::from(review))))
}

/// List bids on an event (organizer or admin)
#[utoipa::path(
    get,
    path = "/api/events/{id}/bids",
    tag = "Events",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Bids on the event", body = Vec<BidResponse>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - not the organizer"),
        (status = 404, description = "Event not found")
    )
)]
pub async fn list_event_bids(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Vec<BidResponse>>> {
    let bids = state
        .event_service
        .list_event_bids(id, user.id, user.is_admin())
        .await?;

    Ok(Json(bids.into_iter().map(BidResponse::from).collect()))
}

/// Accept a bid; competing pending bids are rejected atomically
#[utoipa::path(
    post,
    path = "/api/events/{id}/bids/{bid_id}/accept",
    tag = "Events",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Event ID"),
        ("bid_id" = Uuid, Path, description = "Bid ID")
    ),
    responses(
        (status = 200, description = "Bid accepted", body = BidResponse),
        (status = 400, description = "Bid is not pending"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - not the organizer"),
        (status = 404, description = "Event or bid not found")
    )
)]
pub async fn accept_bid(
    State(state): State<AppState>,
    user: CurrentUser,
    Path((id, bid_id)): Path<(Uuid, Uuid)>,
) -> AppResult<Json<BidResponse>> {
    let bid = state
        .event_service
        .accept_bid(id, bid_id, user.id, user.is_admin())
        .await?;

    // Notify the winning vendor; a failed lookup only skips the email
    if let Ok(vendor) = state.user_service.get_user(bid.vendor_id).await {
        if let Ok((event, _)) = state
            .event_service
            .get_event(id, Some((user.id, user.is_admin())))
            .await
        {
            state
                .mailer
                .send(EmailJob::bid_accepted(vendor.email, &event.title))
                .await;
        }
    }

    Ok(Json(BidResponse::from(bid)))
}
