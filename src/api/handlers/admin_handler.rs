//! Admin handlers - dashboard, user management and event moderation.

use axum::{
    extract::{Extension, Path, Query, State},
    response::Json,
    routing::{delete, get, post},
    Router,
};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::api::middleware::{require_admin, CurrentUser};
use crate::api::AppState;
use crate::domain::{
    EventFilter, EventResponse, EventStatus, UserFilter, UserResponse, UserRole,
};
use crate::errors::{AppError, AppResult};
use crate::jobs::EmailJob;
use crate::services::AdminDashboard;
use crate::types::{MessageResponse, Paginated, PaginationParams};

/// User listing filters
#[derive(Debug, Deserialize, IntoParams)]
pub struct UserListQuery {
    /// Restrict to a role: user, vendor or admin
    pub role: Option<String>,
    /// Substring match on email or name
    pub q: Option<String>,
    /// Include soft-deleted accounts
    #[serde(default)]
    pub include_deleted: bool,
}

/// Event listing filters (all statuses)
#[derive(Debug, Deserialize, IntoParams)]
pub struct AdminEventListQuery {
    /// Restrict to a status
    pub status: Option<String>,
    /// Restrict to one organizer
    pub organizer: Option<Uuid>,
    /// Substring match on title or description
    pub q: Option<String>,
}

/// Create admin routes
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(admin_dashboard))
        .route("/users", get(list_users))
        .route("/users/:id", delete(delete_user))
        .route("/users/:id/restore", post(restore_user))
        .route("/events", get(list_all_events))
        .route("/events/:id/approve", post(approve_event))
        .route("/events/:id/reject", post(reject_event))
}

/// Platform dashboard aggregates
#[utoipa::path(
    get,
    path = "/api/admin/dashboard",
    tag = "Admin",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Platform dashboard", body = AdminDashboard),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin only")
    )
)]
pub async fn admin_dashboard(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
) -> AppResult<Json<AdminDashboard>> {
    require_admin(&current_user)?;

    let dashboard = state.admin_service.dashboard().await?;
    Ok(Json(dashboard))
}

/// List users with filters and pagination
#[utoipa::path(
    get,
    path = "/api/admin/users",
    tag = "Admin",
    security(("bearer_auth" = [])),
    params(UserListQuery, PaginationParams),
    responses(
        (status = 200, description = "Paginated users"),
        (status = 400, description = "Unknown role filter"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin only")
    )
)]
pub async fn list_users(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Query(query): Query<UserListQuery>,
    Query(page): Query<PaginationParams>,
) -> AppResult<Json<Paginated<UserResponse>>> {
    require_admin(&current_user)?;

    let role = match query.role.as_deref() {
        Some(raw) if crate::config::is_valid_role(raw) => Some(UserRole::from(raw)),
        Some(raw) => {
            return Err(AppError::BadRequest(format!("Unknown role '{}'", raw)));
        }
        None => None,
    };

    let filter = UserFilter {
        role,
        q: query.q,
        include_deleted: query.include_deleted,
    };

    let (users, total) = state.user_service.list_users(filter, page.clone()).await?;

    let data = users.into_iter().map(UserResponse::from).collect();
    Ok(Json(Paginated::new(data, &page, total)))
}

/// Soft delete a user (cannot delete yourself)
#[utoipa::path(
    delete,
    path = "/api/admin/users/{id}",
    tag = "Admin",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User soft-deleted", body = MessageResponse),
        (status = 400, description = "Cannot delete your own account"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin only"),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<MessageResponse>> {
    require_admin(&current_user)?;

    // Prevent self-deletion
    if current_user.id == id {
        return Err(AppError::BadRequest(
            "Cannot delete your own account".to_string(),
        ));
    }

    state.user_service.delete_user(id).await?;

    // Invalidate the cached profile
    state.cache.invalidate_user(&id).await?;

    Ok(Json(MessageResponse::new("User deleted")))
}

/// Restore a soft-deleted user
#[utoipa::path(
    post,
    path = "/api/admin/users/{id}/restore",
    tag = "Admin",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "User ID to restore")
    ),
    responses(
        (status = 200, description = "User restored", body = UserResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin only"),
        (status = 404, description = "User not found or not deleted")
    )
)]
pub async fn restore_user(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<UserResponse>> {
    require_admin(&current_user)?;

    let user = state.user_service.restore_user(id).await?;
    state.cache.set_user(&user).await?;

    Ok(Json(UserResponse::from(user)))
}

/// List events across all statuses
#[utoipa::path(
    get,
    path = "/api/admin/events",
    tag = "Admin",
    security(("bearer_auth" = [])),
    params(AdminEventListQuery, PaginationParams),
    responses(
        (status = 200, description = "Paginated events"),
        (status = 400, description = "Unknown status filter"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin only")
    )
)]
pub async fn list_all_events(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Query(query): Query<AdminEventListQuery>,
    Query(page): Query<PaginationParams>,
) -> AppResult<Json<Paginated<EventResponse>>> {
    require_admin(&current_user)?;

    let status = match query.status.as_deref() {
        Some(raw) => Some(EventStatus::parse(raw).ok_or_else(|| {
            AppError::BadRequest(format!("Unknown event status '{}'", raw))
        })?),
        None => None,
    };

    let filter = EventFilter {
        status,
        organizer_id: query.organizer,
        q: query.q,
        ..Default::default()
    };

    let (events, total) = state.event_service.list_admin(filter, page.clone()).await?;

    let data = events.into_iter().map(EventResponse::from).collect();
    Ok(Json(Paginated::new(data, &page, total)))
}

/// Approve a pending event
#[utoipa::path(
    post,
    path = "/api/admin/events/{id}/approve",
    tag = "Admin",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Event published", body = EventResponse),
        (status = 400, description = "Event is not pending"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin only"),
        (status = 404, description = "Event not found")
    )
)]
pub async fn approve_event(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<EventResponse>> {
    require_admin(&current_user)?;

    let event = state.event_service.approve_event(id).await?;
    notify_organizer(&state, &event.organizer_id, &event.title, true).await;

    Ok(Json(EventResponse::from(event)))
}

/// Reject a pending event
#[utoipa::path(
    post,
    path = "/api/admin/events/{id}/reject",
    tag = "Admin",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Event rejected", body = EventResponse),
        (status = 400, description = "Event is not pending"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin only"),
        (status = 404, description = "Event not found")
    )
)]
pub async fn reject_event(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<EventResponse>> {
    require_admin(&current_user)?;

    let event = state.event_service.reject_event(id).await?;
    notify_organizer(&state, &event.organizer_id, &event.title, false).await;

    Ok(Json(EventResponse::from(event)))
}

/// Enqueue a moderation-result email; lookup failures only skip it.
async fn notify_organizer(state: &AppState, organizer_id: &Uuid, title: &str, approved: bool) {
    if let Ok(organizer) = state.user_service.get_user(*organizer_id).await {
        state
            .mailer
            .send(EmailJob::event_moderated(organizer.email, title, approved))
            .await;
    }
}
