//! User handlers.

use axum::{
    extract::{Extension, Path, State},
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::{require_admin, CurrentUser};
use crate::api::AppState;
use crate::domain::{ReviewResponse, UserResponse};
use crate::errors::AppResult;

/// Profile update request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateProfileRequest {
    /// New display name
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    #[schema(example = "Jane Doe")]
    pub name: Option<String>,
    /// Current password, required when changing the password
    pub current_password: Option<String>,
    /// New password (minimum 8 characters)
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub new_password: Option<String>,
}

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/me", get(get_current_user).put(update_profile))
        .route("/:id", get(get_user))
        .route("/:id/reviews", get(list_user_reviews))
}

/// Get current authenticated user
#[utoipa::path(
    get,
    path = "/api/users/me",
    tag = "Users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current user profile", body = UserResponse),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_current_user(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
) -> AppResult<Json<UserResponse>> {
    // Try cache first
    if let Some(user) = state.cache.get_user(&current_user.id).await? {
        return Ok(Json(UserResponse::from(user)));
    }

    // Cache miss - fetch from service
    let user = state.user_service.get_user(current_user.id).await?;

    // Cache for future requests
    state.cache.set_user(&user).await?;

    Ok(Json(UserResponse::from(user)))
}

/// Update own profile
#[utoipa::path(
    put,
    path = "/api/users/me",
    tag = "Users",
    security(("bearer_auth" = [])),
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Profile updated", body = UserResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized or wrong current password")
    )
)]
pub async fn update_profile(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UpdateProfileRequest>,
) -> AppResult<Json<UserResponse>> {
    let user = state
        .user_service
        .update_profile(
            current_user.id,
            payload.name,
            payload.current_password,
            payload.new_password,
        )
        .await?;

    // Keep the cached profile in sync
    state.cache.set_user(&user).await?;

    Ok(Json(UserResponse::from(user)))
}

/// Get user by ID (own profile or admin)
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User profile", body = UserResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Can only view own profile unless admin"),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<UserResponse>> {
    // Users can only view their own profile unless admin
    if current_user.id != id {
        require_admin(&current_user)?;
    }

    if let Some(user) = state.cache.get_user(&id).await? {
        return Ok(Json(UserResponse::from(user)));
    }

    let user = state.user_service.get_user(id).await?;
    state.cache.set_user(&user).await?;

    Ok(Json(UserResponse::from(user)))
}

/// Reviews written by a user (self or admin)
#[utoipa::path(
    get,
    path = "/api/users/{id}/reviews",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Reviews written by the user", body = Vec<ReviewResponse>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "User not found")
    )
)]
pub async fn list_user_reviews(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Vec<ReviewResponse>>> {
    if current_user.id != id {
        require_admin(&current_user)?;
    }

    let reviews = state.user_service.list_user_reviews(id).await?;
    Ok(Json(reviews.into_iter().map(ReviewResponse::from).collect()))
}
