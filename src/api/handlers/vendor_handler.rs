//! Vendor handlers - dashboard, service offerings and bids.
//!
//! Every route requires the vendor role (admins pass too).

use axum::{
    extract::{Extension, Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::{require_vendor, CurrentUser};
use crate::api::AppState;
use crate::domain::{
    BidResponse, BidStatus, NewBid, NewVendorService, VendorServiceResponse, VendorServiceUpdate,
};
use crate::errors::{AppError, AppResult};
use crate::services::VendorDashboard;

/// Service offering creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateServiceRequest {
    pub category_id: Uuid,
    /// Offering title
    #[validate(length(min = 1, message = "Title is required"))]
    #[schema(example = "Full-service catering")]
    pub title: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    /// Lower price bound in minor currency units
    #[schema(example = 50000)]
    pub price_from: i64,
    /// Upper price bound in minor currency units
    #[schema(example = 250000)]
    pub price_to: i64,
}

/// Service offering update request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateServiceRequest {
    pub category_id: Option<Uuid>,
    #[validate(length(min = 1, message = "Title cannot be empty"))]
    pub title: Option<String>,
    pub description: Option<String>,
    pub price_from: Option<i64>,
    pub price_to: Option<i64>,
    /// Deactivated services cannot be used for new bids
    pub active: Option<bool>,
}

/// Bid placement request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct PlaceBidRequest {
    pub event_id: Uuid,
    pub service_id: Uuid,
    /// Offered amount in minor currency units
    #[schema(example = 120000)]
    pub amount: i64,
    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,
}

/// Bid listing filter
#[derive(Debug, Deserialize, IntoParams)]
pub struct BidListQuery {
    /// Restrict to a status: pending, accepted, rejected or withdrawn
    pub status: Option<String>,
}

/// Create vendor routes
pub fn vendor_routes() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(vendor_dashboard))
        .route("/services", get(list_services).post(create_service))
        .route("/services/:id", axum::routing::put(update_service).delete(delete_service))
        .route("/bids", get(list_bids).post(place_bid))
        .route("/bids/:id/withdraw", post(withdraw_bid))
}

/// Vendor dashboard aggregates
#[utoipa::path(
    get,
    path = "/api/vendor/dashboard",
    tag = "Vendor",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Vendor dashboard", body = VendorDashboard),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Vendor only")
    )
)]
pub async fn vendor_dashboard(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
) -> AppResult<Json<VendorDashboard>> {
    require_vendor(&current_user)?;

    let dashboard = state.marketplace_service.dashboard(current_user.id).await?;
    Ok(Json(dashboard))
}

/// List own service offerings
#[utoipa::path(
    get,
    path = "/api/vendor/services",
    tag = "Vendor",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Own service offerings", body = Vec<VendorServiceResponse>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Vendor only")
    )
)]
pub async fn list_services(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<VendorServiceResponse>>> {
    require_vendor(&current_user)?;

    let services = state
        .marketplace_service
        .list_services(current_user.id)
        .await?;

    Ok(Json(
        services.into_iter().map(VendorServiceResponse::from).collect(),
    ))
}

/// Create a service offering
#[utoipa::path(
    post,
    path = "/api/vendor/services",
    tag = "Vendor",
    security(("bearer_auth" = [])),
    request_body = CreateServiceRequest,
    responses(
        (status = 201, description = "Service created", body = VendorServiceResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Vendor only")
    )
)]
pub async fn create_service(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateServiceRequest>,
) -> AppResult<(StatusCode, Json<VendorServiceResponse>)> {
    require_vendor(&current_user)?;

    let service = state
        .marketplace_service
        .create_service(NewVendorService {
            vendor_id: current_user.id,
            category_id: payload.category_id,
            title: payload.title,
            description: payload.description,
            price_from: payload.price_from,
            price_to: payload.price_to,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(VendorServiceResponse::from(service)),
    ))
}

/// Update an own service offering
#[utoipa::path(
    put,
    path = "/api/vendor/services/{id}",
    tag = "Vendor",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Service ID")
    ),
    request_body = UpdateServiceRequest,
    responses(
        (status = 200, description = "Service updated", body = VendorServiceResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - not the owner"),
        (status = 404, description = "Service not found")
    )
)]
pub async fn update_service(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateServiceRequest>,
) -> AppResult<Json<VendorServiceResponse>> {
    require_vendor(&current_user)?;

    let service = state
        .marketplace_service
        .update_service(
            id,
            current_user.id,
            current_user.is_admin(),
            VendorServiceUpdate {
                category_id: payload.category_id,
                title: payload.title,
                description: payload.description,
                price_from: payload.price_from,
                price_to: payload.price_to,
                active: payload.active,
            },
        )
        .await?;

    Ok(Json(VendorServiceResponse::from(service)))
}

/// Delete an own service offering
#[utoipa::path(
    delete,
    path = "/api/vendor/services/{id}",
    tag = "Vendor",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Service ID")
    ),
    responses(
        (status = 204, description = "Service deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - not the owner"),
        (status = 404, description = "Service not found")
    )
)]
pub async fn delete_service(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    require_vendor(&current_user)?;

    state
        .marketplace_service
        .delete_service(id, current_user.id, current_user.is_admin())
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// List own bids
#[utoipa::path(
    get,
    path = "/api/vendor/bids",
    tag = "Vendor",
    security(("bearer_auth" = [])),
    params(BidListQuery),
    responses(
        (status = 200, description = "Own bids", body = Vec<BidResponse>),
        (status = 400, description = "Unknown status filter"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Vendor only")
    )
)]
pub async fn list_bids(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Query(query): Query<BidListQuery>,
) -> AppResult<Json<Vec<BidResponse>>> {
    require_vendor(&current_user)?;

    let status = match query.status.as_deref() {
        Some(raw) => Some(BidStatus::parse(raw).ok_or_else(|| {
            AppError::BadRequest(format!("Unknown bid status '{}'", raw))
        })?),
        None => None,
    };

    let bids = state
        .marketplace_service
        .list_bids(current_user.id, status)
        .await?;

    Ok(Json(bids.into_iter().map(BidResponse::from).collect()))
}

/// Place a bid on a published event
#[utoipa::path(
    post,
    path = "/api/vendor/bids",
    tag = "Vendor",
    security(("bearer_auth" = [])),
    request_body = PlaceBidRequest,
    responses(
        (status = 201, description = "Bid placed", body = BidResponse),
        (status = 400, description = "Validation error or event not published"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Vendor only"),
        (status = 404, description = "Event or service not found"),
        (status = 409, description = "Duplicate bid or own event")
    )
)]
pub async fn place_bid(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<PlaceBidRequest>,
) -> AppResult<(StatusCode, Json<BidResponse>)> {
    require_vendor(&current_user)?;

    let bid = state
        .marketplace_service
        .place_bid(NewBid {
            event_id: payload.event_id,
            service_id: payload.service_id,
            vendor_id: current_user.id,
            amount: payload.amount,
            message: payload.message,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(BidResponse::from(bid))))
}

/// Withdraw an own pending bid
#[utoipa::path(
    post,
    path = "/api/vendor/bids/{id}/withdraw",
    tag = "Vendor",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Bid ID")
    ),
    responses(
        (status = 200, description = "Bid withdrawn", body = BidResponse),
        (status = 400, description = "Bid is not pending"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - not the owner"),
        (status = 404, description = "Bid not found")
    )
)]
pub async fn withdraw_bid(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<BidResponse>> {
    require_vendor(&current_user)?;

    let bid = state
        .marketplace_service
        .withdraw_bid(id, current_user.id)
        .await?;

    Ok(Json(BidResponse::from(bid)))
}
