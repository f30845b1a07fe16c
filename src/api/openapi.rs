//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{
    admin_handler, ai_handler, auth_handler, category_handler, event_handler, user_handler,
    vendor_handler,
};
use crate::domain::{
    BidResponse, BidStatus, CategoryResponse, EventResponse, EventStatus, Faq, RatingSummary,
    ReviewResponse, ScheduleItem, UserResponse, UserRole, VendorServiceResponse,
};
use crate::services::{AdminDashboard, EventTotals, TokenResponse, VendorDashboard};
use crate::types::MessageResponse;

/// OpenAPI documentation for the Eventra API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Eventra API",
        version = "0.1.0",
        description = "Events marketplace REST backend with Axum, SeaORM and Redis",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        // Authentication endpoints
        auth_handler::register,
        auth_handler::login,
        // User endpoints
        user_handler::get_current_user,
        user_handler::update_profile,
        user_handler::get_user,
        user_handler::list_user_reviews,
        // Event endpoints
        event_handler::list_events,
        event_handler::get_event,
        event_handler::create_event,
        event_handler::my_events,
        event_handler::update_event,
        event_handler::submit_event,
        event_handler::delete_event,
        event_handler::list_reviews,
        event_handler::create_review,
        event_handler::list_event_bids,
        event_handler::accept_bid,
        // Category endpoints
        category_handler::list_categories,
        category_handler::get_category,
        category_handler::create_category,
        category_handler::update_category,
        category_handler::delete_category,
        // Vendor endpoints
        vendor_handler::vendor_dashboard,
        vendor_handler::list_services,
        vendor_handler::create_service,
        vendor_handler::update_service,
        vendor_handler::delete_service,
        vendor_handler::list_bids,
        vendor_handler::place_bid,
        vendor_handler::withdraw_bid,
        // Admin endpoints
        admin_handler::admin_dashboard,
        admin_handler::list_users,
        admin_handler::delete_user,
        admin_handler::restore_user,
        admin_handler::list_all_events,
        admin_handler::approve_event,
        admin_handler::reject_event,
        // AI endpoints
        ai_handler::generate,
    ),
    components(
        schemas(
            // Domain types
            UserRole,
            UserResponse,
            EventStatus,
            EventResponse,
            Faq,
            ScheduleItem,
            RatingSummary,
            CategoryResponse,
            VendorServiceResponse,
            BidStatus,
            BidResponse,
            ReviewResponse,
            // Service types
            TokenResponse,
            VendorDashboard,
            AdminDashboard,
            EventTotals,
            MessageResponse,
            // Request types
            auth_handler::RegisterRequest,
            auth_handler::LoginRequest,
            user_handler::UpdateProfileRequest,
            event_handler::CreateEventRequest,
            event_handler::UpdateEventRequest,
            event_handler::CreateReviewRequest,
            category_handler::CreateCategoryRequest,
            category_handler::UpdateCategoryRequest,
            vendor_handler::CreateServiceRequest,
            vendor_handler::UpdateServiceRequest,
            vendor_handler::PlaceBidRequest,
            ai_handler::GenerateRequest,
            ai_handler::GenerateResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "User registration and login"),
        (name = "Users", description = "Profile management"),
        (name = "Events", description = "Event lifecycle, reviews and organizer-side bids"),
        (name = "Categories", description = "Event and service categories"),
        (name = "Vendor", description = "Vendor services, bids and dashboard"),
        (name = "Admin", description = "Moderation and platform dashboard"),
        (name = "AI", description = "AI-assisted content generation")
    )
)]
pub struct ApiDoc;

/// Security scheme modifier for JWT Bearer authentication
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT token obtained from /api/auth/login"))
                        .build(),
                ),
            );
        }
    }
}
