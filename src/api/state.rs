//! Application state - Dependency injection container for handlers.

use std::sync::Arc;

use crate::infra::{Cache, Database};
use crate::jobs::Mailer;
use crate::services::{
    AdminService, AuthService, CategoryService, ContentService, EventService, MarketplaceService,
    ServiceContainer, Services, UserService,
};

/// Application state containing all services and infrastructure.
#[derive(Clone)]
pub struct AppState {
    /// Authentication service
    pub auth_service: Arc<dyn AuthService>,
    /// User service
    pub user_service: Arc<dyn UserService>,
    /// Event service
    pub event_service: Arc<dyn EventService>,
    /// Category service
    pub category_service: Arc<dyn CategoryService>,
    /// Marketplace (vendor) service
    pub marketplace_service: Arc<dyn MarketplaceService>,
    /// Admin service
    pub admin_service: Arc<dyn AdminService>,
    /// AI content generation service
    pub content_service: Arc<dyn ContentService>,
    /// Redis cache
    pub cache: Arc<Cache>,
    /// Database connection
    pub database: Arc<Database>,
    /// Email job enqueuer
    pub mailer: Arc<Mailer>,
}

impl AppState {
    /// Create application state from infrastructure and config.
    ///
    /// Builds the full service graph through the service container.
    pub fn from_config(
        database: Arc<Database>,
        cache: Arc<Cache>,
        mailer: Arc<Mailer>,
        config: crate::config::Config,
    ) -> Self {
        let container = Services::from_connection(database.get_connection(), config);

        Self {
            auth_service: container.auth(),
            user_service: container.users(),
            event_service: container.events(),
            category_service: container.categories(),
            marketplace_service: container.marketplace(),
            admin_service: container.admin(),
            content_service: container.content(),
            cache,
            database,
            mailer,
        }
    }
}
