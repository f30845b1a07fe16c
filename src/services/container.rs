//! Service Container - centralized service construction and access.
//!
//! Builds the full service graph over a shared Unit of Work and
//! exposes it through trait objects, plus small parallel-execution
//! helpers used by the dashboard aggregations.

use std::future::Future;
use std::sync::Arc;

use super::{
    AdminService, AuthService, CategoryService, ContentService, EventService, MarketplaceService,
    UserService,
};
use crate::config::Config;
use crate::infra::Persistence;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Service container trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ServiceContainer: Send + Sync {
    /// Get authentication service
    fn auth(&self) -> Arc<dyn AuthService>;

    /// Get user service
    fn users(&self) -> Arc<dyn UserService>;

    /// Get event service
    fn events(&self) -> Arc<dyn EventService>;

    /// Get category service
    fn categories(&self) -> Arc<dyn CategoryService>;

    /// Get marketplace (vendor) service
    fn marketplace(&self) -> Arc<dyn MarketplaceService>;

    /// Get admin service
    fn admin(&self) -> Arc<dyn AdminService>;

    /// Get AI content generation service
    fn content(&self) -> Arc<dyn ContentService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    auth_service: Arc<dyn AuthService>,
    user_service: Arc<dyn UserService>,
    event_service: Arc<dyn EventService>,
    category_service: Arc<dyn CategoryService>,
    marketplace_service: Arc<dyn MarketplaceService>,
    admin_service: Arc<dyn AdminService>,
    content_service: Arc<dyn ContentService>,
}

impl Services {
    /// Create service container from database connection and config
    pub fn from_connection(db: sea_orm::DatabaseConnection, config: Config) -> Self {
        use super::{
            AdminManager, Authenticator, CategoryManager, ContentGenerator, EventManager,
            MarketplaceManager, UserManager,
        };

        let uow = Arc::new(Persistence::new(db));

        Self {
            auth_service: Arc::new(Authenticator::new(uow.clone(), config.clone())),
            user_service: Arc::new(UserManager::new(uow.clone())),
            event_service: Arc::new(EventManager::new(uow.clone())),
            category_service: Arc::new(CategoryManager::new(uow.clone())),
            marketplace_service: Arc::new(MarketplaceManager::new(uow.clone())),
            admin_service: Arc::new(AdminManager::new(uow)),
            content_service: Arc::new(ContentGenerator::new(&config)),
        }
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    fn users(&self) -> Arc<dyn UserService> {
        self.user_service.clone()
    }

    fn events(&self) -> Arc<dyn EventService> {
        self.event_service.clone()
    }

    fn categories(&self) -> Arc<dyn CategoryService> {
        self.category_service.clone()
    }

    fn marketplace(&self) -> Arc<dyn MarketplaceService> {
        self.marketplace_service.clone()
    }

    fn admin(&self) -> Arc<dyn AdminService> {
        self.admin_service.clone()
    }

    fn content(&self) -> Arc<dyn ContentService> {
        self.content_service.clone()
    }
}

/// Parallel execution utilities for independent operations.
///
/// Dashboard aggregations fan their independent count queries out
/// through these helpers instead of awaiting them one by one.
pub mod parallel {
    use super::*;
    use crate::errors::AppResult;
    use tokio::try_join;

    /// Execute two independent async operations in parallel.
    pub async fn join2<F1, F2, T1, T2>(f1: F1, f2: F2) -> AppResult<(T1, T2)>
    where
        F1: Future<Output = AppResult<T1>>,
        F2: Future<Output = AppResult<T2>>,
    {
        try_join!(f1, f2)
    }

    /// Execute three independent async operations in parallel.
    pub async fn join3<F1, F2, F3, T1, T2, T3>(f1: F1, f2: F2, f3: F3) -> AppResult<(T1, T2, T3)>
    where
        F1: Future<Output = AppResult<T1>>,
        F2: Future<Output = AppResult<T2>>,
        F3: Future<Output = AppResult<T3>>,
    {
        try_join!(f1, f2, f3)
    }

    /// Execute a collection of homogeneous async operations in parallel.
    ///
    /// Results are returned in the same order as the input futures.
    pub async fn join_all<F, T>(futures: Vec<F>) -> AppResult<Vec<T>>
    where
        F: Future<Output = AppResult<T>>,
    {
        let results = futures::future::join_all(futures).await;
        results.into_iter().collect()
    }
}
