//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion and use the Unit of Work for repository
//! access and transaction management.

mod admin_service;
mod auth_service;
mod category_service;
pub mod container;
mod content_service;
mod event_service;
mod marketplace_service;
mod user_service;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use admin_service::{AdminDashboard, AdminManager, AdminService, EventTotals};
pub use auth_service::{AuthService, Authenticator, Claims, TokenResponse};
pub use category_service::{CategoryManager, CategoryService};
pub use content_service::{ContentGenerator, ContentKind, ContentService};
pub use event_service::{EventManager, EventService};
pub use marketplace_service::{MarketplaceManager, MarketplaceService, VendorDashboard};
pub use user_service::{UserManager, UserService};

// Parallel execution utilities
pub use container::parallel;

#[cfg(any(test, feature = "test-utils"))]
pub use container::MockServiceContainer;
