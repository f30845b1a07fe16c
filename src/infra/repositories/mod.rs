//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

mod bid_repository;
mod category_repository;
pub(crate) mod entities;
mod event_repository;
mod review_repository;
mod user_repository;
mod vendor_service_repository;

pub use bid_repository::{BidRepository, BidStore};
pub use category_repository::{CategoryRepository, CategoryStore};
pub use event_repository::{EventRepository, EventStore};
pub use review_repository::{ReviewRepository, ReviewStore};
pub use user_repository::{UserRepository, UserStore};
pub use vendor_service_repository::{VendorServiceRepository, VendorServiceStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use bid_repository::MockBidRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use category_repository::MockCategoryRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use event_repository::MockEventRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use review_repository::MockReviewRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use vendor_service_repository::MockVendorServiceRepository;
