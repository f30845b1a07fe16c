//! Eventra - Events marketplace REST backend
//!
//! Multi-role marketplace connecting event organizers with service
//! vendors: event lifecycle with admin moderation, vendor offerings
//! and bidding, reviews, dashboards and AI-assisted content
//! generation, served over a JSON REST API.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core business entities and logic
//! - **services**: Application use cases and business logic
//! - **infra**: Infrastructure concerns (database, cache)
//! - **api**: HTTP handlers, middleware, and routes
//! - **jobs**: Background jobs (email notifications)
//! - **types**: Shared types (pagination, responses)
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//!
//! # Seed admin account and default categories
//! cargo run -- seed
//!
//! # Start the email job worker
//! cargo run -- jobs work
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod jobs;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Event, EventStatus, Password, User, UserRole};
pub use errors::{AppError, AppResult};
pub use infra::Cache;
