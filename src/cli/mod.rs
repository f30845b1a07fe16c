//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `serve` - Start the HTTP server
//! - `migrate` - Database migrations
//! - `jobs` - Background job management
//! - `seed` - Seed admin account and default categories

pub mod args;

pub use args::{Cli, Commands};
