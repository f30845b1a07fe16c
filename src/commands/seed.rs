//! Seed command - Creates the admin account and default categories.
//!
//! Idempotent: existing rows are left untouched, so the command can
//! run on every deploy.

use crate::cli::args::SeedArgs;
use crate::config::Config;
use crate::domain::{slugify, Password, UserRole};
use crate::errors::{AppError, AppResult};
use crate::infra::repositories::{
    CategoryRepository, CategoryStore, UserRepository, UserStore,
};
use crate::infra::Database;

/// Default category set for a fresh installation
const DEFAULT_CATEGORIES: &[(&str, &str)] = &[
    ("Live Music", "Concerts, festivals and club nights"),
    ("Corporate Events", "Conferences, offsites and product launches"),
    ("Weddings", "Ceremonies and receptions"),
    ("Catering", "Food and drink services"),
    ("Photography", "Photo and video services"),
];

/// Execute the seed command
pub async fn execute(args: SeedArgs, config: Config) -> AppResult<()> {
    let db = Database::connect_without_migrations(&config)
        .await
        .map_err(|e| AppError::internal(format!("Database connection failed: {}", e)))?;

    db.run_migrations()
        .await
        .map_err(|e| AppError::internal(format!("Migrations failed: {}", e)))?;

    let users = UserStore::new(db.get_connection());
    let categories = CategoryStore::new(db.get_connection());

    // Admin account
    if users
        .find_by_email_with_deleted(&args.admin_email)
        .await?
        .is_some()
    {
        tracing::info!(email = %args.admin_email, "Admin account already exists");
    } else {
        let password_hash = Password::new(&args.admin_password)?.into_string();
        users
            .create(
                args.admin_email.clone(),
                password_hash,
                "Administrator".to_string(),
                UserRole::Admin,
            )
            .await?;
        tracing::info!(email = %args.admin_email, "Admin account created");
        println!("Created admin account: {}", args.admin_email);
    }

    // Default categories
    let mut created = 0;
    for (name, description) in DEFAULT_CATEGORIES {
        let slug = slugify(name);
        if categories.find_by_slug(&slug).await?.is_some() {
            continue;
        }

        categories
            .create(
                name.to_string(),
                slug,
                Some(description.to_string()),
            )
            .await?;
        created += 1;
    }

    println!("Created {} categor(ies).", created);
    Ok(())
}
