//! Serve command - Starts the HTTP server.

use std::net::SocketAddr;
use std::sync::Arc;

use apalis_sql::postgres::PostgresStorage;
use apalis_sql::sqlx::postgres::PgPoolOptions;

use crate::api::{create_router, AppState};
use crate::cli::args::ServeArgs;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::{Cache, Database};
use crate::jobs::{EmailJob, Mailer};

/// Execute the serve command
pub async fn execute(args: ServeArgs, config: Config) -> AppResult<()> {
    tracing::info!("Starting server...");

    // Initialize database
    let db = Arc::new(Database::connect(&config).await);
    tracing::info!("Database connected");

    // Initialize Redis cache
    let cache = Arc::new(Cache::connect(&config).await);
    tracing::info!("Redis cache connected");

    // Set up the email job queue; the server runs without it when
    // the queue storage cannot be prepared
    let mailer = Arc::new(setup_mailer(&config).await);

    // Create application state with the full service graph
    let app_state = AppState::from_config(db, cache, mailer, config);

    // Build router
    let app = create_router(app_state);

    // Start server
    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind to {}: {}", addr, e)))?;

    tracing::info!("Server running on http://{}", addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    Ok(())
}

/// Prepare the PostgreSQL-backed email queue.
async fn setup_mailer(config: &Config) -> Mailer {
    let pool = match PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await
    {
        Ok(pool) => pool,
        Err(e) => {
            tracing::warn!(error = %e, "Email queue pool unavailable; notifications disabled");
            return Mailer::disabled();
        }
    };

    if let Err(e) = PostgresStorage::setup(&pool).await {
        tracing::warn!(error = %e, "Email queue setup failed; notifications disabled");
        return Mailer::disabled();
    }

    let storage: PostgresStorage<EmailJob> = PostgresStorage::new(pool);
    Mailer::new(storage)
}
