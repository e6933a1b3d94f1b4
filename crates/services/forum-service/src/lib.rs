//! Forum Service Library
//!
//! HTTP backend for forum answers, user administration and profiles.
//! Every operation is guarded by the session behind an access token.

pub mod api;
pub mod config;
pub mod infra;
pub mod repository;
pub mod service;

use std::net::SocketAddr;
use std::sync::Arc;

use clap::Subcommand;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use common::DatabaseConfig;

use crate::api::{create_router, AppState};
use crate::config::ForumServiceConfig;
use crate::infra::Database;

/// Schema migration actions exposed by the `migrate` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum MigrateAction {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Drop every table and rerun all migrations
    Fresh,
}

/// Install the global subscriber filtered by the configured directives.
pub fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(env_filter(log_level))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn env_filter(log_level: &str) -> EnvFilter {
    EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Apply a migration action against the configured database.
pub async fn run_migrations(
    database: &DatabaseConfig,
    action: MigrateAction,
) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::connect_without_migrations(database).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            for (name, applied) in db.migration_status().await? {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}

/// Connect, migrate and serve the forum API until the listener closes.
pub async fn run_server(config: ForumServiceConfig) -> Result<(), Box<dyn std::error::Error>> {
    let db = Arc::new(Database::connect(&config.database).await?);
    let app = create_router(AppState::from_database(db));

    let addr: SocketAddr = config.service.addr().parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(
        service = %config.service.service_name,
        "Forum service listening on {}", addr
    );
    info!("Swagger UI available at http://{}/swagger-ui", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
