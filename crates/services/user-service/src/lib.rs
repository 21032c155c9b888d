//! User Service Library
//!
//! This crate provides user lookup over HTTP, by first name or license
//! plate, on top of a SeaORM-backed repository.

pub mod config;
pub mod http;
pub mod infra;
pub mod repository;
pub mod service;

use std::sync::Arc;

use tracing::info;

use crate::config::UserServiceConfig;
use crate::http::{create_app, AppState};
use crate::infra::Database;

/// Run the HTTP server with the given configuration.
pub async fn run_server(config: UserServiceConfig) -> Result<(), Box<dyn std::error::Error>> {
    let db = if config.run_migrations {
        Database::connect(&config.database).await?
    } else {
        Database::connect_without_migrations(&config.database).await?
    };

    let state = AppState::new(Arc::new(db));
    let app = create_app(state);

    let addr = config.service.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("{} listening on {}", config.service.service_name, addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(
    action: MigrateAction,
    config: UserServiceConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::connect_without_migrations(&config.database).await?;

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
            let status = db.migration_status().await?;
            for (name, applied) in status {
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

/// Migration action type.
#[derive(Debug, Clone, Copy)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}

/// Resolve on Ctrl+C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
