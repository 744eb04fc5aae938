//! Serve command - connects the database, opens the snapshot store, and
//! runs the HTTP server until shutdown.

use std::sync::Arc;

use tokio::net::TcpListener;

use crate::api::{create_router, AppState};
use crate::cli::args::ServeArgs;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::Database;
use crate::snapshot::SnapshotStore;

pub async fn execute(args: ServeArgs, config: Config) -> AppResult<()> {
    tracing::info!("Starting server...");

    let db = Arc::new(Database::connect(&config).await?);

    let snapshot = Arc::new(SnapshotStore::open(&config.snapshot_dir)?);
    tracing::info!(dir = %config.snapshot_dir, "Snapshot store opened");

    let state = AppState::from_config(db, config, snapshot);
    let router = create_router(state);

    let addr = format!("{}:{}", args.host, args.port);
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind to {}: {}", addr, e)))?;
    tracing::info!("Server running on http://{}", addr);

    axum::serve(listener, router)
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))
}
