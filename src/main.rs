// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Recycle-Rewards API Server
//!
//! Campus recycling rewards: QR scans earn points, points unlock loyalty
//! tiers and rewards.

use recycle_rewards::{
    config::{Config, DatastoreKind},
    db::FirestoreDb,
    AppState,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env()?;
    tracing::info!(
        port = config.port,
        datastore = ?config.datastore,
        "Starting Recycle-Rewards API"
    );

    let db = match config.datastore {
        DatastoreKind::Firestore => FirestoreDb::new(&config.gcp_project_id).await?,
        DatastoreKind::Memory => {
            tracing::warn!("Using in-memory datastore; data is lost on restart");
            FirestoreDb::new_in_memory()
        }
    };

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        db,
    });

    // Build router
    let app = recycle_rewards::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("recycle_rewards=debug,info"));

    tracing_subscriber::registry().with(filter).with(format).init();
}
