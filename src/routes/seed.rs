// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Sample data initialization route.

use axum::{extract::State, routing::post, Json, Router};
use serde::Serialize;
use std::sync::Arc;

use crate::error::Result;
use crate::services::{init_sample_data, SeedOutcome};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/init-data", post(init_data))
}

#[derive(Serialize)]
pub struct InitDataResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub containers: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rewards: Option<usize>,
}

/// Seed the sample catalog. Safe to call repeatedly.
async fn init_data(State(state): State<Arc<AppState>>) -> Result<Json<InitDataResponse>> {
    let response = match init_sample_data(&state.db).await? {
        SeedOutcome::AlreadyInitialized => InitDataResponse {
            message: "Datos ya inicializados".to_string(),
            containers: None,
            rewards: None,
        },
        SeedOutcome::Seeded {
            containers,
            rewards,
        } => InitDataResponse {
            message: "Datos inicializados correctamente".to_string(),
            containers: Some(containers),
            rewards: Some(rewards),
        },
    };

    Ok(Json(response))
}
