// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Recycling container routes (read-only).

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::error::{AppError, Result};
use crate::models::{Container, ContainerStatus, ContainerType, DocumentId, MapLocation};
use crate::time_utils::format_utc_rfc3339;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/containers", get(list_containers))
        .route("/containers/{id}", get(get_container))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ContainerResponse {
    pub id: String,
    pub name: String,
    pub location: MapLocation,
    pub status: ContainerStatus,
    pub address: String,
    #[serde(rename = "type")]
    pub kind: ContainerType,
    pub last_maintenance: String,
}

impl From<Container> for ContainerResponse {
    fn from(c: Container) -> Self {
        Self {
            id: c.id.to_string(),
            name: c.name,
            location: c.location,
            status: c.status,
            address: c.address,
            kind: c.kind,
            last_maintenance: format_utc_rfc3339(c.last_maintenance),
        }
    }
}

async fn list_containers(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ContainerResponse>>> {
    let containers = state.db.list_containers().await?;
    Ok(Json(containers.into_iter().map(Into::into).collect()))
}

async fn get_container(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ContainerResponse>> {
    let id: DocumentId = id.parse()?;
    let container = state
        .db
        .get_container(&id)
        .await?
        .ok_or_else(AppError::container_not_found)?;

    Ok(Json(container.into()))
}
