// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! QR scan route.

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use validator::Validate;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::error::{JsonPayload, Result};
use crate::models::{Category, DocumentId};
use crate::services::scan_container;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/scan", post(scan))
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ScanRequest {
    pub user_id: String,
    /// Container ID or container name encoded in the QR code
    #[validate(length(min = 1, max = 512))]
    pub qr_code: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ScanResponse {
    pub success: bool,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub points_earned: i64,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub new_points: i64,
    pub new_category: Category,
    pub container_name: String,
    pub kg_recycled: f64,
}

async fn scan(
    State(state): State<Arc<AppState>>,
    payload: JsonPayload<ScanRequest>,
) -> Result<Json<ScanResponse>> {
    let Json(request) = payload?;
    request.validate()?;
    let user_id: DocumentId = request.user_id.parse()?;

    let outcome = scan_container(&state.db, &user_id, &request.qr_code).await?;

    Ok(Json(ScanResponse {
        success: true,
        points_earned: outcome.points_earned,
        new_points: outcome.new_points,
        new_category: outcome.new_category,
        container_name: outcome.container_name,
        kg_recycled: outcome.kg_recycled,
    }))
}
