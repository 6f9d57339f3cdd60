// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User profile routes.

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
use crate::models::{
    next_category_info, Category, DocumentId, HistoryType, NextCategory, PointsHistoryItem,
};
use crate::time_utils::format_utc_rfc3339;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/users/{id}", get(get_user))
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct PointsHistoryEntry {
    pub date: String,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub points: i64,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: HistoryType,
}

impl From<PointsHistoryItem> for PointsHistoryEntry {
    fn from(item: PointsHistoryItem) -> Self {
        Self {
            date: format_utc_rfc3339(item.date),
            points: item.points,
            description: item.description,
            kind: item.kind,
        }
    }
}

/// Full profile, including the derived progress toward the next tier.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct UserProfileResponse {
    pub id: String,
    pub student_id: String,
    pub name: String,
    pub email: String,
    pub avatar: String,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub points: i64,
    pub category: Category,
    pub points_history: Vec<PointsHistoryEntry>,
    pub recycled_kg: f64,
    /// `null` once the top tier is reached
    pub next_category: Option<NextCategory>,
}

async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<UserProfileResponse>> {
    let id: DocumentId = id.parse()?;
    let user = state
        .db
        .get_user(&id)
        .await?
        .ok_or_else(AppError::user_not_found)?;

    Ok(Json(UserProfileResponse {
        id: user.id.to_string(),
        next_category: next_category_info(user.points),
        student_id: user.student_id,
        name: user.name,
        email: user.email,
        avatar: user.avatar,
        points: user.points,
        category: user.category,
        points_history: user.points_history.into_iter().map(Into::into).collect(),
        recycled_kg: user.recycled_kg,
    }))
}
