// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Reward catalog and redemption routes.

use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::error::{AppError, JsonPayload, Result};
use crate::models::{Category, DocumentId, Reward};
use crate::services::redeem_reward;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/rewards", get(list_rewards))
        .route("/rewards/redeem", post(redeem))
        .route("/rewards/{id}", get(get_reward))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct RewardResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub points_cost: i64,
    pub category: Category,
    pub available: bool,
    pub image: String,
    pub location: String,
}

impl From<Reward> for RewardResponse {
    fn from(r: Reward) -> Self {
        Self {
            id: r.id.to_string(),
            title: r.title,
            description: r.description,
            points_cost: r.points_cost,
            category: r.category,
            available: r.available,
            image: r.image,
            location: r.location,
        }
    }
}

// ─── Catalog ─────────────────────────────────────────────────

#[derive(Deserialize)]
struct RewardsQuery {
    /// Requester's tier; only rewards at or below it are returned
    category: Option<String>,
}

/// Keep the rewards a holder of `category` may redeem, cheapest tiers first.
///
/// An unknown or missing category leaves the catalog unfiltered.
fn filter_catalog(mut rewards: Vec<Reward>, category: Option<&str>) -> Vec<Reward> {
    if let Some(tier) = category.and_then(|c| c.parse::<Category>().ok()) {
        let allowed = tier.at_or_below();
        rewards.retain(|r| allowed.contains(&r.category));
    }

    rewards.sort_by(|a, b| {
        a.category
            .cmp(&b.category)
            .then_with(|| a.points_cost.cmp(&b.points_cost))
            .then_with(|| a.title.cmp(&b.title))
    });
    rewards
}

async fn list_rewards(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RewardsQuery>,
) -> Result<Json<Vec<RewardResponse>>> {
    tracing::debug!(category = ?params.category, "Listing rewards");

    let rewards = filter_catalog(state.db.list_rewards().await?, params.category.as_deref());
    Ok(Json(rewards.into_iter().map(Into::into).collect()))
}

async fn get_reward(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<RewardResponse>> {
    let id: DocumentId = id.parse()?;
    let reward = state
        .db
        .get_reward(&id)
        .await?
        .ok_or_else(AppError::reward_not_found)?;

    Ok(Json(reward.into()))
}

// ─── Redemption ──────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedeemRequest {
    pub user_id: String,
    pub reward_id: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct RedeemResponse {
    pub success: bool,
    pub message: String,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub new_points: i64,
    pub new_category: Category,
}

async fn redeem(
    State(state): State<Arc<AppState>>,
    payload: JsonPayload<RedeemRequest>,
) -> Result<Json<RedeemResponse>> {
    let Json(request) = payload?;
    let user_id: DocumentId = request.user_id.parse()?;
    let reward_id: DocumentId = request.reward_id.parse()?;

    let outcome = redeem_reward(&state.db, &user_id, &reward_id).await?;

    Ok(Json(RedeemResponse {
        success: true,
        message: "Recompensa canjeada exitosamente".to_string(),
        new_points: outcome.new_points,
        new_category: outcome.new_category,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::seed::sample_rewards;

    #[test]
    fn test_filter_catalog_by_tier() {
        let filtered = filter_catalog(sample_rewards(), Some("Plata"));
        assert_eq!(filtered.len(), 6);
        assert!(filtered
            .iter()
            .all(|r| matches!(r.category, Category::Clasico | Category::Plata)));
        // Sorted by tier, then cost
        assert_eq!(filtered[0].title, "Snack Gratis");
        assert_eq!(filtered[5].title, "Vale S/10 Cafetería");
    }

    #[test]
    fn test_filter_catalog_unknown_tier_returns_all() {
        assert_eq!(filter_catalog(sample_rewards(), Some("Bronce")).len(), 13);
        assert_eq!(filter_catalog(sample_rewards(), None).len(), 13);
        assert_eq!(filter_catalog(sample_rewards(), Some("Black")).len(), 13);
        assert_eq!(filter_catalog(sample_rewards(), Some("Clásico")).len(), 3);
    }
}
