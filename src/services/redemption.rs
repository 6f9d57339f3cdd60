// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Reward redemption workflow.

use chrono::Utc;

use crate::db::FirestoreDb;
use crate::error::{AppError, Result};
use crate::models::{Category, DocumentId};
use crate::services::ledger::apply_redemption;

/// Balance after a successful redemption.
#[derive(Debug, Clone)]
pub struct RedemptionOutcome {
    pub new_points: i64,
    pub new_category: Category,
}

/// Redeem `reward_id` for `user_id`.
///
/// Checks, in order: user exists, reward exists, enough points, high enough
/// tier. A refused redemption writes nothing.
pub async fn redeem_reward(
    db: &FirestoreDb,
    user_id: &DocumentId,
    reward_id: &DocumentId,
) -> Result<RedemptionOutcome> {
    let mut user = db
        .get_user(user_id)
        .await?
        .ok_or_else(AppError::user_not_found)?;

    let reward = db
        .get_reward(reward_id)
        .await?
        .ok_or_else(AppError::reward_not_found)?;

    apply_redemption(&mut user, &reward, Utc::now()).map_err(|err| {
        tracing::debug!(
            user_id = %user_id,
            reward_id = %reward_id,
            reason = ?err,
            "Redemption refused"
        );
        err
    })?;

    db.upsert_user(&user).await?;

    tracing::info!(
        user_id = %user_id,
        reward_id = %reward_id,
        cost = reward.points_cost,
        new_points = user.points,
        new_category = %user.category,
        "Reward redeemed"
    );

    Ok(RedemptionOutcome {
        new_points: user.points,
        new_category: user.category,
    })
}
