// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Point ledger rules.
//!
//! Pure functions that apply a redemption or a scan to an in-memory user.
//! Callers persist the result; nothing here touches the datastore.

use chrono::{DateTime, Utc};
use rand::Rng;
use std::ops::RangeInclusive;

use crate::error::AppError;
use crate::models::{Category, Container, HistoryType, PointsHistoryItem, Reward, User};

/// Points awarded per scan are drawn uniformly from this range.
pub const SCAN_POINTS: RangeInclusive<i64> = 10..=50;

/// Kilograms credited per point earned.
pub const KG_PER_POINT: f64 = 0.1;

/// Why a redemption was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RedemptionError {
    #[error("Puntos insuficientes")]
    InsufficientPoints { available: i64, required: i64 },

    #[error("Categoría insuficiente")]
    InsufficientCategory { current: Category, required: Category },
}

impl From<RedemptionError> for AppError {
    fn from(err: RedemptionError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

/// Deduct a reward's cost from `user`.
///
/// On error the user is left untouched. On success the balance and category
/// are updated and the appended history entry is returned.
pub fn apply_redemption(
    user: &mut User,
    reward: &Reward,
    now: DateTime<Utc>,
) -> Result<PointsHistoryItem, RedemptionError> {
    if user.points < reward.points_cost {
        return Err(RedemptionError::InsufficientPoints {
            available: user.points,
            required: reward.points_cost,
        });
    }

    if !user.category.allows(reward.category) {
        return Err(RedemptionError::InsufficientCategory {
            current: user.category,
            required: reward.category,
        });
    }

    let entry = PointsHistoryItem {
        date: now,
        points: -reward.points_cost,
        description: format!("Canjeado: {}", reward.title),
        kind: HistoryType::Redeemed,
    };

    user.set_points(user.points - reward.points_cost);
    user.points_history.push(entry.clone());

    Ok(entry)
}

/// Credit `points_earned` for recycling at `container`.
///
/// Returns the kilograms credited.
pub fn apply_scan(
    user: &mut User,
    container: &Container,
    points_earned: i64,
    now: DateTime<Utc>,
) -> f64 {
    let kg = recycled_kg_for(points_earned);

    user.set_points(user.points + points_earned);
    user.recycled_kg += kg;
    user.points_history.push(PointsHistoryItem {
        date: now,
        points: points_earned,
        description: format!("Reciclaje en {}", container.name),
        kind: HistoryType::Earned,
    });

    kg
}

/// Kilograms of material represented by a number of points.
pub fn recycled_kg_for(points: i64) -> f64 {
    points as f64 * KG_PER_POINT
}

/// Draw the points for one scan.
pub fn roll_scan_points<R: Rng + ?Sized>(rng: &mut R) -> i64 {
    rng.random_range(SCAN_POINTS)
}
