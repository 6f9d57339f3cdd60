//! User model for storage.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::category::{category_from_points, Category};
use crate::models::DocumentId;

/// Kind of point-affecting event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum HistoryType {
    Earned,
    Redeemed,
}

/// One entry of a user's append-only points ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointsHistoryItem {
    pub date: DateTime<Utc>,
    /// Signed delta: positive when earned, negative when redeemed
    pub points: i64,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: HistoryType,
}

/// User profile stored in the `users` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Document ID
    pub id: DocumentId,
    /// Campus student number ("ST" + 5 digits)
    pub student_id: String,
    pub name: String,
    pub email: String,
    /// Mock credential, stored as given and never returned by the API
    pub password: String,
    /// Avatar initials or URL
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub points: i64,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub points_history: Vec<PointsHistoryItem>,
    #[serde(default)]
    pub recycled_kg: f64,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Replace the point balance and recompute the denormalized category.
    pub fn set_points(&mut self, points: i64) {
        self.points = points;
        self.category = category_from_points(points);
    }
}
