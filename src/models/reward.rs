// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Reward catalog model.

use serde::{Deserialize, Serialize};

use crate::models::{Category, DocumentId};

/// Reward stored in the `rewards` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reward {
    pub id: DocumentId,
    pub title: String,
    pub description: String,
    pub points_cost: i64,
    /// Minimum tier required to redeem
    pub category: Category,
    #[serde(default = "default_available")]
    pub available: bool,
    /// Emoji or image URL
    pub image: String,
    /// Where the reward is collected (e.g. "Cafetín", "Librería")
    pub location: String,
}

fn default_available() -> bool {
    true
}
