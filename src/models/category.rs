// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Loyalty category ladder.
//!
//! Five tiers ordered by point threshold. A user's category is always the
//! highest tier whose threshold does not exceed their current points.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Loyalty tier, lowest to highest.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum Category {
    #[default]
    #[serde(rename = "Clásico", alias = "Clasico")]
    Clasico,
    Plata,
    Oro,
    Diamante,
    Black,
}

impl Category {
    /// The full ladder in ascending order.
    pub const LADDER: [Category; 5] = [
        Category::Clasico,
        Category::Plata,
        Category::Oro,
        Category::Diamante,
        Category::Black,
    ];

    /// Minimum points required to hold this tier.
    pub const fn threshold(self) -> i64 {
        match self {
            Category::Clasico => 0,
            Category::Plata => 100,
            Category::Oro => 300,
            Category::Diamante => 600,
            Category::Black => 1000,
        }
    }

    /// Position of this tier in the ladder (0 = Clásico).
    pub const fn rank(self) -> usize {
        self as usize
    }

    /// Wire name of the tier.
    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Clasico => "Clásico",
            Category::Plata => "Plata",
            Category::Oro => "Oro",
            Category::Diamante => "Diamante",
            Category::Black => "Black",
        }
    }

    /// Whether a holder of this tier meets a `required` minimum tier.
    pub fn allows(self, required: Category) -> bool {
        self.rank() >= required.rank()
    }

    /// This tier and every tier below it.
    pub fn at_or_below(self) -> &'static [Category] {
        &TIERS[..=self.rank()]
    }
}

static TIERS: [Category; 5] = Category::LADDER;

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Clásico" | "Clasico" => Ok(Category::Clasico),
            "Plata" => Ok(Category::Plata),
            "Oro" => Ok(Category::Oro),
            "Diamante" => Ok(Category::Diamante),
            "Black" => Ok(Category::Black),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

/// Highest tier whose threshold is at most `points`.
pub fn category_from_points(points: i64) -> Category {
    Category::LADDER
        .iter()
        .rev()
        .copied()
        .find(|c| points >= c.threshold())
        .unwrap_or(Category::Clasico)
}

/// Progress toward the next unmet tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct NextCategory {
    pub name: Category,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub points_needed: i64,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub current_points: i64,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub total_points: i64,
    /// Percentage of the threshold reached; not clamped.
    pub progress: f64,
}

/// The next threshold still to reach, or `None` once Black is reached.
pub fn next_category_info(points: i64) -> Option<NextCategory> {
    Category::LADDER
        .iter()
        .copied()
        .filter(|c| c.threshold() > 0)
        .find(|c| points < c.threshold())
        .map(|c| {
            let threshold = c.threshold();
            NextCategory {
                name: c,
                points_needed: threshold - points,
                current_points: points,
                total_points: threshold,
                progress: points as f64 / threshold as f64 * 100.0,
            }
        })
}
