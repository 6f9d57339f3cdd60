// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models for the application.

pub mod category;
pub mod container;
pub mod id;
pub mod reward;
pub mod scan;
pub mod user;

pub use category::{category_from_points, next_category_info, Category, NextCategory};
pub use container::{Container, ContainerStatus, ContainerType, MapLocation};
pub use id::DocumentId;
pub use reward::Reward;
pub use scan::Scan;
pub use user::{HistoryType, PointsHistoryItem, User};
