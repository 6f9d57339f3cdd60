// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Recycling container model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::DocumentId;

/// Position on the campus map, as percentages of the map's width and height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct MapLocation {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum ContainerStatus {
    Operational,
    Maintenance,
}

/// Material accepted by a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum ContainerType {
    #[default]
    Mixed,
    Plastic,
    Paper,
}

/// Container stored in the `containers` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Container {
    pub id: DocumentId,
    pub name: String,
    pub location: MapLocation,
    pub status: ContainerStatus,
    pub address: String,
    #[serde(rename = "type", default)]
    pub kind: ContainerType,
    pub last_maintenance: DateTime<Utc>,
}

impl Container {
    /// Whether the container currently accepts scans.
    pub fn is_operational(&self) -> bool {
        self.status == ContainerStatus::Operational
    }
}
