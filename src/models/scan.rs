//! Scan audit record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::DocumentId;

/// One QR scan, stored in the `scans` collection. Append-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scan {
    pub id: DocumentId,
    pub user_id: DocumentId,
    pub container_id: DocumentId,
    pub points_earned: i64,
    pub timestamp: DateTime<Utc>,
}
