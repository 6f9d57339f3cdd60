// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! QR scan workflow: resolve the container, credit the user, log the scan.

use chrono::Utc;

use crate::db::FirestoreDb;
use crate::error::{AppError, Result};
use crate::models::{Category, Container, DocumentId, Scan};
use crate::services::ledger::{apply_scan, roll_scan_points};

/// Outcome of a successful scan.
#[derive(Debug, Clone)]
pub struct ScanOutcome {
    pub points_earned: i64,
    pub new_points: i64,
    pub new_category: Category,
    pub container_name: String,
    pub kg_recycled: f64,
}

/// Resolve a QR payload to a container.
///
/// A well-formed document ID is looked up by ID first; otherwise (or when no
/// container has that ID) the payload is matched against container names.
pub async fn resolve_container(db: &FirestoreDb, qr_code: &str) -> Result<Option<Container>> {
    if let Ok(id) = qr_code.parse::<DocumentId>() {
        if let Some(container) = db.get_container(&id).await? {
            return Ok(Some(container));
        }
    }

    db.find_container_by_name(qr_code).await
}

/// Credit `user_id` for recycling at the container named by `qr_code`.
///
/// Not idempotent: every call awards a fresh random amount.
pub async fn scan_container(
    db: &FirestoreDb,
    user_id: &DocumentId,
    qr_code: &str,
) -> Result<ScanOutcome> {
    let container = resolve_container(db, qr_code)
        .await?
        .ok_or_else(|| AppError::NotFound("Contenedor no válido".to_string()))?;

    if !container.is_operational() {
        tracing::debug!(container_id = %container.id, "Scan refused: container in maintenance");
        return Err(AppError::BadRequest(
            "Contenedor en mantenimiento".to_string(),
        ));
    }

    let mut user = db
        .get_user(user_id)
        .await?
        .ok_or_else(AppError::user_not_found)?;

    let points_earned = roll_scan_points(&mut rand::rng());
    let now = Utc::now();
    let kg_recycled = apply_scan(&mut user, &container, points_earned, now);

    let scan = Scan {
        id: DocumentId::generate(),
        user_id: user.id.clone(),
        container_id: container.id.clone(),
        points_earned,
        timestamp: now,
    };

    db.commit_scan(&user, &scan).await?;

    tracing::info!(
        user_id = %user_id,
        container_id = %container.id,
        points_earned,
        new_points = user.points,
        new_category = %user.category,
        "Scan recorded"
    );

    Ok(ScanOutcome {
        points_earned,
        new_points: user.points,
        new_category: user.category,
        container_name: container.name,
        kg_recycled,
    })
}
