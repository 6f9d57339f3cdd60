// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Firestore integration tests.
//!
//! These tests require the Firestore emulator to be running and
//! FIRESTORE_EMULATOR_HOST to point at it; otherwise they are skipped.

use chrono::Utc;
use recycle_rewards::models::{
    category_from_points, Category, Container, ContainerStatus, ContainerType, DocumentId,
    MapLocation, Reward, Scan, User,
};
use recycle_rewards::services::{redeem_reward, scan_container};

mod common;
use common::test_db;

/// Helper to create a basic test user
fn test_user(points: i64) -> User {
    let id = DocumentId::generate();
    User {
        email: format!("{}@campus.edu", id),
        id,
        student_id: "ST12345".to_string(),
        name: "Test".to_string(),
        password: "password123".to_string(),
        avatar: "T".to_string(),
        points,
        category: category_from_points(points),
        points_history: vec![],
        recycled_kg: 0.0,
        created_at: Utc::now(),
    }
}

fn test_container(status: ContainerStatus) -> Container {
    let id = DocumentId::generate();
    Container {
        name: format!("Contenedor {}", id),
        id,
        location: MapLocation { x: 50.0, y: 50.0 },
        status,
        address: "Patio Central".to_string(),
        kind: ContainerType::Mixed,
        last_maintenance: Utc::now(),
    }
}

fn test_reward(points_cost: i64, category: Category) -> Reward {
    Reward {
        id: DocumentId::generate(),
        title: "Café Gratis".to_string(),
        description: "1 café americano".to_string(),
        points_cost,
        category,
        available: true,
        image: "☕".to_string(),
        location: "Cafetín".to_string(),
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// USER TESTS
// ═══════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn test_user_roundtrip_and_email_lookup() {
    require_emulator!();

    let db = test_db().await;
    let user = test_user(150);

    let before = db.get_user(&user.id).await.unwrap();
    assert!(before.is_none(), "User should not exist before creation");

    db.upsert_user(&user).await.unwrap();

    let fetched = db.get_user(&user.id).await.unwrap().unwrap();
    assert_eq!(fetched.email, user.email);
    assert_eq!(fetched.points, 150);
    assert_eq!(fetched.category, Category::Plata);

    let by_email = db.find_user_by_email(&user.email).await.unwrap().unwrap();
    assert_eq!(by_email.id, user.id);
}

// ═══════════════════════════════════════════════════════════════════════════
// SCAN TESTS
// ═══════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn test_scan_commits_user_and_audit_record() {
    require_emulator!();

    let db = test_db().await;
    let user = test_user(0);
    let container = test_container(ContainerStatus::Operational);
    db.upsert_user(&user).await.unwrap();
    db.seed_catalog(std::slice::from_ref(&container), &[])
        .await
        .unwrap();

    let outcome = scan_container(&db, &user.id, &container.name).await.unwrap();
    assert!((10..=50).contains(&outcome.points_earned));

    let stored = db.get_user(&user.id).await.unwrap().unwrap();
    assert_eq!(stored.points, outcome.points_earned);
    assert_eq!(stored.points_history.len(), 1);

    let scans: Vec<Scan> = db.get_scans_for_user(&user.id).await.unwrap();
    assert_eq!(scans.len(), 1);
    assert_eq!(scans[0].container_id, container.id);
}

#[tokio::test]
async fn test_scan_refused_in_maintenance() {
    require_emulator!();

    let db = test_db().await;
    let user = test_user(0);
    let container = test_container(ContainerStatus::Maintenance);
    db.upsert_user(&user).await.unwrap();
    db.seed_catalog(std::slice::from_ref(&container), &[])
        .await
        .unwrap();

    let result = scan_container(&db, &user.id, container.id.as_str()).await;
    assert!(result.is_err());
    assert!(db.get_scans_for_user(&user.id).await.unwrap().is_empty());
}

// ═══════════════════════════════════════════════════════════════════════════
// REDEMPTION TESTS
// ═══════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn test_redeem_persists_balance() {
    require_emulator!();

    let db = test_db().await;
    let user = test_user(320);
    let reward = test_reward(250, Category::Oro);
    db.upsert_user(&user).await.unwrap();
    db.seed_catalog(&[], std::slice::from_ref(&reward))
        .await
        .unwrap();

    let outcome = redeem_reward(&db, &user.id, &reward.id).await.unwrap();
    assert_eq!(outcome.new_points, 70);
    assert_eq!(outcome.new_category, Category::Clasico);

    let stored = db.get_user(&user.id).await.unwrap().unwrap();
    assert_eq!(stored.points, 70);
    assert_eq!(stored.category, Category::Clasico);
    assert_eq!(stored.points_history[0].points, -250);
}

// ═══════════════════════════════════════════════════════════════════════════
// CATALOG TESTS
// ═══════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn test_seed_catalog_writes_every_document() {
    require_emulator!();

    let db = test_db().await;
    let containers = vec![
        test_container(ContainerStatus::Operational),
        test_container(ContainerStatus::Maintenance),
    ];
    let rewards = vec![
        test_reward(50, Category::Clasico),
        test_reward(700, Category::Diamante),
    ];

    db.seed_catalog(&containers, &rewards).await.unwrap();

    for container in &containers {
        let stored = db.get_container(&container.id).await.unwrap().unwrap();
        assert_eq!(stored.name, container.name);
        assert_eq!(stored.status, container.status);
    }
    for reward in &rewards {
        let stored = db.get_reward(&reward.id).await.unwrap().unwrap();
        assert_eq!(stored.points_cost, reward.points_cost);
        assert_eq!(stored.category, reward.category);
    }
    assert!(db.has_containers().await.unwrap());
}
