// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::Utc;
use recycle_rewards::config::Config;
use recycle_rewards::db::{FirestoreDb, MemoryStore};
use recycle_rewards::models::{category_from_points, DocumentId, User};
use recycle_rewards::routes::create_router;
use recycle_rewards::AppState;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

/// Check if emulator is available via environment variable.
#[allow(dead_code)]
pub fn emulator_available() -> bool {
    std::env::var("FIRESTORE_EMULATOR_HOST").is_ok()
}

/// Skip test with message if emulator not available.
#[macro_export]
macro_rules! require_emulator {
    () => {
        if !crate::common::emulator_available() {
            eprintln!("⚠️  Skipping: FIRESTORE_EMULATOR_HOST not set");
            return;
        }
    };
}

/// Create a test database connection against the emulator.
#[allow(dead_code)]
pub async fn test_db() -> FirestoreDb {
    FirestoreDb::new("test-project")
        .await
        .expect("Failed to connect to Firestore emulator")
}

/// In-memory test app. Returns the router, the shared state, and the
/// backing store for direct inspection.
#[allow(dead_code)]
pub fn create_test_app() -> (Router, Arc<AppState>, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let state = Arc::new(AppState {
        config: Config::default(),
        db: FirestoreDb::with_memory_store(store.clone()),
    });

    (create_router(state.clone()), state, store)
}

/// Send a request with an optional JSON body; returns status and parsed body.
#[allow(dead_code)]
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, json)
}

#[allow(dead_code)]
pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

#[allow(dead_code)]
pub async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(body)).await
}

/// Store a user with the given balance directly (bypassing login).
#[allow(dead_code)]
pub fn insert_user(store: &MemoryStore, points: i64) -> User {
    let user = User {
        id: DocumentId::generate(),
        student_id: "ST55555".to_string(),
        name: "Prueba".to_string(),
        email: format!("{}@campus.edu", DocumentId::generate()),
        password: "password123".to_string(),
        avatar: "P".to_string(),
        points,
        category: category_from_points(points),
        points_history: vec![],
        recycled_kg: 0.0,
        created_at: Utc::now(),
    };
    store.upsert_user(&user);
    user
}

/// Seed the sample catalog through the API.
#[allow(dead_code)]
pub async fn init_catalog(app: &Router) {
    let (status, _) = post(app, "/api/init-data", Value::Null).await;
    assert_eq!(status, StatusCode::OK);
}
