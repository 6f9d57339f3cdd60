// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User profile endpoint tests.

use axum::http::StatusCode;
use recycle_rewards::models::DocumentId;

mod common;

#[tokio::test]
async fn test_profile_includes_next_category() {
    let (app, _state, store) = common::create_test_app();
    let user = common::insert_user(&store, 150);

    let (status, body) = common::get(&app, &format!("/api/users/{}", user.id)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], user.id.as_str());
    assert_eq!(body["points"], 150);
    assert_eq!(body["category"], "Plata");
    assert_eq!(body["recycledKg"], 0.0);
    assert_eq!(body["pointsHistory"], serde_json::json!([]));
    assert_eq!(body["nextCategory"]["name"], "Oro");
    assert_eq!(body["nextCategory"]["pointsNeeded"], 150);
    assert_eq!(body["nextCategory"]["currentPoints"], 150);
    assert_eq!(body["nextCategory"]["totalPoints"], 300);
    assert_eq!(body["nextCategory"]["progress"], 50.0);
    assert!(body.get("password").is_none());
}

#[tokio::test]
async fn test_profile_at_black_has_null_next_category() {
    let (app, _state, store) = common::create_test_app();
    let user = common::insert_user(&store, 1000);

    let (status, body) = common::get(&app, &format!("/api/users/{}", user.id)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["category"], "Black");
    assert!(body["nextCategory"].is_null());
}

#[tokio::test]
async fn test_unknown_user_is_not_found() {
    let (app, _state, _store) = common::create_test_app();

    let (status, body) =
        common::get(&app, &format!("/api/users/{}", DocumentId::generate())).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Usuario no encontrado");
}

#[tokio::test]
async fn test_malformed_user_id_is_bad_request() {
    let (app, _state, _store) = common::create_test_app();

    let (status, body) = common::get(&app, "/api/users/not-an-id").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Identificador inválido");
}
