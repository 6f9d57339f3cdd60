// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Mock login/register tests.

use axum::http::StatusCode;
use serde_json::json;

mod common;

#[tokio::test]
async fn test_login_creates_user_on_first_sight() {
    let (app, _state, store) = common::create_test_app();

    let (status, body) = common::post(
        &app,
        "/api/auth/login",
        json!({"email": "maria.lopez@campus.edu", "password": "whatever"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["token"], "mock_token_123");
    assert_eq!(body["user"]["name"], "Maria.Lopez");
    assert_eq!(body["user"]["avatar"], "M");
    assert_eq!(body["user"]["points"], 0);
    assert_eq!(body["user"]["category"], "Clásico");
    assert!(body["user"]["studentId"].as_str().unwrap().starts_with("ST"));
    assert!(body["user"].get("password").is_none());
    assert_eq!(store.user_count(), 1);
}

#[tokio::test]
async fn test_second_login_returns_same_user() {
    let (app, _state, store) = common::create_test_app();
    let credentials = json!({"email": "ana@campus.edu", "password": "a"});

    let (_, first) = common::post(&app, "/api/auth/login", credentials.clone()).await;
    let (status, second) = common::post(
        &app,
        "/api/auth/login",
        json!({"email": "ana@campus.edu", "password": "another-password"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["user"]["id"], second["user"]["id"]);
    assert_eq!(store.user_count(), 1);
}

#[tokio::test]
async fn test_register_then_duplicate_is_rejected() {
    let (app, _state, store) = common::create_test_app();
    let credentials = json!({"email": "luis@campus.edu", "password": "pw"});

    let (status, body) = common::post(&app, "/api/auth/register", credentials.clone()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["email"], "luis@campus.edu");

    let (status, body) = common::post(&app, "/api/auth/register", credentials).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Usuario ya existe");
    assert_eq!(store.user_count(), 1);
}

#[tokio::test]
async fn test_empty_email_is_rejected() {
    let (app, _state, store) = common::create_test_app();

    let (status, body) = common::post(
        &app,
        "/api/auth/login",
        json!({"email": "", "password": "pw"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().unwrap().contains("email"));
    assert_eq!(store.user_count(), 0);
}

#[tokio::test]
async fn test_non_string_email_is_json_bad_request() {
    let (app, _state, store) = common::create_test_app();

    let (status, body) = common::post(
        &app,
        "/api/auth/login",
        json!({"email": 5, "password": "pw"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "bad_request");
    assert!(body["detail"]
        .as_str()
        .unwrap()
        .starts_with("Solicitud inválida"));
    assert_eq!(store.user_count(), 0);
}
