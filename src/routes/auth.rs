// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Mock authentication routes.
//!
//! Credentials are not checked. Both endpoints answer with the user summary
//! and the configured placeholder session token.

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use validator::Validate;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::error::{JsonPayload, Result};
use crate::models::{Category, User};
use crate::services::accounts;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/register", post(register))
}

/// Login/register request body.
#[derive(Debug, Deserialize, Validate)]
pub struct CredentialsRequest {
    #[validate(length(min = 1, max = 254))]
    pub email: String,
    #[validate(length(min = 1, max = 128))]
    pub password: String,
}

/// Public subset of a user returned after authentication.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct UserSummary {
    pub id: String,
    pub student_id: String,
    pub name: String,
    pub email: String,
    pub avatar: String,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub points: i64,
    pub category: Category,
}

impl From<User> for UserSummary {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            student_id: user.student_id,
            name: user.name,
            email: user.email,
            avatar: user.avatar,
            points: user.points,
            category: user.category,
        }
    }
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct AuthResponse {
    pub success: bool,
    pub user: UserSummary,
    pub token: String,
}

/// Log in, creating the account on first use of an email.
async fn login(
    State(state): State<Arc<AppState>>,
    payload: JsonPayload<CredentialsRequest>,
) -> Result<Json<AuthResponse>> {
    let Json(request) = payload?;
    request.validate()?;

    let user = accounts::login(&state.db, &request.email, &request.password).await?;

    Ok(Json(AuthResponse {
        success: true,
        user: user.into(),
        token: state.config.session_token.clone(),
    }))
}

/// Register a new account; fails if the email is taken.
async fn register(
    State(state): State<Arc<AppState>>,
    payload: JsonPayload<CredentialsRequest>,
) -> Result<Json<AuthResponse>> {
    let Json(request) = payload?;
    request.validate()?;

    let user = accounts::register(&state.db, &request.email, &request.password).await?;

    Ok(Json(AuthResponse {
        success: true,
        user: user.into(),
        token: state.config.session_token.clone(),
    }))
}
