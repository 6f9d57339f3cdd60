// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! HTTP route handlers.

pub mod auth;
pub mod containers;
pub mod rewards;
pub mod scan;
pub mod seed;
pub mod users;

use crate::config::Config;
use crate::AppState;
use axum::http::{header, HeaderValue, Method};
use axum::{middleware, routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Every API route lives under this prefix.
pub const API_PREFIX: &str = "/api";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct HealthResponse {
    pub status: String,
    pub build_id: String,
}

/// Health check response
async fn health_check() -> Json<HealthResponse> {
    let build_id = option_env!("BUILD_ID").unwrap_or("unknown").to_string();
    Json(HealthResponse {
        status: "ok".to_string(),
        build_id,
    })
}

/// CORS policy: any origin for the mobile client, or just the configured
/// frontend plus localhost during development.
fn cors_layer(config: &Config) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT]);

    if config.cors_allow_any_origin {
        return cors.allow_origin(Any);
    }

    let frontend_url = config.frontend_url.clone();
    cors.allow_origin(AllowOrigin::predicate(
        move |origin: &HeaderValue, _request_parts: &axum::http::request::Parts| {
            let origin_str = origin.to_str().unwrap_or("");
            origin_str == frontend_url
                || origin_str.starts_with("http://localhost")
                || origin_str.starts_with("http://127.0.0.1")
        },
    ))
}

/// Build the complete router with all routes.
pub fn create_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        .merge(auth::routes())
        .merge(users::routes())
        .merge(containers::routes())
        .merge(rewards::routes())
        .merge(scan::routes())
        .merge(seed::routes());

    Router::new()
        .route("/health", get(health_check))
        .nest(API_PREFIX, api_routes)
        .layer(middleware::from_fn(
            crate::middleware::security::add_security_headers,
        ))
        .layer(cors_layer(&state.config))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
