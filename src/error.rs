// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with consistent API responses.
//!
//! Every error is reported to the client as a 4xx JSON body carrying a
//! human-readable (Spanish) message in `detail`.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::models::id::InvalidDocumentId;

/// Application error type that converts to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub const USER_NOT_FOUND: &'static str = "Usuario no encontrado";
    pub const CONTAINER_NOT_FOUND: &'static str = "Contenedor no encontrado";
    pub const REWARD_NOT_FOUND: &'static str = "Recompensa no encontrada";
    pub const INVALID_ID: &'static str = "Identificador inválido";

    pub fn user_not_found() -> Self {
        AppError::NotFound(Self::USER_NOT_FOUND.to_string())
    }

    pub fn container_not_found() -> Self {
        AppError::NotFound(Self::CONTAINER_NOT_FOUND.to_string())
    }

    pub fn reward_not_found() -> Self {
        AppError::NotFound(Self::REWARD_NOT_FOUND.to_string())
    }
}

impl From<InvalidDocumentId> for AppError {
    fn from(err: InvalidDocumentId) -> Self {
        tracing::debug!(error = %err, "Rejected malformed identifier");
        AppError::BadRequest(Self::INVALID_ID.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let field_errors = errors.field_errors();
        let mut fields: Vec<&str> = field_errors.keys().map(|k| k.as_ref()).collect();
        fields.sort_unstable();
        AppError::BadRequest(format!("Solicitud inválida: {}", fields.join(", ")))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(error = %rejection.body_text(), "Rejected request body");
        AppError::BadRequest(format!("Solicitud inválida: {}", rejection.body_text()))
    }
}

/// JSON error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    detail: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, detail) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg),
            AppError::Database(msg) => {
                tracing::error!(error = %msg, "Database error");
                (
                    StatusCode::BAD_REQUEST,
                    "database_error",
                    format!("Error inesperado: {}", msg),
                )
            }
            AppError::Internal(err) => {
                tracing::error!(error = %err, "Internal server error");
                (
                    StatusCode::BAD_REQUEST,
                    "internal_error",
                    format!("Error inesperado: {}", err),
                )
            }
        };

        let body = ErrorResponse {
            error: error.to_string(),
            detail,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;

/// JSON body extractor whose rejection is turned into an `AppError` with `?`.
pub type JsonPayload<T> = std::result::Result<Json<T>, JsonRejection>;
