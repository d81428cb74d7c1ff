//! Error types and handling for the address search API

use crate::engine::EngineError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};
use thiserror::Error;

/// Application error types
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error("Engine health check failed")]
    Unhealthy,
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Get the error code for logs
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Config(_) => "invalid_config",
            AppError::Engine(e) => e.error_code(),
            AppError::Unhealthy => "engine_unhealthy",
            AppError::Internal(_) => "internal_error",
        }
    }

    /// Best-effort payload for the `error` field of the envelope
    pub fn payload(&self) -> Value {
        match self {
            AppError::Engine(e) => e.payload(),
            other => Value::String(other.to_string()),
        }
    }

    /// Process exit code for the CLI commands
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Config(_) => 1,
            AppError::Engine(EngineError::Transport(_) | EngineError::Timeout(_)) => 2,
            AppError::Unhealthy => 2,
            AppError::Engine(_) => 3,
            AppError::Internal(_) => 5,
        }
    }
}

/// Always a 500 with `{ "error": ... }`; no partial results
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": self.payload() })),
        )
            .into_response()
    }
}
