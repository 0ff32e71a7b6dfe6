//! Unified error handling for the server.
//!
//! Every error is converted to a response at the request boundary; no
//! request failure crashes the process.

use crate::store::StoreError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tally_engine::Error as EngineError;

/// Application error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("storage error: {0}")]
    Store(#[from] StoreError),

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("invalid request: {0}")]
    BadRequest(String),
}

/// Error response body.
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match &self {
            AppError::Store(e) => {
                tracing::error!("storage error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "failed to persist collection".to_string(),
                )
            }
            AppError::Engine(e) => match e {
                EngineError::InvalidCredentials => (StatusCode::UNAUTHORIZED, e.to_string()),
                EngineError::DuplicateEmail(_)
                | EngineError::MissingCredentials
                | EngineError::UnknownMaterial(_)
                | EngineError::MalformedRecord(_) => (StatusCode::BAD_REQUEST, e.to_string()),
            },
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
        };

        (status, Json(ErrorResponse { error })).into_response()
    }
}

/// Result type alias for handlers.
pub type Result<T> = std::result::Result<T, AppError>;
