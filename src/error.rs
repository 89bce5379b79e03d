//! API error taxonomy
//!
//! Three kinds only: `NotFound` when the defining upstream resource of an
//! operation does not exist, `Upstream` for transport-level provider
//! faults, and `Internal` for anything uncategorized. Upstream error
//! bodies are never forwarded to the caller.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

/// Errors surfaced at the API boundary
#[derive(Debug, Error)]
pub enum ApiError {
    /// The defining upstream resource for the operation does not exist,
    /// or a required lookup (round number, session kind) failed
    #[error("{0}")]
    NotFound(String),

    /// A provider call failed at the transport level
    #[error("upstream provider failure: {0}")]
    Upstream(String),

    /// Uncategorized failure; the message is surfaced to the caller
    #[error("{0}")]
    Internal(String),
}

/// Wire shape of an error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::NotFound(detail) => (StatusCode::NOT_FOUND, detail),
            ApiError::Upstream(inner) => {
                error!("upstream failure: {inner}");
                // Deliberately generic: upstream error bodies are not leaked
                (StatusCode::INTERNAL_SERVER_ERROR, "External API error".to_string())
            }
            ApiError::Internal(detail) => {
                error!("internal error: {detail}");
                (StatusCode::INTERNAL_SERVER_ERROR, detail)
            }
        };

        (status, Json(ErrorBody { detail })).into_response()
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
