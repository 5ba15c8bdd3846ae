// SPDX-License-Identifier: MIT

//! Application error types with consistent API responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Application error type that converts to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not authorized")]
    Unauthorized,

    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Non-2xx response from FatSecret. Status and raw body are forwarded
    /// verbatim to the caller so vendor diagnostics are not lost.
    #[error("FatSecret API error ({status}): {body}")]
    FatSecret { status: u16, body: String },

    /// Transport-level failure talking to FatSecret (DNS, TLS, connect).
    #[error("FatSecret request failed: {0}")]
    FatSecretTransport(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// JSON error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<u16>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorResponse {
                    error: "Not authorized".to_string(),
                    status: None,
                }),
            )
                .into_response(),
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: msg,
                    status: None,
                }),
            )
                .into_response(),
            AppError::FatSecret { status, body } => {
                tracing::error!(status, body = %body, "FatSecret error");
                let code =
                    StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
                (
                    code,
                    Json(ErrorResponse {
                        error: body,
                        status: Some(status),
                    }),
                )
                    .into_response()
            }
            AppError::FatSecretTransport(msg) => {
                tracing::error!(error = %msg, "FatSecret request failed");
                (
                    StatusCode::BAD_GATEWAY,
                    Json(ErrorResponse {
                        error: "fatsecret_unreachable".to_string(),
                        status: None,
                    }),
                )
                    .into_response()
            }
            AppError::Internal(err) => {
                tracing::error!(error = %err, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse {
                        error: "internal_error".to_string(),
                        status: None,
                    }),
                )
                    .into_response()
            }
        }
    }
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;
