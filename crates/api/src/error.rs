use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use envelope_core::codes::CODE_BAD_REQUEST;
use envelope_core::error::CoreError;
use envelope_core::{DetailedResponse, ValidationErrors};
use serde_json::json;

use crate::response::ApiReply;

/// Message of the envelope produced for [`AppError::Validation`].
pub const MSG_VALIDATION_FAILED: &str = "Datos de entrada inválidos";

/// Application-level error type for HTTP handlers.
///
/// Every variant renders as a failed [`DetailedResponse`] envelope with a
/// matching HTTP status.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `envelope_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The requested resource does not exist. An empty message falls back to
    /// the default not-found text.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Field-level input validation failed.
    #[error("Validation failed on {} field(s)", .0.len())]
    Validation(ValidationErrors),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error. The message is logged, never returned.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// The HTTP status and envelope this error renders as.
    pub fn to_reply(&self) -> ApiReply<DetailedResponse<()>> {
        let (status, body) = match self {
            AppError::Core(err @ CoreError::InvalidPageSize { .. }) => (
                StatusCode::BAD_REQUEST,
                DetailedResponse::fail_with_errors(err.to_string(), json!({ "code": CODE_BAD_REQUEST })),
            ),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, DetailedResponse::not_found(msg.as_str())),
            AppError::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                DetailedResponse::validation_error(MSG_VALIDATION_FAILED, errors.clone()),
            ),
            AppError::Unauthorized(msg) => (
                StatusCode::UNAUTHORIZED,
                DetailedResponse::unauthorized(msg.as_str()),
            ),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, DetailedResponse::fail(msg.as_str())),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, DetailedResponse::server_error(""))
            }
        };
        ApiReply::new(status, body)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.to_reply().into_response()
    }
}
