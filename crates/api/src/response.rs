//! Axum responder for the envelope types.
//!
//! Envelopes are framework-free, so they travel to axum inside an
//! [`ApiReply`] that pairs them with an HTTP status.
//!
//! ```ignore
//! Ok(ApiReply::ok(DetailedResponse::ok_with_data(users, "Usuarios obtenidos")))
//! ```

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use envelope_core::Envelope;
use serde::Serialize;

#[derive(Debug)]
pub struct ApiReply<E> {
    pub status: StatusCode,
    pub body: E,
}

impl<E> ApiReply<E> {
    pub fn new(status: StatusCode, body: E) -> Self {
        Self { status, body }
    }

    /// `200 OK`.
    pub fn ok(body: E) -> Self {
        Self::new(StatusCode::OK, body)
    }

    /// `201 Created`.
    pub fn created(body: E) -> Self {
        Self::new(StatusCode::CREATED, body)
    }
}

impl<E: Envelope> ApiReply<E> {
    /// `200 OK` for a successful envelope, `400 Bad Request` otherwise.
    pub fn from_envelope(body: E) -> Self {
        let status = if body.is_success() {
            StatusCode::OK
        } else {
            StatusCode::BAD_REQUEST
        };
        Self::new(status, body)
    }
}

impl<E: Serialize + Envelope> IntoResponse for ApiReply<E> {
    fn into_response(self) -> Response {
        tracing::debug!(
            status = self.status.as_u16(),
            success = self.body.is_success(),
            message = self.body.message(),
            code = self.body.code(),
            "Sending envelope",
        );
        (self.status, Json(self.body)).into_response()
    }
}
