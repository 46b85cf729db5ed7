//! Response envelope with a structured `errors` channel and nested
//! pagination metadata.
//!
//! `success` and `message` are always serialized; `data`, `errors` and
//! `pagination` are omitted when absent. Constructors for named outcomes
//! replace an empty message with the matching default from
//! [`messages`](crate::messages).
//!
//! ```json
//! {
//!   "success": false,
//!   "message": "Invalid input",
//!   "errors": { "email": ["required"] }
//! }
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::envelope::Envelope;
use crate::messages::{
    or_default, MSG_NOT_FOUND, MSG_OK, MSG_PAGINATED, MSG_SERVER_ERROR, MSG_UNAUTHORIZED,
    MSG_UNEXPECTED_ERROR,
};
use crate::pagination::{PageSizeMode, PaginationInfo};
use crate::validation::ValidationErrors;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedResponse<T> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PaginationInfo>,
}

impl<T> DetailedResponse<T> {
    fn succeeded(message: String, data: Option<T>) -> Self {
        Self {
            success: true,
            message,
            data,
            errors: None,
            pagination: None,
        }
    }

    fn failed(message: String, errors: Option<Value>) -> Self {
        Self {
            success: false,
            message,
            data: None,
            errors,
            pagination: None,
        }
    }

    // --- Success ---

    pub fn ok(message: impl Into<String>) -> Self {
        Self::succeeded(or_default(message, MSG_OK), None)
    }

    pub fn ok_with_data(data: T, message: impl Into<String>) -> Self {
        Self::succeeded(or_default(message, MSG_OK), Some(data))
    }

    /// Successful outcome with one page of results.
    ///
    /// A non-positive `page_size` yields `total_pages = 0`; use
    /// [`DetailedResponse::ok_paginated_with_mode`] to select the unguarded
    /// calculation instead.
    pub fn ok_paginated(
        data: T,
        total_items: i64,
        current_page: i64,
        page_size: i64,
        message: impl Into<String>,
    ) -> Self {
        Self::ok_paginated_with_mode(
            data,
            total_items,
            current_page,
            page_size,
            message,
            PageSizeMode::Guarded,
        )
    }

    pub fn ok_paginated_with_mode(
        data: T,
        total_items: i64,
        current_page: i64,
        page_size: i64,
        message: impl Into<String>,
        mode: PageSizeMode,
    ) -> Self {
        Self {
            pagination: Some(PaginationInfo::with_mode(
                total_items,
                current_page,
                page_size,
                mode,
            )),
            ..Self::succeeded(or_default(message, MSG_PAGINATED), Some(data))
        }
    }

    // --- Failure ---

    /// Generic failure. The message is used as given.
    pub fn fail(message: impl Into<String>) -> Self {
        Self::failed(message.into(), None)
    }

    pub fn fail_with_errors(message: impl Into<String>, errors: Value) -> Self {
        Self::failed(message.into(), Some(errors))
    }

    /// Failure whose detail is a `{ "code", "detail" }` object.
    pub fn fail_with_detail(
        message: impl Into<String>,
        code: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self::fail_with_errors(
            message,
            json!({ "code": code.into(), "detail": detail.into() }),
        )
    }

    pub fn validation_error(
        message: impl Into<String>,
        validation_errors: impl Into<ValidationErrors>,
    ) -> Self {
        let validation_errors: ValidationErrors = validation_errors.into();
        Self::failed(message.into(), Some(validation_errors.into_value()))
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::failed(or_default(message, MSG_NOT_FOUND), None)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::failed(or_default(message, MSG_UNAUTHORIZED), None)
    }

    pub fn server_error(message: impl Into<String>) -> Self {
        Self::failed(or_default(message, MSG_SERVER_ERROR), None)
    }

    /// Failure describing an unexpected error: `errors` holds the error's
    /// kind label and its display text. No source chain or backtrace is
    /// included.
    pub fn from_error_kind(kind: impl Into<String>, err: &dyn std::error::Error) -> Self {
        Self::fail_with_errors(
            MSG_UNEXPECTED_ERROR,
            json!({ "type": kind.into(), "message": err.to_string() }),
        )
    }

    /// [`DetailedResponse::from_error_kind`] with the generic `"Error"` label.
    pub fn from_error(err: &dyn std::error::Error) -> Self {
        Self::from_error_kind("Error", err)
    }
}

impl<T: Serialize> DetailedResponse<T> {
    /// JSON object with absent optional fields already dropped.
    pub fn to_value(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

impl<T> Default for DetailedResponse<T> {
    fn default() -> Self {
        Self::ok("")
    }
}

impl<T> Envelope for DetailedResponse<T> {
    fn is_success(&self) -> bool {
        self.success
    }

    fn message(&self) -> &str {
        &self.message
    }
}

impl<T> fmt::Display for DetailedResponse<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DetailedResponse {{ success: {}, message: {:?} }}",
            self.success, self.message
        )
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct User {
        id: u32,
        name: String,
    }

    fn users() -> Vec<User> {
        vec![
            User {
                id: 1,
                name: "Juan".to_string(),
            },
            User {
                id: 2,
                name: "María".to_string(),
            },
        ]
    }

    #[derive(Debug, thiserror::Error)]
    #[error("Operación no válida en el estado actual")]
    struct InvalidOperation;

    #[test]
    fn ok_substitutes_default_for_empty_message() {
        let response: DetailedResponse<()> = DetailedResponse::ok("");
        assert!(response.success);
        assert_eq!(response.message, "Operación exitosa");
    }

    #[test]
    fn ok_keeps_custom_message() {
        let response: DetailedResponse<()> = DetailedResponse::ok("custom");
        assert_eq!(response.message, "custom");
    }

    #[test]
    fn message_is_serialized_even_when_empty() {
        let response: DetailedResponse<()> = DetailedResponse::fail("");
        assert_eq!(
            response.to_value().unwrap(),
            json!({ "success": false, "message": "" })
        );
    }

    #[test]
    fn ok_with_data_defaults_message() {
        let response = DetailedResponse::ok_with_data(users(), "");
        assert!(response.success);
        assert_eq!(response.message, "Operación exitosa");
        assert_eq!(response.data, Some(users()));
        assert!(response.errors.is_none());
        assert!(response.pagination.is_none());
    }

    #[test]
    fn ok_paginated_builds_pagination_block() {
        let response = DetailedResponse::ok_paginated(users(), 100, 1, 10, "");
        assert!(response.success);
        assert_eq!(response.message, "Datos obtenidos exitosamente");
        assert!(response.errors.is_none());

        let pagination = response.pagination.unwrap();
        assert_eq!(pagination.total_items, 100);
        assert_eq!(pagination.total_pages, 10);
        assert!(!pagination.has_previous);
        assert!(pagination.has_next);
    }

    #[test]
    fn ok_paginated_serialized_shape() {
        let response = DetailedResponse::ok_paginated(vec![1], 21, 3, 10, "Página");
        assert_eq!(
            response.to_value().unwrap(),
            json!({
                "success": true,
                "message": "Página",
                "data": [1],
                "pagination": {
                    "totalItems": 21,
                    "currentPage": 3,
                    "pageSize": 10,
                    "totalPages": 3,
                    "hasPrevious": true,
                    "hasNext": false,
                }
            })
        );
    }

    #[test]
    fn ok_paginated_zero_page_size_is_guarded() {
        let response = DetailedResponse::ok_paginated(users(), 100, 1, 0, "");
        let pagination = response.pagination.unwrap();
        assert_eq!(pagination.total_pages, 0);
        assert!(!pagination.has_next);
    }

    // Divergence from the guarded default, reproduced on request only.
    #[test]
    fn ok_paginated_unguarded_zero_page_size_saturates() {
        let response = DetailedResponse::ok_paginated_with_mode(
            users(),
            100,
            1,
            0,
            "",
            PageSizeMode::Unguarded,
        );
        let pagination = response.pagination.unwrap();
        assert_eq!(pagination.total_pages, i64::MAX);
        assert!(pagination.has_next);
    }

    #[test]
    fn fail_keeps_message_verbatim() {
        let response: DetailedResponse<()> = DetailedResponse::fail("");
        assert!(!response.success);
        assert_eq!(response.message, "");
        assert!(response.errors.is_none());
    }

    #[test]
    fn fail_with_errors_carries_detail() {
        let detail = json!({ "code": "DB_CONNECTION_FAILED" });
        let response: DetailedResponse<()> =
            DetailedResponse::fail_with_errors("Error interno del servidor", detail.clone());
        assert!(!response.success);
        assert_eq!(response.errors, Some(detail));
        assert!(response.pagination.is_none());
    }

    #[test]
    fn fail_with_detail_shape() {
        let response: DetailedResponse<()> = DetailedResponse::fail_with_detail(
            "Error interno del servidor",
            "DB_CONNECTION_FAILED",
            "No se pudo conectar a la base de datos",
        );
        assert_eq!(
            response.errors,
            Some(json!({
                "code": "DB_CONNECTION_FAILED",
                "detail": "No se pudo conectar a la base de datos",
            }))
        );
    }

    #[test]
    fn validation_error_keeps_mapping_unchanged() {
        let mut errors = HashMap::new();
        errors.insert("email".to_string(), vec!["required".to_string()]);

        let response: DetailedResponse<()> = DetailedResponse::validation_error("Invalid input", errors);
        assert!(!response.success);
        assert_eq!(response.message, "Invalid input");
        assert_eq!(response.errors, Some(json!({ "email": ["required"] })));
        assert!(response.pagination.is_none());
        assert!(response.data.is_none());

        let json = response.to_value().unwrap();
        assert!(json.get("data").is_none());
        assert!(json.get("pagination").is_none());
    }

    #[test]
    fn validation_error_accepts_builder() {
        let errors = ValidationErrors::new()
            .add("email", "required")
            .add("email", "invalid format");
        let response: DetailedResponse<()> = DetailedResponse::validation_error("", errors);
        assert_eq!(response.message, "");
        assert_eq!(
            response.errors,
            Some(json!({ "email": ["required", "invalid format"] }))
        );
    }

    #[test]
    fn named_failures_substitute_defaults() {
        let not_found: DetailedResponse<()> = DetailedResponse::not_found("");
        let unauthorized: DetailedResponse<()> = DetailedResponse::unauthorized("");
        let server_error: DetailedResponse<()> = DetailedResponse::server_error("");

        assert_eq!(not_found.message, "Recurso no encontrado");
        assert_eq!(unauthorized.message, "No autorizado");
        assert_eq!(server_error.message, "Error interno del servidor");
        for response in [not_found, unauthorized, server_error] {
            assert!(!response.success);
            assert!(response.errors.is_none());
            assert!(response.data.is_none());
        }
    }

    #[test]
    fn named_failures_keep_custom_messages() {
        let response: DetailedResponse<()> = DetailedResponse::not_found("Usuario con ID 123 no encontrado");
        assert_eq!(response.message, "Usuario con ID 123 no encontrado");
        let response: DetailedResponse<()> =
            DetailedResponse::unauthorized("Token de autenticación inválido o expirado");
        assert_eq!(response.message, "Token de autenticación inválido o expirado");
        let response: DetailedResponse<()> = DetailedResponse::server_error("db down");
        assert_eq!(response.message, "db down");
    }

    #[test]
    fn from_error_describes_error() {
        let response: DetailedResponse<()> =
            DetailedResponse::from_error_kind("InvalidOperation", &InvalidOperation);
        assert!(!response.success);
        assert_eq!(response.message, "Se produjo un error inesperado");
        assert_eq!(
            response.errors,
            Some(json!({
                "type": "InvalidOperation",
                "message": "Operación no válida en el estado actual",
            }))
        );

        let response: DetailedResponse<()> = DetailedResponse::from_error(&InvalidOperation);
        assert_eq!(response.errors.unwrap()["type"], "Error");
    }

    #[test]
    fn success_category_is_fixed_per_constructor() {
        let successes: [DetailedResponse<u8>; 3] = [
            DetailedResponse::ok("a"),
            DetailedResponse::ok_with_data(1, "b"),
            DetailedResponse::ok_paginated(1, 1, 1, 1, "c"),
        ];
        assert!(successes.iter().all(|r| r.success && r.errors.is_none()));

        let failures: [DetailedResponse<u8>; 6] = [
            DetailedResponse::fail("a"),
            DetailedResponse::fail_with_errors("b", json!([])),
            DetailedResponse::validation_error("c", ValidationErrors::new()),
            DetailedResponse::not_found("d"),
            DetailedResponse::unauthorized("e"),
            DetailedResponse::server_error("f"),
        ];
        assert!(failures.iter().all(|r| !r.success && r.pagination.is_none()));
    }

    #[test]
    fn round_trip_restores_populated_fields() {
        let original = DetailedResponse::ok_paginated(users(), 2, 1, 10, "Usuarios obtenidos");
        let text = serde_json::to_string(&original).unwrap();
        let decoded: DetailedResponse<Vec<User>> = serde_json::from_str(&text).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn round_trip_of_validation_error_omits_absent_fields() {
        let original: DetailedResponse<User> = DetailedResponse::validation_error(
            "Invalid input",
            ValidationErrors::new().add("email", "required"),
        );
        let text = serde_json::to_string(&original).unwrap();
        assert!(!text.contains("\"data\""));
        assert!(!text.contains("\"pagination\""));

        let decoded: DetailedResponse<User> = serde_json::from_str(&text).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn default_is_ok_with_default_message() {
        let response: DetailedResponse<()> = DetailedResponse::default();
        assert!(response.success);
        assert_eq!(response.message, MSG_OK);
    }

    #[test]
    fn display_shows_status_and_message() {
        let response: DetailedResponse<()> = DetailedResponse::not_found("");
        assert_eq!(
            response.to_string(),
            r#"DetailedResponse { success: false, message: "Recurso no encontrado" }"#
        );
    }
}
