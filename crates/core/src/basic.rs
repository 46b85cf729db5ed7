//! Flat response envelope with an outcome `code` and flat pagination counters.
//!
//! Every field except `success` is omitted from the serialized form when it
//! is empty or zero. Messages are used exactly as given: an empty message
//! stays empty.
//!
//! ```json
//! {
//!   "success": true,
//!   "message": "Usuarios obtenidos",
//!   "data": [{ "id": 1 }],
//!   "totalRows": 100,
//!   "currentPage": 1,
//!   "totalPages": 10,
//!   "pageSize": 10
//! }
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::envelope::Envelope;
use crate::pagination;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicResponse<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub total_rows: i64,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub current_page: i64,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub total_pages: i64,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub page_size: i64,
}

fn is_zero(n: &i64) -> bool {
    *n == 0
}

impl<T> BasicResponse<T> {
    fn with_status(success: bool, message: String, code: String, data: Option<T>) -> Self {
        Self {
            success,
            message,
            code,
            data,
            total_rows: 0,
            current_page: 0,
            total_pages: 0,
            page_size: 0,
        }
    }

    /// Successful outcome carrying only a message.
    pub fn ok(message: impl Into<String>) -> Self {
        Self::with_status(true, message.into(), String::new(), None)
    }

    /// Successful outcome with a payload. `None` (or an empty code) leaves
    /// `code` out of the serialized form.
    pub fn ok_with_data(data: T, message: impl Into<String>, code: Option<&str>) -> Self {
        Self::with_status(
            true,
            message.into(),
            code.unwrap_or_default().to_string(),
            Some(data),
        )
    }

    /// Successful outcome with one page of results.
    ///
    /// `total_pages` is derived with the guarded calculation, so a
    /// non-positive `page_size` yields zero pages. `current_page` is taken
    /// as given.
    pub fn ok_paginated(
        data: T,
        total_rows: i64,
        current_page: i64,
        page_size: i64,
        message: impl Into<String>,
        code: Option<&str>,
    ) -> Self {
        Self {
            total_rows,
            current_page,
            total_pages: pagination::total_pages(total_rows, page_size),
            page_size,
            ..Self::ok_with_data(data, message, code)
        }
    }

    pub fn error(message: impl Into<String>, code: impl Into<String>) -> Self {
        Self::with_status(false, message.into(), code.into(), None)
    }

    /// Failed outcome that still carries a payload, e.g. the rejected input.
    pub fn error_with_data(
        data: Option<T>,
        message: impl Into<String>,
        code: impl Into<String>,
    ) -> Self {
        Self::with_status(false, message.into(), code.into(), data)
    }
}

impl<T: Serialize> BasicResponse<T> {
    /// JSON object with empty and zero fields already dropped.
    pub fn to_value(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

impl<T> Default for BasicResponse<T> {
    fn default() -> Self {
        Self::ok("")
    }
}

impl<T> Envelope for BasicResponse<T> {
    fn is_success(&self) -> bool {
        self.success
    }

    fn message(&self) -> &str {
        &self.message
    }

    fn code(&self) -> Option<&str> {
        (!self.code.is_empty()).then_some(self.code.as_str())
    }
}

impl<T> fmt::Display for BasicResponse<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BasicResponse {{ success: {}, message: {:?} }}",
            self.success, self.message
        )
    }
}
