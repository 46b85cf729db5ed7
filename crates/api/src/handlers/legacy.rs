//! User handlers answering with the flat [`BasicResponse`] envelope.
//!
//! Messages are passed verbatim and outcomes carry a `code`.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use envelope_core::codes::{CODE_BAD_REQUEST, CODE_NOT_FOUND, CODE_SUCCESS};
use envelope_core::BasicResponse;

use crate::models::User;
use crate::query::PaginationParams;
use crate::response::ApiReply;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /legacy/users
// ---------------------------------------------------------------------------

pub async fn list_users_paginated(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> ApiReply<BasicResponse<Vec<User>>> {
    let request = match params.resolve(&state.config) {
        Ok(request) => request,
        Err(err) => {
            return ApiReply::new(
                StatusCode::BAD_REQUEST,
                BasicResponse::error(err.to_string(), CODE_BAD_REQUEST),
            )
        }
    };

    let users = state.users.read().await;
    let page = request.slice(&users).to_vec();
    let total = i64::try_from(users.len()).unwrap_or(i64::MAX);

    ApiReply::ok(BasicResponse::ok_paginated(
        page,
        total,
        request.page,
        request.page_size,
        "Usuarios obtenidos",
        Some(CODE_SUCCESS),
    ))
}

// ---------------------------------------------------------------------------
// GET /legacy/users/{id}
// ---------------------------------------------------------------------------

pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> ApiReply<BasicResponse<User>> {
    let users = state.users.read().await;
    match users.iter().find(|u| u.id == id) {
        Some(user) => ApiReply::ok(BasicResponse::ok_with_data(
            user.clone(),
            "Usuario obtenido",
            None,
        )),
        None => ApiReply::new(
            StatusCode::NOT_FOUND,
            BasicResponse::error("Usuario no encontrado", CODE_NOT_FOUND),
        ),
    }
}
