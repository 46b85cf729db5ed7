//! User handlers answering with [`DetailedResponse`] envelopes.

use axum::extract::{Path, Query, State};
use axum::Json;
use envelope_core::DetailedResponse;

use crate::error::{AppError, AppResult};
use crate::models::{CreateUser, User};
use crate::query::PaginationParams;
use crate::response::ApiReply;
use crate::state::AppState;

pub const MSG_USERS_FOUND: &str = "Usuarios obtenidos";
pub const MSG_USER_FOUND: &str = "Usuario obtenido";
pub const MSG_USER_CREATED: &str = "Usuario creado exitosamente";

// ---------------------------------------------------------------------------
// GET /users
// ---------------------------------------------------------------------------

pub async fn list_users(
    State(state): State<AppState>,
) -> AppResult<ApiReply<DetailedResponse<Vec<User>>>> {
    let users = state.users.read().await.clone();
    tracing::debug!(count = users.len(), "Listing users");
    Ok(ApiReply::ok(DetailedResponse::ok_with_data(users, MSG_USERS_FOUND)))
}

// ---------------------------------------------------------------------------
// GET /users/paginated
// ---------------------------------------------------------------------------

/// One page of users. The envelope message is left empty so the paginated
/// default applies.
pub async fn list_users_paginated(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<ApiReply<DetailedResponse<Vec<User>>>> {
    let request = params.resolve(&state.config)?;

    let users = state.users.read().await;
    let page = request.slice(&users).to_vec();
    let total = i64::try_from(users.len())
        .map_err(|_| AppError::InternalError("user count exceeds i64".into()))?;

    tracing::debug!(
        page = request.page,
        page_size = request.page_size,
        total,
        "Listing users page",
    );

    Ok(ApiReply::ok(DetailedResponse::ok_paginated(
        page,
        total,
        request.page,
        request.page_size,
        "",
    )))
}

// ---------------------------------------------------------------------------
// GET /users/{id}
// ---------------------------------------------------------------------------

pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> AppResult<ApiReply<DetailedResponse<User>>> {
    let user = state
        .users
        .read()
        .await
        .iter()
        .find(|u| u.id == id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("Usuario con ID {id} no encontrado")))?;

    Ok(ApiReply::ok(DetailedResponse::ok_with_data(user, MSG_USER_FOUND)))
}

// ---------------------------------------------------------------------------
// POST /users
// ---------------------------------------------------------------------------

pub async fn create_user(
    State(state): State<AppState>,
    Json(input): Json<CreateUser>,
) -> AppResult<ApiReply<DetailedResponse<User>>> {
    let errors = input.validate();
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    let mut users = state.users.write().await;
    let id = users.iter().map(|u| u.id).max().unwrap_or(0) + 1;
    let user = User {
        id,
        name: input.name.trim().to_string(),
        email: input.email.trim().to_string(),
    };
    users.push(user.clone());

    tracing::info!(user_id = id, "User created");

    Ok(ApiReply::created(DetailedResponse::ok_with_data(
        user,
        MSG_USER_CREATED,
    )))
}
