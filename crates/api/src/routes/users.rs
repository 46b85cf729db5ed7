//! Route definitions for the user demo resource.
//!
//! Two routers are provided:
//! - `router()` answering with the detailed envelope, mounted at `/users`
//! - `legacy_router()` answering with the basic envelope, mounted at `/legacy/users`

use axum::routing::get;
use axum::Router;

use crate::handlers::{legacy, users};
use crate::state::AppState;

/// ```text
/// GET  /           -> list_users
/// POST /           -> create_user
/// GET  /paginated  -> list_users_paginated
/// GET  /{id}       -> get_user
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(users::list_users).post(users::create_user))
        .route("/paginated", get(users::list_users_paginated))
        .route("/{id}", get(users::get_user))
}

/// ```text
/// GET /      -> list_users_paginated
/// GET /{id}  -> get_user
/// ```
pub fn legacy_router() -> Router<AppState> {
    Router::new()
        .route("/", get(legacy::list_users_paginated))
        .route("/{id}", get(legacy::get_user))
}
