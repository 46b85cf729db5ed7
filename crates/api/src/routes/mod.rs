pub mod health;
pub mod users;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /users                    detailed envelope: list, create
/// /users/paginated          detailed envelope: one page
/// /users/{id}               detailed envelope: get
///
/// /legacy/users             basic envelope: one page
/// /legacy/users/{id}        basic envelope: get
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/users", users::router())
        .nest("/legacy/users", users::legacy_router())
}

/// Full application: health at the root, API under `/api/v1`, request tracing.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(health::router())
        .nest("/api/v1", api_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
