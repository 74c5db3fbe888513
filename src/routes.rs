//! Router assembly: one resource path, one verb per operation, plus health.

use crate::handlers::users::{create_user, delete_user, list_users, update_user};
use crate::state::AppState;
use axum::http::StatusCode;
use axum::routing::{head, post};
use axum::Router;

/// Health check. Never touches the database.
async fn health() -> (StatusCode, &'static str) {
    (StatusCode::OK, "PONG")
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route(
            "/users",
            post(create_user)
                .get(list_users)
                .put(update_user)
                .delete(delete_user),
        )
        .route("/_health", head(health))
        .with_state(state)
}
