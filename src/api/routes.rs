//! API route configuration.

use crate::api::handlers::{alias_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Routes mounted under `/api`.
///
/// # Endpoints
///
/// - `POST /shorten`          - Create an alias
/// - `GET  /aliases/{alias}`  - Read an alias and its click count
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/aliases/{alias}", get(alias_handler))
}
