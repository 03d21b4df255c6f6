//! Route definitions for the generation job endpoints.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::jobs;
use crate::state::AppState;

/// Routes mounted at `/api`.
///
/// ```text
/// POST   /generate        -> generate
/// GET    /job/{id}        -> get_job
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/generate", post(jobs::generate))
        .route("/job/{id}", get(jobs::get_job))
}
