pub mod health;
pub mod jobs;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /generate                                        create job (POST)
/// /job/{id}                                        job snapshot (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(jobs::router())
}
