use std::sync::Arc;

use crate::config::ServerConfig;
use crate::engine::JobProcessor;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything inside is behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Job registry and its delayed-completion scheduler.
    pub processor: Arc<JobProcessor>,
}
