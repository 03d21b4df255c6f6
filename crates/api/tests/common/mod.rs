#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use studio_api::config::ServerConfig;
use studio_api::engine::JobProcessor;
use studio_api::router::build_app_router;
use studio_api::state::AppState;

/// Simulated processing delay used by the tests (matches the default).
pub const JOB_DELAY: Duration = Duration::from_millis(2000);

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        job_delay_ms: JOB_DELAY.as_millis() as u64,
        ..ServerConfig::default()
    }
}

/// Build the full application router with all middleware layers.
///
/// The returned router is cheap to clone and every clone shares the same
/// job registry, so a test can create a job with one clone and poll it
/// with another.
pub fn build_test_app() -> Router {
    let config = test_config();
    let state = AppState {
        processor: Arc::new(JobProcessor::new(config.job_delay())),
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Send a GET request.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with an arbitrary body and no content type.
pub async fn post_raw(app: Router, uri: &str, body: &'static str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create a job and return its id.
pub async fn create_job(app: &Router, body: serde_json::Value) -> String {
    let response = post_json(app.clone(), "/api/generate", body).await;
    assert_eq!(response.status(), axum::http::StatusCode::OK);
    let json = body_json(response).await;
    json["jobId"].as_str().unwrap().to_string()
}
