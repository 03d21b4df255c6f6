//! Handlers for the generation job endpoints.
//!
//! No authentication; any caller may create and poll jobs.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use serde_json::{Map, Value};
use studio_core::job::NewJob;
use studio_core::types::JobId;

use crate::error::AppResult;
use crate::state::AppState;

/// Response body of `POST /api/generate`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub job_id: JobId,
}

// ---------------------------------------------------------------------------
// Generate
// ---------------------------------------------------------------------------

/// POST /api/generate
///
/// Create a job from `{prompt, style}` and return `{jobId}` right away.
/// The body is never rejected: a body that is not a JSON object is
/// treated as `{}`, and a field that is not a string is treated as absent.
pub async fn generate(State(state): State<AppState>, body: Bytes) -> impl IntoResponse {
    let input = parse_new_job(&body);
    let job_id = state.processor.create_job(input).await;
    Json(GenerateResponse { job_id })
}

/// Parse a create-job body, falling back to absent fields.
///
/// Each field is read on its own, so a missing or non-string `prompt`
/// does not cost the caller a valid `style` (and vice versa).
pub fn parse_new_job(body: &[u8]) -> NewJob {
    if body.is_empty() {
        return NewJob::default();
    }

    let fields = match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(fields)) => fields,
        Ok(other) => {
            tracing::warn!(
                kind = json_kind(&other),
                "Generate body is not an object, creating job without payload",
            );
            return NewJob::default();
        }
        Err(e) => {
            tracing::warn!(error = %e, "Unreadable generate body, creating job without payload");
            return NewJob::default();
        }
    };

    NewJob {
        prompt: string_field(&fields, "prompt"),
        style: string_field(&fields, "style"),
    }
}

fn string_field(fields: &Map<String, Value>, name: &str) -> Option<String> {
    match fields.get(name)? {
        Value::String(s) => Some(s.clone()),
        Value::Null => None,
        other => {
            tracing::warn!(
                field = name,
                kind = json_kind(other),
                "Ignoring non-string generate field",
            );
            None
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ---------------------------------------------------------------------------
// Get
// ---------------------------------------------------------------------------

/// GET /api/job/{id}
///
/// Current snapshot of a job, or 404 if the id was never issued.
pub async fn get_job(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let job = state.processor.get_job(&job_id).await?;
    Ok(Json(job))
}
