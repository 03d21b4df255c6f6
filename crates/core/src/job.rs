//! Job entity, its creation DTO, and the status state machine.

use serde::{Deserialize, Serialize};

use crate::types::{JobId, Timestamp};

/// Lifecycle status of a job.
///
/// The only legal transition is `Processing -> Done`; `Done` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Processing,
    Done,
}

impl JobStatus {
    /// Whether `from -> to` is an allowed status change.
    pub fn can_transition(from: JobStatus, to: JobStatus) -> bool {
        matches!((from, to), (JobStatus::Processing, JobStatus::Done))
    }

    pub fn is_terminal(self) -> bool {
        self == JobStatus::Done
    }

    pub fn as_str(self) -> &'static str {
        match self {
            JobStatus::Processing => "processing",
            JobStatus::Done => "done",
        }
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tracked generation job.
///
/// Serializes to `{id, prompt, style, status}`. Absent payload fields are
/// omitted rather than written as `null`.
#[derive(Debug, Clone, Serialize)]
pub struct Job {
    pub id: JobId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    pub status: JobStatus,
    #[serde(skip)]
    pub created_at: Timestamp,
}

/// Payload of `POST /api/generate`.
///
/// Both fields are opaque and optional; nothing is validated.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewJob {
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    pub style: Option<String>,
}

impl Job {
    /// Build a fresh job in the `processing` state.
    pub fn new(id: JobId, input: NewJob) -> Self {
        Self {
            id,
            prompt: input.prompt,
            style: input.style,
            status: JobStatus::Processing,
            created_at: chrono::Utc::now(),
        }
    }

    /// Move the job to `done`.
    ///
    /// Returns `false` and leaves the job untouched if it is already
    /// terminal.
    pub fn complete(&mut self) -> bool {
        if !JobStatus::can_transition(self.status, JobStatus::Done) {
            return false;
        }
        self.status = JobStatus::Done;
        true
    }
}
