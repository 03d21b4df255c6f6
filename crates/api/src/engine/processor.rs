//! Job creation and simulated processing.
//!
//! Each created job gets one spawned task that sleeps for the configured
//! delay and then asks the registry to mark the job `done`. The task only
//! holds the job id and a handle to the registry.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use studio_core::error::CoreError;
use studio_core::job::{Job, NewJob};
use studio_core::types::{new_job_id, JobId};
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;

use super::JobRegistry;

/// Creates jobs and drives their `processing -> done` transition.
pub struct JobProcessor {
    registry: Arc<JobRegistry>,
    delay: Duration,
    cancel: CancellationToken,
    tracker: TaskTracker,
}

impl JobProcessor {
    /// Create a processor with an empty registry.
    pub fn new(delay: Duration) -> Self {
        Self::with_registry(Arc::new(JobRegistry::new()), delay)
    }

    /// Create a processor over an existing registry.
    pub fn with_registry(registry: Arc<JobRegistry>, delay: Duration) -> Self {
        Self {
            registry,
            delay,
            cancel: CancellationToken::new(),
            tracker: TaskTracker::new(),
        }
    }

    pub fn registry(&self) -> &Arc<JobRegistry> {
        &self.registry
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Register a new job and schedule its completion.
    ///
    /// Returns immediately; the job reads as `processing` until the delay
    /// has elapsed.
    pub async fn create_job(&self, input: NewJob) -> JobId {
        let job = Job::new(new_job_id(), input);
        let id = job.id.clone();

        tracing::info!(
            job_id = %id,
            prompt = ?job.prompt,
            style = ?job.style,
            "Job created",
        );

        self.registry.insert(job).await;
        self.schedule_completion(id.clone());
        id
    }

    /// Current snapshot of a job.
    pub async fn get_job(&self, id: &str) -> Result<Job, CoreError> {
        self.registry
            .get(id)
            .await
            .ok_or_else(|| CoreError::NotFound {
                entity: "Job",
                id: id.to_string(),
            })
    }

    /// Number of scheduled transitions that have not fired yet.
    pub fn pending(&self) -> usize {
        self.tracker.len()
    }

    /// Stop all pending transitions and wait up to `timeout` for their
    /// tasks to exit. Jobs still `processing` stay that way.
    pub async fn shutdown(&self, timeout: Duration) {
        let pending = self.tracker.len();
        self.cancel.cancel();
        self.tracker.close();

        if tokio::time::timeout(timeout, self.tracker.wait())
            .await
            .is_err()
        {
            tracing::warn!(pending, "Timed out waiting for job tasks to stop");
        } else {
            tracing::info!(pending, "Job processor stopped");
        }
    }

    fn schedule_completion(&self, id: JobId) {
        let registry = Arc::clone(&self.registry);
        let cancel = self.cancel.clone();
        let delay = self.delay;

        self.tracker.spawn(async move {
            tokio::select! {
                _ = cancel.cancelled() => {
                    tracing::debug!(job_id = %id, "Pending job transition cancelled");
                }
                _ = tokio::time::sleep(delay) => {
                    if let Some(job) = registry.complete(&id).await {
                        let elapsed_ms = (Utc::now() - job.created_at).num_milliseconds();
                        tracing::info!(job_id = %id, elapsed_ms, "Job completed");
                    }
                }
            }
        });
    }
}
