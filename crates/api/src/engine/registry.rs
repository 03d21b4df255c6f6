use std::collections::HashMap;

use studio_core::job::Job;
use tokio::sync::RwLock;

/// Process-lifetime store of job records keyed by id.
///
/// The registry is the only code that mutates a [`Job`]. Readers get
/// cloned snapshots. Records are never removed.
pub struct JobRegistry {
    jobs: RwLock<HashMap<String, Job>>,
}

impl JobRegistry {
    /// Create a new, empty registry.
    pub fn new() -> Self {
        Self {
            jobs: RwLock::new(HashMap::new()),
        }
    }

    /// Store a freshly created job.
    ///
    /// Ids from [`studio_core::types::new_job_id`] never collide. On a
    /// collision the existing record wins.
    pub async fn insert(&self, job: Job) {
        self.jobs
            .write()
            .await
            .entry(job.id.clone())
            .or_insert(job);
    }

    /// Snapshot of the job with the given id.
    pub async fn get(&self, id: &str) -> Option<Job> {
        self.jobs.read().await.get(id).cloned()
    }

    /// Apply the `processing -> done` transition.
    ///
    /// Returns the completed snapshot, or `None` for unknown ids and jobs
    /// that are already done.
    pub async fn complete(&self, id: &str) -> Option<Job> {
        let mut jobs = self.jobs.write().await;
        let job = jobs.get_mut(id)?;
        job.complete().then(|| job.clone())
    }

    /// Number of jobs tracked since startup.
    pub async fn len(&self) -> usize {
        self.jobs.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.jobs.read().await.is_empty()
    }
}

impl Default for JobRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use studio_core::job::{JobStatus, NewJob};

    use super::*;

    fn job(id: &str) -> Job {
        Job::new(
            id.to_string(),
            NewJob {
                prompt: Some("a cat".to_string()),
                style: Some("anime".to_string()),
            },
        )
    }

    #[tokio::test]
    async fn get_returns_inserted_snapshot() {
        let registry = JobRegistry::new();
        registry.insert(job("a")).await;

        let found = registry.get("a").await.unwrap();
        assert_eq!(found.id, "a");
        assert_eq!(found.status, JobStatus::Processing);
        assert_eq!(found.prompt.as_deref(), Some("a cat"));
    }

    #[tokio::test]
    async fn get_unknown_is_none() {
        let registry = JobRegistry::new();
        assert!(registry.get("nonexistent").await.is_none());
    }

    #[tokio::test]
    async fn complete_transitions_once() {
        let registry = JobRegistry::new();
        registry.insert(job("a")).await;

        let done = registry.complete("a").await.unwrap();
        assert_eq!(done.status, JobStatus::Done);
        assert!(registry.complete("a").await.is_none());
        assert_eq!(registry.get("a").await.unwrap().status, JobStatus::Done);
    }

    #[tokio::test]
    async fn complete_unknown_is_noop() {
        let registry = JobRegistry::new();
        assert!(registry.complete("missing").await.is_none());
        assert!(registry.is_empty().await);
    }

    #[tokio::test]
    async fn snapshots_are_detached() {
        let registry = JobRegistry::new();
        registry.insert(job("a")).await;

        let before = registry.get("a").await.unwrap();
        registry.complete("a").await;

        assert_eq!(before.status, JobStatus::Processing);
        assert_eq!(registry.get("a").await.unwrap().status, JobStatus::Done);
    }

    #[tokio::test]
    async fn duplicate_insert_keeps_first() {
        let registry = JobRegistry::new();
        registry.insert(job("a")).await;
        registry.complete("a").await;
        registry.insert(job("a")).await;

        assert_eq!(registry.len().await, 1);
        assert_eq!(registry.get("a").await.unwrap().status, JobStatus::Done);
    }
}
