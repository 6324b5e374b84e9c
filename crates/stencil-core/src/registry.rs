//! The host job registry seam and an in-memory adapter.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::job::Job;
use crate::name::JobName;
use crate::{Error, Result};

/// Lookup and persistence against the host's job registry.
///
/// Lookups are performed fresh on every call; the core never caches, so a
/// rename, reconfiguration, or deletion of a template job is visible on the
/// very next build.
#[async_trait]
pub trait JobRegistry: Send + Sync {
    /// Look up a job by its full path name.
    async fn get_by_full_name(&self, name: &JobName) -> Result<Option<Job>>;

    /// Enumerate every job known to the registry.
    async fn list_all(&self) -> Result<Vec<Job>>;

    /// Persist a job's configuration.
    async fn save(&self, job: &Job) -> Result<()>;
}

/// In-memory registry for tests and embedded use.
#[derive(Default)]
pub struct MemoryRegistry {
    jobs: RwLock<HashMap<JobName, Job>>,
}

impl MemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, job: Job) {
        self.jobs.write().await.insert(job.name.clone(), job);
    }

    pub async fn remove(&self, name: &JobName) -> Option<Job> {
        self.jobs.write().await.remove(name)
    }

    /// Rename a job in place, as the host would do before notifying the
    /// rename propagator.
    pub async fn rename(&self, old: &JobName, new: &JobName) -> Result<()> {
        let mut jobs = self.jobs.write().await;
        let mut job = jobs
            .remove(old)
            .ok_or_else(|| Error::Registry(format!("no such job: {old}")))?;
        job.name = new.clone();
        jobs.insert(new.clone(), job);
        Ok(())
    }

    pub async fn len(&self) -> usize {
        self.jobs.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.jobs.read().await.is_empty()
    }
}

#[async_trait]
impl JobRegistry for MemoryRegistry {
    async fn get_by_full_name(&self, name: &JobName) -> Result<Option<Job>> {
        Ok(self.jobs.read().await.get(name).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Job>> {
        let mut all: Vec<Job> = self.jobs.read().await.values().cloned().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(all)
    }

    async fn save(&self, job: &Job) -> Result<()> {
        self.jobs.write().await.insert(job.name.clone(), job.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::job::StepEntry;

    #[tokio::test]
    async fn insert_and_lookup() {
        let registry = MemoryRegistry::new();
        registry.insert(Job::new("app")).await;

        let found = registry
            .get_by_full_name(&JobName::new("app"))
            .await
            .unwrap();
        assert!(found.is_some());
        assert!(
            registry
                .get_by_full_name(&JobName::new("missing"))
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn save_overwrites_configuration() {
        let registry = MemoryRegistry::new();
        registry.insert(Job::new("app")).await;

        let updated = Job::new("app").with_build_step(StepEntry::inline("compile"));
        registry.save(&updated).await.unwrap();

        let found = registry
            .get_by_full_name(&JobName::new("app"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.build_steps.len(), 1);
        assert_eq!(registry.len().await, 1);
    }

    #[tokio::test]
    async fn rename_moves_job() {
        let registry = MemoryRegistry::new();
        registry.insert(Job::new("old")).await;

        registry
            .rename(&JobName::new("old"), &JobName::new("new"))
            .await
            .unwrap();

        assert!(
            registry
                .get_by_full_name(&JobName::new("old"))
                .await
                .unwrap()
                .is_none()
        );
        let renamed = registry
            .get_by_full_name(&JobName::new("new"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(renamed.name, JobName::new("new"));
    }

    #[tokio::test]
    async fn rename_of_missing_job_fails() {
        let registry = MemoryRegistry::new();
        let result = registry
            .rename(&JobName::new("ghost"), &JobName::new("new"))
            .await;
        assert!(matches!(result, Err(Error::Registry(_))));
    }

    #[tokio::test]
    async fn list_all_is_sorted_by_name() {
        let registry = MemoryRegistry::new();
        registry.insert(Job::new("zeta")).await;
        registry.insert(Job::new("alpha")).await;

        let names: Vec<String> = registry
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|job| job.name.to_string())
            .collect();
        assert_eq!(names, vec!["alpha", "zeta"]);
    }
}
