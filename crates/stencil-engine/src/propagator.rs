//! Rename propagation.
//!
//! When the host renames a job it notifies the propagator once, after the
//! rename has taken effect in its registry. Matching is literal string
//! equality against stored references; no expansion is attempted, since the
//! job being renamed is identified by its literal former path.

use std::sync::Arc;

use tracing::{error, info};

use stencil_core::{Job, JobName, JobRegistry, Result, ScmConfig, StepEntry};

/// Outcome of one rename propagation pass.
#[derive(Debug, Default)]
pub struct PropagationReport {
    /// Jobs examined.
    pub scanned: usize,
    /// Jobs patched and saved.
    pub updated: Vec<JobName>,
    /// Jobs patched whose save failed; they keep the stale reference.
    pub failed: Vec<JobName>,
}

/// Rewrites template references across all jobs after a rename.
///
/// Stateless between invocations; each call is one full scan-and-patch
/// pass over the registry.
pub struct RenamePropagator {
    registry: Arc<dyn JobRegistry>,
}

impl RenamePropagator {
    pub fn new(registry: Arc<dyn JobRegistry>) -> Self {
        Self { registry }
    }

    /// The host's rename notification.
    ///
    /// Patches every job whose configuration references `old` and persists
    /// each changed job exactly once, after all four surfaces have been
    /// checked. A failed save is logged and skipped; the remaining jobs are
    /// still processed.
    pub async fn on_renamed(&self, old: &JobName, new: &JobName) -> Result<PropagationReport> {
        let jobs = self.registry.list_all().await?;
        let mut report = PropagationReport {
            scanned: jobs.len(),
            ..Default::default()
        };

        for mut job in jobs {
            if !patch_job(&mut job, old, new) {
                continue;
            }
            match self.registry.save(&job).await {
                Ok(()) => {
                    info!(job = %job.name, old = %old, new = %new, "updated template references");
                    report.updated.push(job.name.clone());
                }
                Err(err) => {
                    // The job keeps its stale reference; a manual edit or
                    // the next rename has to correct it.
                    error!(job = %job.name, error = %err, "unable to save updated configuration");
                    report.failed.push(job.name.clone());
                }
            }
        }
        Ok(report)
    }
}

/// Patch all four configuration surfaces of one job. Returns whether
/// anything changed.
fn patch_job(job: &mut Job, old: &JobName, new: &JobName) -> bool {
    let mut changed = patch_scm(&mut job.scm, old, new);
    for list in [
        &mut job.build_steps,
        &mut job.build_wrappers,
        &mut job.publishers,
    ] {
        changed |= patch_entries(list, old, new);
    }
    changed
}

fn patch_scm(scm: &mut ScmConfig, old: &JobName, new: &JobName) -> bool {
    match scm {
        ScmConfig::Delegate { job } if job.as_str() == old.as_str() => {
            *scm = ScmConfig::delegate(new.as_str());
            true
        }
        _ => false,
    }
}

fn patch_entries(entries: &mut [StepEntry], old: &JobName, new: &JobName) -> bool {
    let stale = StepEntry::delegate(old.as_str());
    let mut changed = false;
    for entry in entries.iter_mut() {
        if *entry == stale {
            *entry = StepEntry::delegate(new.as_str());
            changed = true;
        }
    }
    changed
}
