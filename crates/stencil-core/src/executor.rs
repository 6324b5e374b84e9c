//! The host-side step execution seam.

use async_trait::async_trait;

use crate::Result;
use crate::delegation::StepKind;
use crate::job::{InlineStep, Job};

/// Executes host-defined steps on behalf of the delegation runner.
///
/// `job` is always the delegating job: template steps run in the context of
/// the build that delegated to them, exactly as if they were configured on
/// that job directly.
#[async_trait]
pub trait StepExecutor: Send + Sync {
    /// Run one inline step.
    ///
    /// `Ok(false)` is an ordinary step failure; `Err` is reserved for
    /// host-level faults.
    async fn execute(&self, job: &Job, kind: StepKind, step: &InlineStep) -> Result<bool>;

    /// Tear down one build-wrapper environment.
    async fn teardown(&self, _job: &Job, _step: &InlineStep) -> Result<bool> {
        Ok(true)
    }
}
