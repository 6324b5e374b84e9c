//! Delegated step invocation.
//!
//! The runner resolves the template at the moment its steps execute and
//! forwards each entry, in order, to the host's [`StepExecutor`]. Build
//! steps and wrapper setup stop at the first failure; publishers and
//! wrapper teardown always run to completion, and the overall result is the
//! logical AND of the individual results.

use std::sync::Arc;

use async_recursion::async_recursion;
use tracing::{info, warn};

use stencil_config::VariableBindings;
use stencil_core::{
    Error, Job, JobReference, Result, ScmConfig, StepEntry, StepExecutor, StepKind,
};

use crate::resolver::TemplateResolver;

/// Templates may delegate to further templates; a cycle in those references
/// would otherwise recurse forever.
pub const MAX_DELEGATION_DEPTH: usize = 8;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Aggregation {
    /// Stop at the first failing entry.
    ShortCircuit,
    /// Run every entry; fail if any entry failed.
    RunAll,
}

/// Runs a template job's step lists inside another job's build.
pub struct DelegationRunner {
    resolver: TemplateResolver,
    executor: Arc<dyn StepExecutor>,
}

impl DelegationRunner {
    pub fn new(resolver: TemplateResolver, executor: Arc<dyn StepExecutor>) -> Self {
        Self { resolver, executor }
    }

    /// Run the template's build steps in the delegating job's build,
    /// stopping at the first failure.
    pub async fn run_build_steps(
        &self,
        job: &Job,
        reference: &JobReference,
        bindings: &VariableBindings,
    ) -> Result<bool> {
        self.run(
            job,
            StepKind::BuildStep,
            reference,
            bindings,
            Aggregation::ShortCircuit,
            0,
        )
        .await
    }

    /// Set up the template's build-wrapper environment, stopping at the
    /// first failure.
    pub async fn setup_build_wrappers(
        &self,
        job: &Job,
        reference: &JobReference,
        bindings: &VariableBindings,
    ) -> Result<bool> {
        self.run(
            job,
            StepKind::BuildWrapper,
            reference,
            bindings,
            Aggregation::ShortCircuit,
            0,
        )
        .await
    }

    /// Tear down the template's build-wrapper environment. Every wrapper
    /// tears down even after earlier failures.
    pub async fn teardown_build_wrappers(
        &self,
        job: &Job,
        reference: &JobReference,
        bindings: &VariableBindings,
    ) -> Result<bool> {
        self.teardown(job, reference, bindings, 0).await
    }

    /// Run the template's publishers. Later publishers run regardless of
    /// earlier failures; the result reflects failure if any one failed.
    pub async fn run_publishers(
        &self,
        job: &Job,
        reference: &JobReference,
        bindings: &VariableBindings,
    ) -> Result<bool> {
        self.run(
            job,
            StepKind::Publisher,
            reference,
            bindings,
            Aggregation::RunAll,
            0,
        )
        .await
    }

    /// Resolve the SCM configuration the delegating job should use,
    /// following chained delegations to the first concrete configuration.
    pub async fn resolve_scm(
        &self,
        reference: &JobReference,
        bindings: &VariableBindings,
    ) -> Result<ScmConfig> {
        self.scm_at(reference, bindings, 0).await
    }

    async fn resolve_template(
        &self,
        reference: &JobReference,
        bindings: &VariableBindings,
        depth: usize,
    ) -> Result<Job> {
        if depth >= MAX_DELEGATION_DEPTH {
            return Err(Error::DelegationDepthExceeded {
                reference: reference.to_string(),
                limit: MAX_DELEGATION_DEPTH,
            });
        }
        let resolved = self.resolver.resolve_in_build(reference, bindings).await?;
        match resolved {
            Some(template) => Ok(template),
            None => {
                warn!(reference = %reference, "template job not found");
                Err(Error::TemplateNotFound(reference.to_string()))
            }
        }
    }

    #[async_recursion]
    async fn run(
        &self,
        job: &Job,
        kind: StepKind,
        reference: &JobReference,
        bindings: &VariableBindings,
        aggregation: Aggregation,
        depth: usize,
    ) -> Result<bool> {
        let template = self.resolve_template(reference, bindings, depth).await?;
        info!(job = %job.name, template = %template.name, kind = %kind, "running delegated entries");

        let mut all_ok = true;
        for entry in template.entries(kind) {
            let ok = match entry {
                StepEntry::Delegate { job: nested } => {
                    self.run(job, kind, nested, bindings, aggregation, depth + 1)
                        .await?
                }
                StepEntry::Inline(step) => self.executor.execute(job, kind, step).await?,
            };
            if !ok {
                warn!(job = %job.name, template = %template.name, kind = %kind, "delegated entry failed");
                if aggregation == Aggregation::ShortCircuit {
                    return Ok(false);
                }
                all_ok = false;
            }
        }
        if all_ok {
            info!(job = %job.name, template = %template.name, kind = %kind, "delegated entries succeeded");
        }
        Ok(all_ok)
    }

    #[async_recursion]
    async fn teardown(
        &self,
        job: &Job,
        reference: &JobReference,
        bindings: &VariableBindings,
        depth: usize,
    ) -> Result<bool> {
        let template = self.resolve_template(reference, bindings, depth).await?;

        let mut all_ok = true;
        for entry in template.entries(StepKind::BuildWrapper) {
            let ok = match entry {
                StepEntry::Delegate { job: nested } => {
                    self.teardown(job, nested, bindings, depth + 1).await?
                }
                StepEntry::Inline(step) => self.executor.teardown(job, step).await?,
            };
            all_ok &= ok;
        }
        Ok(all_ok)
    }

    #[async_recursion]
    async fn scm_at(
        &self,
        reference: &JobReference,
        bindings: &VariableBindings,
        depth: usize,
    ) -> Result<ScmConfig> {
        let template = self.resolve_template(reference, bindings, depth).await?;
        match &template.scm {
            ScmConfig::Delegate { job } => self.scm_at(job, bindings, depth + 1).await,
            other => {
                info!(template = %template.name, "using SCM from template");
                Ok(other.clone())
            }
        }
    }
}
