//! Template reference resolution.
//!
//! Resolution is always fresh: every call re-queries the registry, so a
//! rename, reconfiguration, or deletion of the template job is visible on
//! the very next build. There is deliberately no cache to invalidate.

use std::sync::Arc;

use tracing::debug;

use stencil_config::VariableBindings;
use stencil_core::{Job, JobName, JobReference, JobRegistry, Result};

/// Resolves a symbolic template reference to a concrete job.
pub struct TemplateResolver {
    registry: Arc<dyn JobRegistry>,
}

impl TemplateResolver {
    pub fn new(registry: Arc<dyn JobRegistry>) -> Self {
        Self { registry }
    }

    /// Resolve a reference as a literal job path, without expansion.
    ///
    /// Used where no build context exists yet, such as dependency-graph
    /// computation; a reference still carrying placeholders will simply not
    /// match a real job.
    pub async fn resolve(&self, reference: &JobReference) -> Result<Option<Job>> {
        self.lookup(&reference.as_literal_name()).await
    }

    /// Expand the reference against one build's variables, then resolve.
    ///
    /// Unbound placeholders stay as literal text in the expanded name.
    pub async fn resolve_in_build(
        &self,
        reference: &JobReference,
        bindings: &VariableBindings,
    ) -> Result<Option<Job>> {
        let expanded = bindings.expand_reference(reference);
        if expanded != *reference {
            debug!(reference = %reference, expanded = %expanded, "expanded template reference");
        }
        self.lookup(&expanded.as_literal_name()).await
    }

    /// Direct lookup with a fallback scan.
    ///
    /// The host registry can return a transient false negative, so a miss
    /// is retried as a linear scan over all jobs before resolution gives
    /// up. A job that is genuinely absent resolves to `None`; that is a
    /// recoverable condition, not an error.
    async fn lookup(&self, name: &JobName) -> Result<Option<Job>> {
        if let Some(job) = self.registry.get_by_full_name(name).await? {
            return Ok(Some(job));
        }
        let jobs = self.registry.list_all().await?;
        let found = jobs.into_iter().find(|job| job.name == *name);
        match &found {
            Some(_) => debug!(job = %name, "direct lookup missed, found via scan"),
            None => debug!(job = %name, "template job not found"),
        }
        Ok(found)
    }
}
