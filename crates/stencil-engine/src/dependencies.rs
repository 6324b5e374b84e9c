//! Template dependency enumeration.
//!
//! The host builds its dependency graph before any build exists, so the
//! references collected here are the raw, unexpanded text. The host
//! resolves them eagerly via [`crate::TemplateResolver::resolve`]; a
//! reference still carrying placeholders will not match a job until it is
//! expanded at build time.

use stencil_core::{Delegation, Job, StepKind};

/// Collect every delegation a job's configuration carries, in first-seen
/// order, without duplicates.
pub fn template_dependencies(job: &Job) -> Vec<Delegation> {
    let mut deps: Vec<Delegation> = Vec::new();

    if let Some(reference) = job.scm.delegated_to() {
        deps.push(Delegation::new(StepKind::Scm, reference.clone()));
    }
    for (kind, entries) in [
        (StepKind::BuildStep, &job.build_steps),
        (StepKind::BuildWrapper, &job.build_wrappers),
        (StepKind::Publisher, &job.publishers),
    ] {
        for entry in entries {
            if let Some(reference) = entry.delegated_to() {
                let delegation = Delegation::new(kind, reference.clone());
                if !deps.contains(&delegation) {
                    deps.push(delegation);
                }
            }
        }
    }
    deps
}
