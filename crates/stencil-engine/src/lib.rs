//! Template delegation engine.
//!
//! Jobs can delegate their build steps, publishers, build-wrapper
//! environment, and source-control configuration to a separate template
//! job, so that many jobs share one authoritative configuration. This crate
//! holds the three moving parts:
//!
//! - [`TemplateResolver`] resolves a (possibly parameterized) template
//!   reference to a concrete job, fresh on every call.
//! - [`RenamePropagator`] rewrites references across all jobs when the host
//!   renames a template job.
//! - [`DelegationRunner`] invokes a template's step lists through the
//!   host's step executor at build time.

pub mod dependencies;
pub mod propagator;
pub mod resolver;
pub mod runner;

pub use dependencies::template_dependencies;
pub use propagator::{PropagationReport, RenamePropagator};
pub use resolver::TemplateResolver;
pub use runner::{DelegationRunner, MAX_DELEGATION_DEPTH};
