//! Error types for Stencil.

use thiserror::Error;

use crate::name::JobName;

#[derive(Debug, Error)]
pub enum Error {
    #[error("template job not found: {0}")]
    TemplateNotFound(String),

    #[error("delegation depth exceeded at '{reference}' (limit {limit})")]
    DelegationDepthExceeded { reference: String, limit: usize },

    #[error("registry error: {0}")]
    Registry(String),

    #[error("failed to persist '{job}': {message}")]
    Persistence { job: JobName, message: String },

    #[error("execution failed: {0}")]
    ExecutionFailed(String),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, Error>;
