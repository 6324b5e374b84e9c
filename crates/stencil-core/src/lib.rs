//! Core domain types and traits for Stencil template delegation.
//!
//! This crate contains:
//! - Job names and template references
//! - Delegation surfaces and job configuration entries
//! - The job registry trait and an in-memory adapter
//! - The step executor trait implemented by the host

pub mod delegation;
pub mod error;
pub mod executor;
pub mod job;
pub mod name;
pub mod registry;

pub use delegation::{Delegation, StepKind};
pub use error::{Error, Result};
pub use executor::StepExecutor;
pub use job::{InlineStep, Job, ScmConfig, StepEntry};
pub use name::{JobName, JobReference};
pub use registry::{JobRegistry, MemoryRegistry};
