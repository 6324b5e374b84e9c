//! Delegation surfaces and descriptors.

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::name::JobReference;

/// Which configuration surface a delegation lives in.
///
/// One underlying "delegation reference" concept is specialized by the list
/// it sits in; this tag is that specialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    #[display("build step")]
    BuildStep,
    #[display("build wrapper")]
    BuildWrapper,
    #[display("publisher")]
    Publisher,
    #[display("scm")]
    Scm,
}

/// One surface of one job forwarding to a template.
///
/// Two delegations are interchangeable when their kind and reference match;
/// no other state is carried.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Delegation {
    pub kind: StepKind,
    pub reference: JobReference,
}

impl Delegation {
    pub fn new(kind: StepKind, reference: impl Into<JobReference>) -> Self {
        Self {
            kind,
            reference: reference.into(),
        }
    }
}
