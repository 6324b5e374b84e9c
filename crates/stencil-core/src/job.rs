//! Job configuration as seen by the delegation core.
//!
//! The host owns job storage and execution; the core only reads these lists
//! and, during rename propagation, rewrites single entries in place.

use serde::{Deserialize, Serialize};

use crate::delegation::StepKind;
use crate::name::{JobName, JobReference};

/// A host-defined configuration entry the core treats as opaque.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InlineStep {
    /// Host-facing step name, used in logs.
    pub name: String,
    /// Host-defined payload; never interpreted by the core.
    #[serde(default)]
    pub config: serde_json::Value,
}

impl InlineStep {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            config: serde_json::Value::Null,
        }
    }

    pub fn with_config(name: impl Into<String>, config: serde_json::Value) -> Self {
        Self {
            name: name.into(),
            config,
        }
    }
}

/// One entry in a job's ordered build-step, build-wrapper, or publisher list.
///
/// A `Delegate` entry carries nothing but its reference; two delegate
/// entries with the same reference are interchangeable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StepEntry {
    /// Forward to the corresponding list on another job.
    Delegate { job: JobReference },
    /// A step the host runs itself.
    Inline(InlineStep),
}

impl StepEntry {
    pub fn delegate(reference: impl Into<JobReference>) -> Self {
        Self::Delegate {
            job: reference.into(),
        }
    }

    pub fn inline(name: impl Into<String>) -> Self {
        Self::Inline(InlineStep::new(name))
    }

    /// The reference this entry delegates to, if it is a delegation.
    pub fn delegated_to(&self) -> Option<&JobReference> {
        match self {
            Self::Delegate { job } => Some(job),
            Self::Inline(_) => None,
        }
    }
}

/// The single source-control slot of a job.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScmConfig {
    /// No source control configured.
    #[default]
    None,
    /// Use the SCM configured on another job.
    Delegate { job: JobReference },
    /// A host-defined SCM configuration.
    Inline(InlineStep),
}

impl ScmConfig {
    pub fn delegate(reference: impl Into<JobReference>) -> Self {
        Self::Delegate {
            job: reference.into(),
        }
    }

    /// The reference this slot delegates to, if it is a delegation.
    pub fn delegated_to(&self) -> Option<&JobReference> {
        match self {
            Self::Delegate { job } => Some(job),
            _ => None,
        }
    }
}

/// A job's configuration as the delegation core sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    /// Full path of the job in the host registry.
    pub name: JobName,
    /// Ordered build steps.
    #[serde(default)]
    pub build_steps: Vec<StepEntry>,
    /// Ordered build wrappers (environment setup/teardown around the build).
    #[serde(default)]
    pub build_wrappers: Vec<StepEntry>,
    /// Ordered publishers (run after the main work).
    #[serde(default)]
    pub publishers: Vec<StepEntry>,
    /// Source-control configuration.
    #[serde(default)]
    pub scm: ScmConfig,
}

impl Job {
    pub fn new(name: impl Into<JobName>) -> Self {
        Self {
            name: name.into(),
            build_steps: Vec::new(),
            build_wrappers: Vec::new(),
            publishers: Vec::new(),
            scm: ScmConfig::None,
        }
    }

    pub fn with_build_step(mut self, entry: StepEntry) -> Self {
        self.build_steps.push(entry);
        self
    }

    pub fn with_build_wrapper(mut self, entry: StepEntry) -> Self {
        self.build_wrappers.push(entry);
        self
    }

    pub fn with_publisher(mut self, entry: StepEntry) -> Self {
        self.publishers.push(entry);
        self
    }

    pub fn with_scm(mut self, scm: ScmConfig) -> Self {
        self.scm = scm;
        self
    }

    /// The ordered entry list for a surface.
    ///
    /// `Scm` is a single slot rather than a list and yields no entries here.
    pub fn entries(&self, kind: StepKind) -> &[StepEntry] {
        match kind {
            StepKind::BuildStep => &self.build_steps,
            StepKind::BuildWrapper => &self.build_wrappers,
            StepKind::Publisher => &self.publishers,
            StepKind::Scm => &[],
        }
    }
}
