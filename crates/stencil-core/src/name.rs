//! Job names and template references.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// The full path of a job in the host registry (e.g. "tools/app-build").
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display,
)]
#[display("{_0}")]
#[serde(transparent)]
pub struct JobName(String);

impl JobName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for JobName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for JobName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl std::str::FromStr for JobName {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self(s.to_string()))
    }
}

/// A reference to a template job as authored in configuration.
///
/// May contain `$VAR` placeholders that are only meaningful against one
/// build's variable bindings. A reference with no placeholders is a literal
/// job path.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display,
)]
#[display("{_0}")]
#[serde(transparent)]
pub struct JobReference(String);

impl JobReference {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Interpret the reference text as a literal job name, without any
    /// placeholder expansion.
    pub fn as_literal_name(&self) -> JobName {
        JobName::new(self.0.clone())
    }
}

impl From<&str> for JobReference {
    fn from(reference: &str) -> Self {
        Self(reference.to_string())
    }
}

impl From<String> for JobReference {
    fn from(reference: String) -> Self {
        Self(reference)
    }
}

impl From<&JobName> for JobReference {
    fn from(name: &JobName) -> Self {
        Self(name.as_str().to_string())
    }
}
