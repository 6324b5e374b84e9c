//! Configuration-time validation of template references.
//!
//! Malformed references are rejected when the job is configured, not at
//! build time; the resolver only ever sees references that passed this
//! check.

use crate::error::{ConfigError, ConfigResult};

/// Validate raw template reference text as authored.
pub fn validate_reference(value: &str) -> ConfigResult<()> {
    if value.trim().is_empty() {
        return Err(ConfigError::EmptyReference);
    }
    if value.chars().any(char::is_control) {
        return Err(ConfigError::InvalidReference(
            "reference must not contain control characters".into(),
        ));
    }
    Ok(())
}
