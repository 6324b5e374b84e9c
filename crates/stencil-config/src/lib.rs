//! Reference text handling for the Stencil delegation engine.
//!
//! This crate handles:
//! - Build-variable expansion of template references
//! - Configuration-time validation of reference text

pub mod error;
pub mod validate;
pub mod variables;

pub use error::{ConfigError, ConfigResult};
pub use validate::validate_reference;
pub use variables::{VariableBindings, has_placeholders};
