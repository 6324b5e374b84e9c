//! Configuration validation errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("template reference cannot be empty")]
    EmptyReference,

    #[error("invalid template reference: {0}")]
    InvalidReference(String),
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
