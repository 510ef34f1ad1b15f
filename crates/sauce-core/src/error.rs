//! Error types for sauce-core

use thiserror::Error;

/// Core error type
///
/// Only raised while building registries, creators and reducers. Built
/// reducers and creators never fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
