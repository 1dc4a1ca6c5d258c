//! Error types for orgward-core
//!
//! Access decisions never surface as errors. These types cover the edges of
//! the core: parsing identifiers, loading configuration and asking an
//! external membership store for a context.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to parse a catalog identifier from a string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown permission: {0}")]
    UnknownPermission(String),

    #[error("unknown role: {0}")]
    UnknownRole(String),

    #[error("unknown membership status: {0}")]
    UnknownStatus(String),

    #[error("unknown resource type: {0}")]
    UnknownResource(String),

    #[error("unknown action: {0}")]
    UnknownAction(String),
}

/// Errors raised by a [`MembershipResolver`](crate::MembershipResolver)
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The backing membership store could not be reached
    #[error("membership store unavailable: {0}")]
    Unavailable(String),
}

/// Errors while loading configuration files
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config: {0}")]
    Invalid(String),
}
