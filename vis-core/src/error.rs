//! Error types for tree loading, configuration and layout passes.

use std::path::PathBuf;
use thiserror::Error;

/// A layout pass was aborted.
///
/// Aborting is always per pass: the caller reports the error, skips the
/// frame and tries again on the next one.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("tree source does not know node {0}")]
    UnknownNode(String),

    #[error("layout exceeded the depth limit of {max_depth} levels (cyclic tree?)")]
    DepthLimitExceeded { max_depth: usize },

    #[error("layout needs a positive spacing, got {0}")]
    InvalidSpacing(f32),
}

/// Configuration could not be read or holds values the layout cannot use.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config syntax: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// A tree document could not be loaded.
#[derive(Error, Debug)]
pub enum TreeError {
    #[error("failed to read tree file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid tree document: {0}")]
    Parse(#[from] toml::de::Error),
}
