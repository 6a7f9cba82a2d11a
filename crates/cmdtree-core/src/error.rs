//! Error types for cmdtree core
//!
//! Provides error handling for:
//! - Tree construction (nesting limits)
//! - Configuration loading
//! - Applying fetched workspace responses to the editor

use cmdtree_model::NodeId;
use std::path::PathBuf;

/// Errors while normalizing a workspace response
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    /// Group nesting deeper than the configured limit
    #[error("group {id} is nested at depth {depth}, limit is {limit}")]
    DepthExceeded {
        /// First group found beyond the limit
        id: NodeId,
        /// Its depth, root groups being depth 1
        depth: usize,
        /// Configured maximum
        limit: usize,
    },
}

/// Errors loading editor configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("io error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config text is not valid TOML for [`crate::EditorConfig`]
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Values parsed but are unusable
    #[error("invalid config value: {0}")]
    Invalid(String),
}

impl ConfigError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors applying a fetched response to the editor
///
/// The installed state is never modified when one of these is returned.
#[derive(Debug, thiserror::Error)]
pub enum EditorError {
    /// Response body is not a workspace payload
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Tree construction failed
    #[error("build error: {0}")]
    Build(#[from] BuildError),
}

/// Result type alias for editor operations
pub type EditorResult<T> = Result<T, EditorError>;
