//! Editor configuration
//!
//! Every field has a default, so an empty `.cmdtree.toml` is valid.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Conventional config file name, looked up in the working directory
pub const CONFIG_FILE_NAME: &str = ".cmdtree.toml";

/// Default group nesting limit
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Editor configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EditorConfig {
    /// Maximum group nesting accepted by the tree builder (root groups are depth 1)
    pub max_depth: usize,

    /// Raise the resource picker whenever an applied tree has no groups
    pub open_picker_when_empty: bool,
}

impl EditorConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With max nesting depth
    #[inline]
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// With automatic picker behavior
    #[inline]
    #[must_use]
    pub fn with_open_picker_when_empty(mut self, open: bool) -> Self {
        self.open_picker_when_empty = open;
        self
    }

    /// Parse and validate TOML text
    ///
    /// # Errors
    /// Returns error on malformed TOML, unknown keys or a zero depth limit
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a config file
    ///
    /// # Errors
    /// Returns error if the file cannot be read or fails [`Self::from_toml_str`]
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text =
            std::fs::read_to_string(path).map_err(|source| ConfigError::io_error(path, source))?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!("Loaded editor config from {}", path.display());
        Ok(config)
    }

    /// Check value constraints
    ///
    /// # Errors
    /// Returns [`ConfigError::Invalid`] if `max_depth` is zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == 0 {
            return Err(ConfigError::Invalid(
                "max_depth must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            open_picker_when_empty: true,
        }
    }
}
