//! Reading responses and config files from disk

use anyhow::{Context, Result};
use cmdtree_core::{EditorConfig, CONFIG_FILE_NAME};
use cmdtree_model::WorkspaceResponse;
use std::path::{Path, PathBuf};

/// Decode a workspace response stored as JSON
///
/// # Errors
/// Returns error if the file cannot be read or is not a valid response
pub fn load_response(path: &Path) -> Result<WorkspaceResponse> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    WorkspaceResponse::from_json(&text)
        .with_context(|| format!("{} is not a workspace response", path.display()))
}

/// Resolve the editor config
///
/// An explicit path must exist. Without one, `.cmdtree.toml` in `dir` is
/// used when present, and defaults otherwise.
///
/// # Errors
/// Returns error if the chosen file cannot be read or is invalid
pub fn load_config(explicit: Option<&Path>, dir: &Path) -> Result<EditorConfig> {
    let path: PathBuf = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let candidate = dir.join(CONFIG_FILE_NAME);
            if !candidate.is_file() {
                tracing::debug!("No {} in {}, using defaults", CONFIG_FILE_NAME, dir.display());
                return Ok(EditorConfig::default());
            }
            candidate
        }
    };
    EditorConfig::load_from_path(&path)
        .with_context(|| format!("invalid config {}", path.display()))
}
