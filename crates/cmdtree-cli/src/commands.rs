//! Subcommand bodies, separated from argument parsing

use crate::render;
use anyhow::Result;
use cmdtree_core::{CommandTree, EditorConfig, SelectionResolver, TreeBuilder};
use cmdtree_model::WorkspaceResponse;

/// Text produced by a subcommand and whether it passed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Rendered output for stdout
    pub text: String,
    /// Exit status 0 when set
    pub passed: bool,
}

impl Outcome {
    fn ok(text: String) -> Self {
        Self { text, passed: true }
    }
}

fn build(response: &WorkspaceResponse, config: &EditorConfig) -> Result<CommandTree> {
    Ok(TreeBuilder::from_config(config).build(response)?)
}

fn empty_hint(tree: &CommandTree, config: &EditorConfig) -> Option<&'static str> {
    (tree.is_empty() && config.open_picker_when_empty)
        .then_some("no command groups; add resources with the resource picker\n")
}

/// `tree`: outline (or JSON) with the reconciled selection marked
///
/// # Errors
/// Returns error if the tree exceeds the configured depth
pub fn tree(
    response: &WorkspaceResponse,
    config: &EditorConfig,
    previous: Option<&str>,
    json: bool,
) -> Result<Outcome> {
    let tree = build(response, config)?;
    let resolution = SelectionResolver::resolve_raw_with_kind(previous, &tree);

    if json {
        let value = render::tree_json(&response.plane, &tree, &resolution);
        return Ok(Outcome::ok(serde_json::to_string_pretty(&value)? + "\n"));
    }

    let mut text = render::outline(&tree, resolution.selected.as_ref().map(|s| s.id()));
    if let Some(hint) = empty_hint(&tree, config) {
        text.push_str(hint);
    }
    Ok(Outcome::ok(text))
}

/// `resolve`: only the reconciled selection
///
/// # Errors
/// Returns error if the tree exceeds the configured depth
pub fn resolve_selection(
    response: &WorkspaceResponse,
    config: &EditorConfig,
    previous: Option<&str>,
) -> Result<Outcome> {
    let tree = build(response, config)?;
    let resolution = SelectionResolver::resolve_raw_with_kind(previous, &tree);
    Ok(Outcome::ok(render::resolution_line(&resolution) + "\n"))
}

/// `check`: consistency report, fails on dangling or unordered entries
///
/// # Errors
/// Returns error if the tree exceeds the configured depth
pub fn check(response: &WorkspaceResponse, config: &EditorConfig) -> Result<Outcome> {
    let tree = build(response, config)?;
    let (text, passed) = render::check_report(&tree);
    if !passed {
        tracing::warn!("Consistency check failed for plane {:?}", response.plane);
    }
    Ok(Outcome { text, passed })
}
