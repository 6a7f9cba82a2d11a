//! Immutable editor state snapshots
//!
//! An [`EditorState`] bundles the built tree with the selection derived from
//! it. Snapshots are never mutated in place; the editor replaces them whole.

use crate::builder::CommandTree;
use crate::index::CommandIndex;
use cmdtree_model::{NodeId, Selected, TreeNode};
use std::sync::Arc;

/// Everything the views render for one workspace
#[derive(Debug, Clone)]
pub struct EditorState {
    workspace: String,
    plane: String,
    tree: Arc<CommandTree>,
    selected: Option<Selected>,
    show_resource_picker: bool,
}

impl EditorState {
    /// State before the first fetch completes
    #[must_use]
    pub fn initial(workspace: impl Into<String>) -> Self {
        Self {
            workspace: workspace.into(),
            plane: String::new(),
            tree: Arc::new(CommandTree::empty()),
            selected: None,
            show_resource_picker: false,
        }
    }

    /// Successor with a newly built tree and its resolved selection
    #[must_use]
    pub(crate) fn rebuilt(
        &self,
        plane: String,
        tree: CommandTree,
        selected: Option<Selected>,
        show_resource_picker: bool,
    ) -> Self {
        Self {
            workspace: self.workspace.clone(),
            plane,
            tree: Arc::new(tree),
            selected,
            show_resource_picker,
        }
    }

    /// Successor with a different selection
    #[must_use]
    pub(crate) fn with_selected(&self, selected: Option<Selected>) -> Self {
        Self {
            selected,
            ..self.clone()
        }
    }

    /// Successor with the picker flag set
    #[must_use]
    pub(crate) fn with_resource_picker(&self, show: bool) -> Self {
        Self {
            show_resource_picker: show,
            ..self.clone()
        }
    }

    #[inline]
    #[must_use]
    pub fn workspace(&self) -> &str {
        &self.workspace
    }

    /// Plane reported by the last applied response
    #[inline]
    #[must_use]
    pub fn plane(&self) -> &str {
        &self.plane
    }

    /// Shared handle to the built tree
    #[inline]
    #[must_use]
    pub fn tree(&self) -> &Arc<CommandTree> {
        &self.tree
    }

    #[inline]
    #[must_use]
    pub fn forest(&self) -> &[TreeNode] {
        self.tree.forest()
    }

    #[inline]
    #[must_use]
    pub fn index(&self) -> &CommandIndex {
        self.tree.index()
    }

    /// Entity shown in the detail pane
    #[inline]
    #[must_use]
    pub fn selected(&self) -> Option<&Selected> {
        self.selected.as_ref()
    }

    #[inline]
    #[must_use]
    pub fn selected_id(&self) -> Option<&NodeId> {
        self.selected.as_ref().map(Selected::id)
    }

    /// Predicate for the tree view: is the node with this wire id selected
    #[must_use]
    pub fn is_selected(&self, raw_id: &str) -> bool {
        self.selected_id().is_some_and(|id| id.as_str() == raw_id)
    }

    /// Whether the resource picker dialog should be open
    #[inline]
    #[must_use]
    pub fn show_resource_picker(&self) -> bool {
        self.show_resource_picker
    }
}
