//! Command tree construction
//!
//! [`TreeBuilder`] turns a nested [`WorkspaceResponse`] into a [`CommandTree`]:
//! flat command and group lookups plus an ordered forest referring into them.
//!
//! # Ordering
//!
//! Leaves, child nodes and the forest itself are each sorted ascending by
//! identifier, independently of one another, using the case-insensitive
//! collation of [`cmdtree_model::collate`].
//!
//! # Nesting
//!
//! The walk keeps its own stack of open groups instead of recursing, and
//! rejects responses nested deeper than [`TreeBuilder::max_depth`].

use crate::config::{EditorConfig, DEFAULT_MAX_DEPTH};
use crate::error::BuildError;
use crate::index::CommandIndex;
use cmdtree_model::{
    walk_forest, Command, CommandGroup, NamePath, NodeId, ResponseCommandGroup, TreeLeaf,
    TreeNode, WorkspaceResponse,
};

/// Normalized lookups and forest for one workspace response
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandTree {
    index: CommandIndex,
    forest: Vec<TreeNode>,
}

impl CommandTree {
    /// Tree with no groups
    #[inline]
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Command and group lookups
    #[inline]
    #[must_use]
    pub fn index(&self) -> &CommandIndex {
        &self.index
    }

    /// Root nodes, sorted by identifier
    #[inline]
    #[must_use]
    pub fn forest(&self) -> &[TreeNode] {
        &self.forest
    }

    /// Check if the forest has no roots
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.forest.is_empty()
    }

    /// Identifiers referenced from the forest but missing from the lookups
    ///
    /// Always empty for trees produced by [`TreeBuilder`].
    #[must_use]
    pub fn dangling_references(&self) -> Vec<NodeId> {
        let mut dangling = Vec::new();
        walk_forest(&self.forest, |node, _| {
            if !self.index.contains(&node.id) {
                dangling.push(node.id.clone());
            }
            for leaf in node.leaves() {
                if !self.index.contains(&leaf.id) {
                    dangling.push(leaf.id.clone());
                }
            }
        });
        dangling
    }

    /// Nodes whose leaves or child nodes are out of identifier order
    ///
    /// A pseudo-node for the forest itself is reported as the empty group
    /// identifier `group:`.
    #[must_use]
    pub fn ordering_violations(&self) -> Vec<NodeId> {
        let mut violations = Vec::new();
        if !is_sorted_by_id(self.forest.iter().map(|n| &n.id)) {
            violations.push(NodeId::group(&NamePath::root()));
        }
        walk_forest(&self.forest, |node, _| {
            let leaves_sorted = is_sorted_by_id(node.leaves().iter().map(|l| &l.id));
            let nodes_sorted = is_sorted_by_id(node.nodes().iter().map(|n| &n.id));
            if !(leaves_sorted && nodes_sorted) {
                violations.push(node.id.clone());
            }
        });
        violations
    }
}

fn is_sorted_by_id<'a>(ids: impl Iterator<Item = &'a NodeId>) -> bool {
    let mut prev: Option<&NodeId> = None;
    for id in ids {
        if prev.is_some_and(|p| p > id) {
            return false;
        }
        prev = Some(id);
    }
    true
}

/// Builds [`CommandTree`]s from workspace responses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeBuilder {
    max_depth: usize,
}

/// A group whose children are still being visited
struct OpenGroup<'a> {
    node: TreeNode,
    depth: usize,
    pending: Option<indexmap::map::Values<'a, String, ResponseCommandGroup>>,
}

impl TreeBuilder {
    /// Builder with the default nesting limit
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Builder honoring the config's nesting limit
    #[inline]
    #[must_use]
    pub fn from_config(config: &EditorConfig) -> Self {
        Self {
            max_depth: config.max_depth,
        }
    }

    /// With max nesting depth
    #[inline]
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Configured nesting limit
    #[inline]
    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Normalize a response
    ///
    /// A response without root groups yields an empty tree.
    ///
    /// # Errors
    /// Returns [`BuildError::DepthExceeded`] if any group sits deeper than
    /// the limit; no partial tree is produced.
    pub fn build(&self, response: &WorkspaceResponse) -> Result<CommandTree, BuildError> {
        let mut index = CommandIndex::new();
        let mut forest = Vec::new();

        if let Some(roots) = response.root_groups() {
            for root in roots.values() {
                self.build_root(root, &mut index, &mut forest)?;
            }
        }
        sort_by_id(&mut forest, |n| &n.id);

        tracing::debug!(
            "Built command tree: {} roots, {} groups, {} commands",
            forest.len(),
            index.group_count(),
            index.command_count()
        );

        Ok(CommandTree { index, forest })
    }

    /// Depth-first walk of one root group, pushing the finished node onto `forest`
    fn build_root<'a>(
        &self,
        root: &'a ResponseCommandGroup,
        index: &mut CommandIndex,
        forest: &mut Vec<TreeNode>,
    ) -> Result<(), BuildError> {
        let mut stack = vec![self.open(root, 1, index)?];

        while let Some(top) = stack.last_mut() {
            if let Some(child) = top.pending.as_mut().and_then(Iterator::next) {
                let depth = top.depth + 1;
                let opened = self.open(child, depth, index)?;
                stack.push(opened);
            } else if let Some(mut finished) = stack.pop() {
                if let Some(nodes) = finished.node.nodes.as_mut() {
                    sort_by_id(nodes, |n| &n.id);
                }
                match stack.last_mut() {
                    Some(parent) => parent
                        .node
                        .nodes
                        .get_or_insert_with(Vec::new)
                        .push(finished.node),
                    None => forest.push(finished.node),
                }
            }
        }
        Ok(())
    }

    /// Record a group and its commands, returning it with its subgroups pending
    fn open<'a>(
        &self,
        group: &'a ResponseCommandGroup,
        depth: usize,
        index: &mut CommandIndex,
    ) -> Result<OpenGroup<'a>, BuildError> {
        let record = CommandGroup::new(group.names.clone(), group.help.clone());
        if depth > self.max_depth {
            return Err(BuildError::DepthExceeded {
                id: record.id,
                depth,
                limit: self.max_depth,
            });
        }

        let mut node = TreeNode::new(record.id.clone(), record.names.clone());
        if let Some(previous) = index.insert_group(record) {
            tracing::warn!("Duplicate group identifier {}, keeping the later one", previous.id);
        }

        if let Some(commands) = &group.commands {
            let mut leaves = Vec::with_capacity(commands.len());
            for entry in commands.values() {
                let command = Command::new(entry.names.clone(), entry.help.clone());
                leaves.push(TreeLeaf {
                    id: command.id.clone(),
                    names: command.names.clone(),
                });
                if let Some(previous) = index.insert_command(command) {
                    tracing::warn!(
                        "Duplicate command identifier {}, keeping the later one",
                        previous.id
                    );
                }
            }
            sort_by_id(&mut leaves, |l| &l.id);
            node.leaves = Some(leaves);
        }

        // present mapping means present list, even when it stays empty
        if group.command_groups.is_some() {
            node.nodes = Some(Vec::new());
        }

        Ok(OpenGroup {
            node,
            depth,
            pending: group.command_groups.as_ref().map(|groups| groups.values()),
        })
    }
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn sort_by_id<T>(items: &mut [T], id: impl Fn(&T) -> &NodeId) {
    items.sort_by(|a, b| id(a).cmp(id(b)));
}
