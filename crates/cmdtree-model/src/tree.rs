//! Tree projection for hierarchical display
//!
//! Nodes reference entities by identifier only. `leaves` and `nodes` are
//! `Option`s because an absent list means the group did not enumerate that
//! kind of child at all, which is not the same as an empty enumeration.

use crate::id::NodeId;
use crate::path::NamePath;
use serde::{Deserialize, Serialize};

/// Reference from a tree node to a command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeLeaf {
    pub id: NodeId,
    pub names: NamePath,
}

/// Group node in the forest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    pub id: NodeId,
    pub names: NamePath,

    /// Child command references, sorted by identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leaves: Option<Vec<TreeLeaf>>,

    /// Child group nodes, sorted by identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nodes: Option<Vec<TreeNode>>,
}

impl TreeNode {
    /// Node without any recorded children
    #[inline]
    #[must_use]
    pub fn new(id: NodeId, names: NamePath) -> Self {
        Self {
            id,
            names,
            leaves: None,
            nodes: None,
        }
    }

    /// Child leaves, empty when absent
    #[inline]
    #[must_use]
    pub fn leaves(&self) -> &[TreeLeaf] {
        self.leaves.as_deref().unwrap_or_default()
    }

    /// Child nodes, empty when absent
    #[inline]
    #[must_use]
    pub fn nodes(&self) -> &[TreeNode] {
        self.nodes.as_deref().unwrap_or_default()
    }

    /// Pre-order walk over this node and every descendant node
    ///
    /// Uses an explicit stack; `f` receives each node with its depth
    /// (this node is depth 0).
    pub fn walk<'a, F>(&'a self, mut f: F)
    where
        F: FnMut(&'a TreeNode, usize),
    {
        let mut stack = vec![(self, 0usize)];
        while let Some((node, depth)) = stack.pop() {
            f(node, depth);
            for child in node.nodes().iter().rev() {
                stack.push((child, depth + 1));
            }
        }
    }

    /// Find a node by identifier among this node and its descendants
    #[must_use]
    pub fn find(&self, id: &NodeId) -> Option<&TreeNode> {
        let mut found = None;
        self.walk(|node, _| {
            if found.is_none() && &node.id == id {
                found = Some(node);
            }
        });
        found
    }
}

/// Walk every node of a forest in display order
pub fn walk_forest<'a, F>(forest: &'a [TreeNode], mut f: F)
where
    F: FnMut(&'a TreeNode, usize),
{
    for root in forest {
        root.walk(&mut f);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(path: &[&str]) -> TreeNode {
        let names = NamePath::from(path);
        TreeNode::new(NodeId::group(&names), names)
    }

    fn sample() -> TreeNode {
        let mut root = node(&["a"]);
        let mut b = node(&["a", "b"]);
        b.nodes = Some(vec![node(&["a", "b", "c"])]);
        root.nodes = Some(vec![b, node(&["a", "d"])]);
        root
    }

    #[test]
    fn walk_is_pre_order_with_depth() {
        let root = sample();
        let mut seen = Vec::new();
        root.walk(|n, d| seen.push((n.id.to_string(), d)));

        assert_eq!(
            seen,
            vec![
                ("group:a".to_string(), 0),
                ("group:a/b".to_string(), 1),
                ("group:a/b/c".to_string(), 2),
                ("group:a/d".to_string(), 1),
            ]
        );
    }

    #[test]
    fn find_descendant() {
        let root = sample();
        let target: NodeId = "group:a/b/c".parse().unwrap();
        assert_eq!(root.find(&target).map(|n| n.names.len()), Some(3));

        let missing: NodeId = "group:zzz".parse().unwrap();
        assert!(root.find(&missing).is_none());
    }

    #[test]
    fn absent_lists_read_as_empty() {
        let n = node(&["x"]);
        assert!(n.leaves().is_empty());
        assert!(n.nodes().is_empty());
    }

    #[test]
    fn absent_lists_are_omitted_on_the_wire() {
        let mut n = node(&["x"]);
        let json = serde_json::to_value(&n).unwrap();
        assert!(json.get("leaves").is_none());
        assert!(json.get("nodes").is_none());

        n.leaves = Some(Vec::new());
        let json = serde_json::to_value(&n).unwrap();
        assert_eq!(json["leaves"], serde_json::json!([]));
    }

    #[test]
    fn walk_forest_visits_all_roots() {
        let forest = vec![sample(), node(&["z"])];
        let mut count = 0;
        walk_forest(&forest, |_, _| count += 1);
        assert_eq!(count, 5);
    }
}
