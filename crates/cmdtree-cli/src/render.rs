//! Text and JSON rendering of built trees

use cmdtree_core::{CommandTree, Resolution};
use cmdtree_model::{walk_forest, NodeId};
use serde_json::{json, Value};
use std::fmt::Write;

/// Indented outline, two spaces per level, selected line marked with `*`
///
/// Each group is followed by its command leaves, then its subgroups.
#[must_use]
pub fn outline(tree: &CommandTree, selected: Option<&NodeId>) -> String {
    let mut out = String::new();
    let marker = |id: &NodeId| if Some(id) == selected { '*' } else { ' ' };

    walk_forest(tree.forest(), |node, depth| {
        let indent = "  ".repeat(depth);
        let _ = writeln!(out, "{}{} {}", marker(&node.id), indent, node.id);
        for leaf in node.leaves() {
            let _ = writeln!(out, "{}{}   {}", marker(&leaf.id), indent, leaf.id);
        }
    });
    out
}

/// One-line summary of how the selection was resolved
#[must_use]
pub fn resolution_line(resolution: &Resolution) -> String {
    match &resolution.selected {
        Some(selected) => format!("{} ({})", selected.id(), resolution.kind),
        None => format!("(none) ({})", resolution.kind),
    }
}

/// Machine-readable form of a tree and its resolved selection
#[must_use]
pub fn tree_json(plane: &str, tree: &CommandTree, resolution: &Resolution) -> Value {
    json!({
        "plane": plane,
        "selected": resolution.selected.as_ref().map(|s| s.id().as_str()),
        "resolution": resolution.kind.to_string(),
        "groups": tree.index().group_count(),
        "commands": tree.index().command_count(),
        "forest": tree.forest(),
    })
}

/// Consistency report; the flag is `true` when the tree is sound
#[must_use]
pub fn check_report(tree: &CommandTree) -> (String, bool) {
    let dangling = tree.dangling_references();
    let unordered = tree.ordering_violations();
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{} groups, {} commands, {} roots",
        tree.index().group_count(),
        tree.index().command_count(),
        tree.forest().len()
    );
    for id in &dangling {
        let _ = writeln!(out, "dangling reference: {id}");
    }
    for id in &unordered {
        let _ = writeln!(out, "children out of order under: {id}");
    }

    let ok = dangling.is_empty() && unordered.is_empty();
    out.push_str(if ok { "OK\n" } else { "FAILED\n" });
    (out, ok)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cmdtree_core::{SelectionResolver, TreeBuilder};
    use cmdtree_test_utils::{command, group, response};
    use pretty_assertions::assert_eq;

    fn tree() -> CommandTree {
        TreeBuilder::new()
            .build(&response(vec![group("vm")
                .with_command(command("vm/start"))
                .with_group(group("vm/disk").with_command(command("vm/disk/attach")))]))
            .unwrap()
    }

    #[test]
    fn outline_marks_selection() {
        let tree = tree();
        let selected: NodeId = "command:vm/start".parse().unwrap();
        let text = outline(&tree, Some(&selected));

        assert_eq!(
            text,
            "  group:vm\n\
             *   command:vm/start\n\
             \x20   group:vm/disk\n\
             \x20     command:vm/disk/attach\n"
        );
    }

    #[test]
    fn resolution_line_formats() {
        let tree = tree();
        let res = SelectionResolver::resolve_with_kind(None, &tree);
        assert_eq!(resolution_line(&res), "group:vm (default)");
    }

    #[test]
    fn json_has_forest_and_selection() {
        let tree = tree();
        let res = SelectionResolver::resolve_with_kind(None, &tree);
        let value = tree_json("mgmt-plane", &tree, &res);

        assert_eq!(value["selected"], "group:vm");
        assert_eq!(value["groups"], 2);
        assert_eq!(value["commands"], 2);
        assert_eq!(value["forest"][0]["id"], "group:vm");
    }

    #[test]
    fn check_report_ok() {
        let (text, ok) = check_report(&tree());
        assert!(ok);
        assert!(text.ends_with("OK\n"));
    }
}
