//! Selection reconciliation across rebuilds
//!
//! After a rebuild the previous selection is looked up again. A command that
//! still exists stays selected. Otherwise the selection floats up to the
//! nearest surviving group on the same name path, probing the group with the
//! command's own full path first. With nothing to keep, the first root group
//! is selected, and an empty forest selects nothing.

use crate::builder::CommandTree;
use cmdtree_model::{NodeId, Selected};
use std::fmt::{self, Display, Formatter};

/// How a selection was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionKind {
    /// The previous identifier itself still exists
    Preserved,
    /// A group on the previous identifier's path was found
    Ancestor,
    /// First root group, previous selection absent or unresolvable
    Default,
    /// Empty forest
    Empty,
}

impl Display for ResolutionKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Preserved => "preserved",
            Self::Ancestor => "ancestor",
            Self::Default => "default",
            Self::Empty => "empty",
        };
        f.write_str(label)
    }
}

/// Outcome of resolving a selection against a tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub selected: Option<Selected>,
    pub kind: ResolutionKind,
}

/// Re-resolves previous selections against freshly built trees
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionResolver;

impl SelectionResolver {
    /// Resolve `previous` against `tree`
    ///
    /// A returned selection always names an identifier present in the tree's
    /// lookups.
    #[must_use]
    pub fn resolve(previous: Option<&NodeId>, tree: &CommandTree) -> Option<Selected> {
        Self::resolve_with_kind(previous, tree).selected
    }

    /// Resolve a wire identifier
    ///
    /// Strings that are not `command:` or `group:` identifiers are treated as
    /// unresolvable and fall through to the default.
    #[must_use]
    pub fn resolve_raw(previous: Option<&str>, tree: &CommandTree) -> Option<Selected> {
        Self::resolve_raw_with_kind(previous, tree).selected
    }

    /// [`Self::resolve_raw`], reporting which rule applied
    #[must_use]
    pub fn resolve_raw_with_kind(previous: Option<&str>, tree: &CommandTree) -> Resolution {
        let parsed = previous.and_then(|raw| match raw.parse::<NodeId>() {
            Ok(id) => Some(id),
            Err(err) => {
                tracing::debug!("Ignoring previous selection: {}", err);
                None
            }
        });
        Self::resolve_with_kind(parsed.as_ref(), tree)
    }

    /// Resolve and report which rule applied
    #[must_use]
    pub fn resolve_with_kind(previous: Option<&NodeId>, tree: &CommandTree) -> Resolution {
        if let Some(resolution) = previous.and_then(|id| Self::reconcile(id, tree)) {
            return resolution;
        }

        let fallback = tree
            .forest()
            .first()
            .and_then(|root| tree.index().group(&root.id))
            .cloned()
            .map(Selected::Group);

        let kind = if fallback.is_some() {
            ResolutionKind::Default
        } else {
            ResolutionKind::Empty
        };
        tracing::debug!(
            "Selection {} -> {} ({})",
            previous.map_or("<none>", NodeId::as_str),
            fallback.as_ref().map_or("<none>", |s| s.id().as_str()),
            kind
        );
        Resolution {
            selected: fallback,
            kind,
        }
    }

    /// Exact command match, then the ancestor walk over group identifiers
    fn reconcile(previous: &NodeId, tree: &CommandTree) -> Option<Resolution> {
        let index = tree.index();

        if previous.is_command() {
            if let Some(command) = index.command(previous) {
                return Some(Resolution {
                    selected: Some(Selected::Command(command.clone())),
                    kind: ResolutionKind::Preserved,
                });
            }
        }

        let mut candidate = previous.to_group();
        loop {
            if let Some(group) = index.group(&candidate) {
                let kind = if &candidate == previous {
                    ResolutionKind::Preserved
                } else {
                    ResolutionKind::Ancestor
                };
                tracing::debug!("Selection {} -> {} ({})", previous, candidate, kind);
                return Some(Resolution {
                    selected: Some(Selected::Group(group.clone())),
                    kind,
                });
            }
            candidate = candidate.parent()?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TreeBuilder;
    use cmdtree_test_utils::{command, empty_response, group, response};

    fn tree() -> CommandTree {
        let resp = response(vec![
            group("a").with_group(
                group("a/b")
                    .with_command(command("a/b/keep"))
                    .with_group(group("a/b/c")),
            ),
            group("x"),
        ]);
        TreeBuilder::new().build(&resp).unwrap()
    }

    fn id(raw: &str) -> NodeId {
        raw.parse().unwrap()
    }

    #[test]
    fn existing_command_is_preserved() {
        let res = SelectionResolver::resolve_with_kind(Some(&id("command:a/b/keep")), &tree());
        assert_eq!(res.kind, ResolutionKind::Preserved);
        assert_eq!(res.selected.unwrap().id().as_str(), "command:a/b/keep");
    }

    #[test]
    fn existing_group_is_preserved() {
        let res = SelectionResolver::resolve_with_kind(Some(&id("group:a/b/c")), &tree());
        assert_eq!(res.kind, ResolutionKind::Preserved);
        assert_eq!(res.selected.unwrap().id().as_str(), "group:a/b/c");
    }

    #[test]
    fn vanished_command_probes_own_path_as_group_first() {
        // command:a/b/c is gone, but group:a/b/c exists
        let res = SelectionResolver::resolve_with_kind(Some(&id("command:a/b/c")), &tree());
        assert_eq!(res.kind, ResolutionKind::Ancestor);
        assert_eq!(res.selected.unwrap().id().as_str(), "group:a/b/c");
    }

    #[test]
    fn vanished_command_floats_to_ancestor() {
        let selected =
            SelectionResolver::resolve(Some(&id("command:a/b/gone")), &tree()).unwrap();
        assert_eq!(selected.id().as_str(), "group:a/b");
    }

    #[test]
    fn vanished_group_floats_to_ancestor() {
        let selected =
            SelectionResolver::resolve(Some(&id("group:a/q/r/s")), &tree()).unwrap();
        assert_eq!(selected.id().as_str(), "group:a");
    }

    #[test]
    fn unrelated_root_falls_back_to_first_root() {
        let res = SelectionResolver::resolve_with_kind(Some(&id("group:nope/deeper")), &tree());
        assert_eq!(res.kind, ResolutionKind::Default);
        assert_eq!(res.selected.unwrap().id().as_str(), "group:a");
    }

    #[test]
    fn no_previous_selects_first_root() {
        let res = SelectionResolver::resolve_with_kind(None, &tree());
        assert_eq!(res.kind, ResolutionKind::Default);
        assert_eq!(res.selected.unwrap().id().as_str(), "group:a");
    }

    #[test]
    fn empty_forest_selects_nothing() {
        let empty = TreeBuilder::new().build(&empty_response()).unwrap();
        let res = SelectionResolver::resolve_with_kind(Some(&id("command:a/b")), &empty);
        assert_eq!(res.kind, ResolutionKind::Empty);
        assert!(res.selected.is_none());
        assert!(SelectionResolver::resolve(None, &empty).is_none());
    }

    #[test]
    fn malformed_raw_id_falls_through() {
        let selected = SelectionResolver::resolve_raw(Some("resource:a/b"), &tree()).unwrap();
        assert_eq!(selected.id().as_str(), "group:a");

        let selected = SelectionResolver::resolve_raw(Some(""), &tree()).unwrap();
        assert_eq!(selected.id().as_str(), "group:a");
    }

    #[test]
    fn raw_id_reports_resolution_kind() {
        let res = SelectionResolver::resolve_raw_with_kind(Some("command:a/b/gone"), &tree());
        assert_eq!(res.kind, ResolutionKind::Ancestor);
        assert_eq!(res.selected.unwrap().id().as_str(), "group:a/b");

        let res = SelectionResolver::resolve_raw_with_kind(Some("a/b"), &tree());
        assert_eq!(res.kind, ResolutionKind::Default);
    }

    #[test]
    fn raw_id_resolves_like_parsed() {
        let selected = SelectionResolver::resolve_raw(Some("command:a/b/keep"), &tree()).unwrap();
        assert_eq!(selected.id().as_str(), "command:a/b/keep");
    }

    #[test]
    fn single_segment_miss_stops_walk() {
        // group:zz has one segment and is absent, so the walk ends without a match
        let res = SelectionResolver::resolve_with_kind(Some(&id("command:zz")), &tree());
        assert_eq!(res.kind, ResolutionKind::Default);
    }
}
