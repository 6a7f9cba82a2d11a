//! Tagged node identifiers
//!
//! A [`NodeId`] names either a command or a command group. On the wire it is a
//! single string, `command:<path>` or `group:<path>`, where `<path>` is the
//! name path joined by `/`. Inside the crate the kind is an explicit tag and
//! the prefix is only produced or parsed at the serialization boundary.

use crate::path::{NamePath, PATH_SEPARATOR};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Entity kind encoded by an identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// Leaf command
    Command,
    /// Command group
    Group,
}

impl NodeKind {
    /// Wire prefix, including the trailing colon
    #[inline]
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Command => "command:",
            Self::Group => "group:",
        }
    }

    fn from_wire(s: &str) -> Option<(Self, &str)> {
        if let Some(rest) = s.strip_prefix(Self::Command.prefix()) {
            Some((Self::Command, rest))
        } else {
            s.strip_prefix(Self::Group.prefix())
                .map(|rest| (Self::Group, rest))
        }
    }
}

impl Display for NodeKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Command => f.write_str("command"),
            Self::Group => f.write_str("group"),
        }
    }
}

/// Identifier of a command or command group
///
/// Equality and hashing follow the wire string. Ordering is the locale-style
/// collation of the wire string, see [`collate`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NodeId {
    kind: NodeKind,
    wire: String,
}

impl NodeId {
    /// Identifier for an entity of `kind` at `path`
    #[must_use]
    pub fn new(kind: NodeKind, path: &NamePath) -> Self {
        let mut wire = String::from(kind.prefix());
        wire.push_str(&path.joined());
        Self { kind, wire }
    }

    /// Command identifier for `path`
    #[inline]
    #[must_use]
    pub fn command(path: &NamePath) -> Self {
        Self::new(NodeKind::Command, path)
    }

    /// Group identifier for `path`
    #[inline]
    #[must_use]
    pub fn group(path: &NamePath) -> Self {
        Self::new(NodeKind::Group, path)
    }

    /// Entity kind
    #[inline]
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub fn is_command(&self) -> bool {
        self.kind == NodeKind::Command
    }

    #[inline]
    #[must_use]
    pub fn is_group(&self) -> bool {
        self.kind == NodeKind::Group
    }

    /// Full wire string, prefix included
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.wire
    }

    /// The slash-joined name path after the prefix
    #[inline]
    #[must_use]
    pub fn suffix(&self) -> &str {
        &self.wire[self.kind.prefix().len()..]
    }

    /// Name path recovered from the wire suffix
    #[must_use]
    pub fn path(&self) -> NamePath {
        // infallible
        self.suffix().parse().unwrap_or_default()
    }

    /// Same name path re-tagged as a group
    #[must_use]
    pub fn to_group(&self) -> Self {
        match self.kind {
            NodeKind::Group => self.clone(),
            NodeKind::Command => Self {
                kind: NodeKind::Group,
                wire: format!("{}{}", NodeKind::Group.prefix(), self.suffix()),
            },
        }
    }

    /// Drop the last `/`-delimited segment
    ///
    /// Returns `None` once the suffix has a single segment.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        // prefixes never contain the separator
        let cut = self.wire.rfind(PATH_SEPARATOR)?;
        Some(Self {
            kind: self.kind,
            wire: self.wire[..cut].to_string(),
        })
    }
}

impl PartialEq for NodeId {
    fn eq(&self, other: &Self) -> bool {
        self.wire == other.wire
    }
}

impl Eq for NodeId {}

impl Hash for NodeId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.wire.hash(state);
    }
}

impl PartialOrd for NodeId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for NodeId {
    fn cmp(&self, other: &Self) -> Ordering {
        collate(&self.wire, &other.wire)
    }
}

/// Case-insensitive collation of identifier strings
///
/// Letters compare without regard to case first, so `alpha` sorts before
/// `Zeta`. Strings equal up to case put lowercase first, and the raw bytes
/// break any remaining tie, which keeps the order total and consistent with
/// equality.
#[must_use]
pub fn collate(a: &str, b: &str) -> Ordering {
    let folded = |s: &str| s.chars().flat_map(char::to_lowercase).collect::<Vec<_>>();
    folded(a)
        .cmp(&folded(b))
        .then_with(|| {
            a.chars()
                .map(char::is_uppercase)
                .cmp(b.chars().map(char::is_uppercase))
        })
        .then_with(|| a.cmp(b))
}

impl Display for NodeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.wire)
    }
}

impl FromStr for NodeId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match NodeKind::from_wire(s) {
            Some((kind, _)) => Ok(Self {
                kind,
                wire: s.to_string(),
            }),
            None => Err(IdError::UnknownPrefix(s.to_string())),
        }
    }
}

impl TryFrom<String> for NodeId {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match NodeKind::from_wire(&value) {
            Some((kind, _)) => Ok(Self { kind, wire: value }),
            None => Err(IdError::UnknownPrefix(value)),
        }
    }
}

impl From<NodeId> for String {
    fn from(id: NodeId) -> Self {
        id.wire
    }
}

/// Errors parsing wire identifiers
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdError {
    /// Neither `command:` nor `group:`
    #[error("unknown identifier prefix: '{0}'")]
    UnknownPrefix(String),
}
