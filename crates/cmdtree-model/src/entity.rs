//! Flat entity records held in the lookups
//!
//! [`Command`] and [`CommandGroup`] are metadata only. Hierarchy lives in the
//! tree projection ([`crate::tree`]).

use crate::id::{NodeId, NodeKind};
use crate::path::NamePath;
use serde::{Deserialize, Serialize};

/// Help text attached to a command or group
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Help {
    /// One-line summary
    pub short: String,

    /// Optional detail lines
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lines: Option<Vec<String>>,
}

impl Help {
    /// Help with only a summary
    #[inline]
    #[must_use]
    pub fn short(short: impl Into<String>) -> Self {
        Self {
            short: short.into(),
            lines: None,
        }
    }

    /// With detail lines
    #[inline]
    #[must_use]
    pub fn with_lines(mut self, lines: Vec<String>) -> Self {
        self.lines = Some(lines);
        self
    }
}

/// Leaf command record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    pub id: NodeId,
    pub names: NamePath,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help: Option<Help>,
}

/// Command group record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandGroup {
    pub id: NodeId,
    pub names: NamePath,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help: Option<Help>,
}

impl Command {
    /// Build record, deriving the identifier from `names`
    #[must_use]
    pub fn new(names: NamePath, help: Option<Help>) -> Self {
        Self {
            id: NodeId::command(&names),
            names,
            help,
        }
    }
}

impl CommandGroup {
    /// Build record, deriving the identifier from `names`
    #[must_use]
    pub fn new(names: NamePath, help: Option<Help>) -> Self {
        Self {
            id: NodeId::group(&names),
            names,
            help,
        }
    }
}

/// The entity handed to a detail view
///
/// Group content and command content views each accept exactly one variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Selected {
    /// A command is selected
    Command(Command),
    /// A group is selected
    Group(CommandGroup),
}

impl Selected {
    /// Identifier of the selected entity
    #[inline]
    #[must_use]
    pub fn id(&self) -> &NodeId {
        match self {
            Self::Command(cmd) => &cmd.id,
            Self::Group(group) => &group.id,
        }
    }

    #[inline]
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        self.id().kind()
    }

    /// Name path of the selected entity
    #[inline]
    #[must_use]
    pub fn names(&self) -> &NamePath {
        match self {
            Self::Command(cmd) => &cmd.names,
            Self::Group(group) => &group.names,
        }
    }

    /// Help of the selected entity
    #[inline]
    #[must_use]
    pub fn help(&self) -> Option<&Help> {
        match self {
            Self::Command(cmd) => cmd.help.as_ref(),
            Self::Group(group) => group.help.as_ref(),
        }
    }

    /// Borrow as command, if it is one
    #[inline]
    #[must_use]
    pub fn as_command(&self) -> Option<&Command> {
        match self {
            Self::Command(cmd) => Some(cmd),
            Self::Group(_) => None,
        }
    }

    /// Borrow as group, if it is one
    #[inline]
    #[must_use]
    pub fn as_group(&self) -> Option<&CommandGroup> {
        match self {
            Self::Group(group) => Some(group),
            Self::Command(_) => None,
        }
    }
}
