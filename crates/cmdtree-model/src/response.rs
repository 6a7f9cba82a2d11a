//! Workspace response as returned by the editor backend
//!
//! Groups and commands are keyed by arbitrary strings; the keys carry no
//! meaning beyond uniqueness, each entry's own `names` is authoritative.
//! Absent and `null` mappings both deserialize to `None`.

use crate::entity::Help;
use crate::path::NamePath;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Name-keyed child commands
pub type ResponseCommands = IndexMap<String, ResponseCommand>;

/// Name-keyed child groups
pub type ResponseCommandGroups = IndexMap<String, ResponseCommandGroup>;

/// Top-level workspace payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceResponse {
    /// Workspace name, when the backend echoes it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Control/data plane the workspace targets
    #[serde(default)]
    pub plane: String,

    pub command_tree: ResponseCommandTree,
}

/// Root of the command tree
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseCommandTree {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command_groups: Option<ResponseCommandGroups>,
}

/// Command entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseCommand {
    pub names: NamePath,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help: Option<Help>,
}

/// Group entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseCommandGroup {
    pub names: NamePath,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help: Option<Help>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commands: Option<ResponseCommands>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command_groups: Option<ResponseCommandGroups>,
}

impl WorkspaceResponse {
    /// Decode from JSON text
    ///
    /// # Errors
    /// Returns the decoder error for malformed payloads
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Response with the given root groups
    #[must_use]
    pub fn with_groups(plane: impl Into<String>, groups: ResponseCommandGroups) -> Self {
        Self {
            name: None,
            plane: plane.into(),
            command_tree: ResponseCommandTree {
                command_groups: Some(groups),
            },
        }
    }

    /// Root groups, if the tree enumerates any
    #[inline]
    #[must_use]
    pub fn root_groups(&self) -> Option<&ResponseCommandGroups> {
        self.command_tree.command_groups.as_ref()
    }
}

impl ResponseCommand {
    /// Command at `names`
    #[inline]
    #[must_use]
    pub fn new(names: impl Into<NamePath>) -> Self {
        Self {
            names: names.into(),
            help: None,
        }
    }

    /// With help
    #[inline]
    #[must_use]
    pub fn with_help(mut self, help: Help) -> Self {
        self.help = Some(help);
        self
    }
}

impl ResponseCommandGroup {
    /// Group at `names` with no child mappings
    #[inline]
    #[must_use]
    pub fn new(names: impl Into<NamePath>) -> Self {
        Self {
            names: names.into(),
            ..Self::default()
        }
    }

    /// With help
    #[inline]
    #[must_use]
    pub fn with_help(mut self, help: Help) -> Self {
        self.help = Some(help);
        self
    }

    /// Add a command keyed by its last name; creates the mapping if absent
    #[must_use]
    pub fn with_command(mut self, command: ResponseCommand) -> Self {
        let key = command.names.last().unwrap_or_default().to_string();
        self.commands.get_or_insert_with(IndexMap::new).insert(key, command);
        self
    }

    /// Present but empty command mapping
    #[inline]
    #[must_use]
    pub fn with_empty_commands(mut self) -> Self {
        self.commands.get_or_insert_with(IndexMap::new);
        self
    }

    /// Add a subgroup keyed by its last name; creates the mapping if absent
    #[must_use]
    pub fn with_group(mut self, group: ResponseCommandGroup) -> Self {
        let key = group.names.last().unwrap_or_default().to_string();
        self.command_groups
            .get_or_insert_with(IndexMap::new)
            .insert(key, group);
        self
    }

    /// Present but empty subgroup mapping
    #[inline]
    #[must_use]
    pub fn with_empty_groups(mut self) -> Self {
        self.command_groups.get_or_insert_with(IndexMap::new);
        self
    }
}
