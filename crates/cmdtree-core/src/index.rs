//! Flat lookups of commands and groups by identifier
//!
//! Provides [`CommandIndex`], the two maps the tree projection refers into.

use cmdtree_model::{Command, CommandGroup, NodeId, NodeKind, Selected};
use std::collections::HashMap;

/// Command and group lookups for one built tree
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandIndex {
    commands: HashMap<NodeId, Command>,
    groups: HashMap<NodeId, CommandGroup>,
}

impl CommandIndex {
    /// Create empty index
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a command record, returning any record it replaced
    pub fn insert_command(&mut self, command: Command) -> Option<Command> {
        self.commands.insert(command.id.clone(), command)
    }

    /// Insert a group record, returning any record it replaced
    pub fn insert_group(&mut self, group: CommandGroup) -> Option<CommandGroup> {
        self.groups.insert(group.id.clone(), group)
    }

    #[inline]
    #[must_use]
    pub fn command(&self, id: &NodeId) -> Option<&Command> {
        self.commands.get(id)
    }

    #[inline]
    #[must_use]
    pub fn group(&self, id: &NodeId) -> Option<&CommandGroup> {
        self.groups.get(id)
    }

    /// Direct lookup in the map matching the identifier's kind
    #[must_use]
    pub fn get(&self, id: &NodeId) -> Option<Selected> {
        match id.kind() {
            NodeKind::Command => self.command(id).cloned().map(Selected::Command),
            NodeKind::Group => self.group(id).cloned().map(Selected::Group),
        }
    }

    /// Check whether the identifier is a key of its kind's map
    #[inline]
    #[must_use]
    pub fn contains(&self, id: &NodeId) -> bool {
        match id.kind() {
            NodeKind::Command => self.commands.contains_key(id),
            NodeKind::Group => self.groups.contains_key(id),
        }
    }

    /// All command records, unordered
    pub fn commands(&self) -> impl Iterator<Item = &Command> {
        self.commands.values()
    }

    /// All group records, unordered
    pub fn groups(&self) -> impl Iterator<Item = &CommandGroup> {
        self.groups.values()
    }

    #[inline]
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    #[inline]
    #[must_use]
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Check if both lookups are empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty() && self.groups.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cmdtree_model::NamePath;

    fn names(slashed: &str) -> NamePath {
        slashed.parse().unwrap()
    }

    #[test]
    fn index_insert_and_lookup() {
        let mut index = CommandIndex::new();
        let cmd = Command::new(names("vm/create"), None);
        let grp = CommandGroup::new(names("vm"), None);

        assert!(index.insert_command(cmd.clone()).is_none());
        assert!(index.insert_group(grp.clone()).is_none());

        assert_eq!(index.command(&cmd.id), Some(&cmd));
        assert_eq!(index.group(&grp.id), Some(&grp));
        assert_eq!(index.command_count(), 1);
        assert_eq!(index.group_count(), 1);
    }

    #[test]
    fn index_namespaces_are_disjoint() {
        let mut index = CommandIndex::new();
        index.insert_group(CommandGroup::new(names("vm"), None));

        // same path, other kind
        let as_command = NodeId::command(&names("vm"));
        assert!(!index.contains(&as_command));
        assert!(index.get(&as_command).is_none());
        assert!(index.contains(&as_command.to_group()));
    }

    #[test]
    fn index_get_dispatches_on_kind() {
        let mut index = CommandIndex::new();
        let cmd = Command::new(names("vm/start"), None);
        index.insert_command(cmd.clone());

        assert_eq!(index.get(&cmd.id), Some(Selected::Command(cmd)));
    }

    #[test]
    fn index_replaces_duplicate() {
        let mut index = CommandIndex::new();
        index.insert_group(CommandGroup::new(names("vm"), None));
        let replaced = index.insert_group(CommandGroup::new(
            names("vm"),
            Some(cmdtree_model::Help::short("second")),
        ));

        assert!(replaced.is_some());
        assert_eq!(index.group_count(), 1);
        let id = NodeId::group(&names("vm"));
        assert_eq!(index.group(&id).unwrap().help.as_ref().unwrap().short, "second");
    }

    #[test]
    fn index_empty() {
        let index = CommandIndex::new();
        assert!(index.is_empty());
        assert_eq!(index.commands().count(), 0);
        assert_eq!(index.groups().count(), 0);
    }
}
