//! Testing utilities for the cmdtree workspace
//!
//! Shared fixtures, response builders and proptest strategies.

#![allow(missing_docs)]

use cmdtree_model::{
    Help, NamePath, ResponseCommand, ResponseCommandGroup, ResponseCommandGroups,
    WorkspaceResponse,
};
use indexmap::IndexMap;
use proptest::prelude::*;
use std::collections::{BTreeMap, BTreeSet};

pub const TEST_PLANE: &str = "mgmt-plane";

/// A realistic workspace payload, in the shape the editor backend returns
pub const SAMPLE_RESPONSE_JSON: &str = r#"{
    "name": "network-ws",
    "plane": "mgmt-plane",
    "commandTree": {
        "names": ["aaz"],
        "commandGroups": {
            "network": {
                "names": ["network"],
                "help": {"short": "Manage Azure Network resources."},
                "commandGroups": {
                    "vnet": {
                        "names": ["network", "vnet"],
                        "help": {"short": "Manage virtual networks.", "lines": ["Check out the docs."]},
                        "commands": {
                            "list": {"names": ["network", "vnet", "list"], "help": {"short": "List virtual networks."}},
                            "create": {"names": ["network", "vnet", "create"], "help": {"short": "Create a virtual network."}},
                            "delete": {"names": ["network", "vnet", "delete"]}
                        },
                        "commandGroups": {
                            "subnet": {
                                "names": ["network", "vnet", "subnet"],
                                "commands": {
                                    "show": {"names": ["network", "vnet", "subnet", "show"]}
                                }
                            }
                        }
                    },
                    "dns": {
                        "names": ["network", "dns"],
                        "commands": {}
                    }
                }
            },
            "monitor": {
                "names": ["monitor"],
                "commands": null
            }
        }
    }
}"#;

pub fn path(slashed: &str) -> NamePath {
    slashed.parse().unwrap_or_default()
}

/// Group with no child mappings, from a slash-joined path
pub fn group(slashed: &str) -> ResponseCommandGroup {
    ResponseCommandGroup::new(path(slashed))
}

/// Command from a slash-joined path
pub fn command(slashed: &str) -> ResponseCommand {
    ResponseCommand::new(path(slashed)).with_help(Help::short(format!("{slashed} command")))
}

/// Response with the given root groups, keyed by last name
pub fn response(roots: Vec<ResponseCommandGroup>) -> WorkspaceResponse {
    let groups: ResponseCommandGroups = roots
        .into_iter()
        .map(|g| (g.names.last().unwrap_or_default().to_string(), g))
        .collect();
    WorkspaceResponse::with_groups(TEST_PLANE, groups)
}

/// Response whose tree has no root groups at all
pub fn empty_response() -> WorkspaceResponse {
    WorkspaceResponse {
        plane: TEST_PLANE.to_string(),
        ..WorkspaceResponse::default()
    }
}

pub fn sample_response() -> WorkspaceResponse {
    WorkspaceResponse::from_json(SAMPLE_RESPONSE_JSON).expect("sample fixture is valid JSON")
}

/// Linear chain `g0/g1/.../g{depth-1}` of nested groups
pub fn chain_response(depth: usize) -> WorkspaceResponse {
    let names: Vec<String> = (0..depth).map(|i| format!("g{i}")).collect();
    let mut current: Option<ResponseCommandGroup> = None;
    for len in (1..=depth).rev() {
        let mut next = ResponseCommandGroup::new(NamePath::new(names[..len].to_vec()));
        if let Some(child) = current.take() {
            next = next.with_group(child);
        }
        current = Some(next);
    }
    response(current.into_iter().collect())
}

/// Random group layout used by the property tests
#[derive(Debug, Clone)]
pub struct GroupShape {
    pub commands: Option<BTreeSet<String>>,
    pub groups: Option<BTreeMap<String, GroupShape>>,
}

impl GroupShape {
    /// Materialize at `names`; insertion order is reversed so the builder
    /// has real sorting to do
    pub fn into_group(self, names: NamePath) -> ResponseCommandGroup {
        let commands = self.commands.map(|set| {
            set.into_iter()
                .rev()
                .map(|name| (name.clone(), ResponseCommand::new(names.child(name))))
                .collect::<IndexMap<_, _>>()
        });
        let command_groups = self.groups.map(|map| {
            map.into_iter()
                .rev()
                .map(|(name, shape)| {
                    let child = shape.into_group(names.child(name.clone()));
                    (name, child)
                })
                .collect::<IndexMap<_, _>>()
        });
        ResponseCommandGroup {
            names,
            help: None,
            commands,
            command_groups,
        }
    }
}

fn arb_name() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9-]{0,4}"
}

fn arb_commands() -> impl Strategy<Value = Option<BTreeSet<String>>> {
    prop::option::of(prop::collection::btree_set(arb_name(), 0..4))
}

pub fn arb_group_shape() -> impl Strategy<Value = GroupShape> {
    let leaf = arb_commands().prop_map(|commands| GroupShape {
        commands,
        groups: None,
    });
    leaf.prop_recursive(4, 48, 4, |inner| {
        (
            arb_commands(),
            prop::option::of(prop::collection::btree_map(arb_name(), inner, 0..4)),
        )
            .prop_map(|(commands, groups)| GroupShape { commands, groups })
    })
}

pub fn arb_response() -> impl Strategy<Value = WorkspaceResponse> {
    prop::collection::btree_map(arb_name(), arb_group_shape(), 0..5).prop_map(|roots| {
        let groups: ResponseCommandGroups = roots
            .into_iter()
            .rev()
            .map(|(name, shape)| {
                let group = shape.into_group(NamePath::root().child(name.clone()));
                (name, group)
            })
            .collect();
        WorkspaceResponse::with_groups(TEST_PLANE, groups)
    })
}
