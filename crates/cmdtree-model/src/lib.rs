//! cmdtree Model
//!
//! Data types shared by the command tree builder, the selection resolver and
//! their callers.
//!
//! # Core Concepts
//!
//! - [`NamePath`]: names from the tree root down to an entity
//! - [`NodeId`]: tagged identifier, `command:<path>` or `group:<path>` on the wire
//! - [`Command`] / [`CommandGroup`]: flat lookup records
//! - [`TreeNode`] / [`TreeLeaf`]: hierarchical projection for display
//! - [`WorkspaceResponse`]: the nested, name-keyed backend payload
//!
//! # Example
//!
//! ```rust
//! use cmdtree_model::{NamePath, NodeId};
//!
//! let path: NamePath = "network/vnet".parse().unwrap();
//! let id = NodeId::group(&path);
//! assert_eq!(id.to_string(), "group:network/vnet");
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod entity;
mod id;
mod path;
mod response;
mod tree;

pub use entity::{Command, CommandGroup, Help, Selected};
pub use id::{collate, IdError, NodeId, NodeKind};
pub use path::{NamePath, PATH_SEPARATOR};
pub use response::{
    ResponseCommand, ResponseCommandGroup, ResponseCommandGroups, ResponseCommandTree,
    ResponseCommands, WorkspaceResponse,
};
pub use tree::{walk_forest, TreeLeaf, TreeNode};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
