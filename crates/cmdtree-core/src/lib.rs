//! cmdtree Core
//!
//! Normalizes workspace responses into command trees and keeps a user's
//! selection stable across rebuilds.
//!
//! # Architecture
//!
//! ```text
//! WorkspaceResponse → TreeBuilder → CommandTree ─┐
//!                                                ├→ SelectionResolver → EditorState
//!                     previous selection ────────┘
//! ```
//!
//! [`WorkspaceEditor`] owns the installed [`EditorState`] and replaces it
//! wholesale on every successful fetch.
//!
//! # Example
//!
//! ```rust
//! use cmdtree_core::{EditorConfig, WorkspaceEditor};
//!
//! let mut editor = WorkspaceEditor::new("my-workspace", EditorConfig::default()).unwrap();
//! let ticket = editor.begin_fetch();
//! let body = r#"{"plane":"mgmt-plane","commandTree":{"commandGroups":{
//!     "vm":{"names":["vm"],"commands":{"start":{"names":["vm","start"]}}}}}}"#;
//! editor.apply_json(ticket, body).unwrap();
//!
//! assert!(editor.state().is_selected("group:vm"));
//! assert!(editor.select("command:vm/start"));
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod builder;
pub mod config;
pub mod editor;
pub mod error;
pub mod index;
pub mod selection;
pub mod state;

// Re-exports for convenience
pub use builder::{CommandTree, TreeBuilder};
pub use config::{EditorConfig, CONFIG_FILE_NAME, DEFAULT_MAX_DEPTH};
pub use editor::{ApplyOutcome, FetchTicket, WorkspaceEditor};
pub use error::{BuildError, ConfigError, EditorError, EditorResult};
pub use index::CommandIndex;
pub use selection::{Resolution, ResolutionKind, SelectionResolver};
pub use state::EditorState;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with cmdtree core
    pub use crate::{
        CommandTree, EditorConfig, EditorState, SelectionResolver, TreeBuilder, WorkspaceEditor,
    };
    pub use cmdtree_model::{NodeId, NodeKind, Selected, TreeNode, WorkspaceResponse};
}
