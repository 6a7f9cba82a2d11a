//! # cmdtree CLI
//!
//! Loads a saved workspace response, builds its command tree and reports
//! the result:
//!
//! - `tree`: indented outline or JSON, reconciled selection marked
//! - `resolve`: where a previous selection lands after the rebuild
//! - `check`: lookup and ordering consistency, non-zero exit on failure

pub mod commands;
pub mod load;
pub mod logging;
pub mod render;

pub use commands::Outcome;

/// Version of the CLI crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
