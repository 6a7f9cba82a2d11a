//! Workspace editor state container
//!
//! [`WorkspaceEditor`] is the single owner of the current [`EditorState`]. It
//! exposes controlled updates only:
//!
//! - fetch lifecycle: [`WorkspaceEditor::begin_fetch`] issues a ticket, and
//!   the completion is reported with [`WorkspaceEditor::apply_response`],
//!   [`WorkspaceEditor::apply_json`] or [`WorkspaceEditor::apply_failure`]
//! - user selection: [`WorkspaceEditor::select`]
//! - picker dialog: [`WorkspaceEditor::open_resource_picker`] and
//!   [`WorkspaceEditor::close_resource_picker`]
//!
//! A completion is installed only if its ticket is newer than the last
//! installed one, so a slow early fetch cannot overwrite a later one. Any
//! failure leaves the last good state in place.

use crate::builder::TreeBuilder;
use crate::config::EditorConfig;
use crate::error::{ConfigError, EditorResult};
use crate::selection::{ResolutionKind, SelectionResolver};
use crate::state::EditorState;
use cmdtree_model::{NodeId, WorkspaceResponse};
use std::fmt::{self, Display, Formatter};

/// Sequence number of one fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FetchTicket(u64);

impl FetchTicket {
    #[inline]
    #[must_use]
    pub fn sequence(self) -> u64 {
        self.0
    }
}

impl Display for FetchTicket {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Result of reporting a successful fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// New state installed
    Applied {
        /// How the selection carried over
        selection: ResolutionKind,
    },
    /// A newer fetch was already installed; nothing changed
    Stale {
        ticket: FetchTicket,
        latest: FetchTicket,
    },
}

impl ApplyOutcome {
    #[inline]
    #[must_use]
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }
}

/// Owner of the editor state for one workspace
#[derive(Debug)]
pub struct WorkspaceEditor {
    config: EditorConfig,
    builder: TreeBuilder,
    state: EditorState,
    issued: u64,
    installed: Option<FetchTicket>,
}

impl WorkspaceEditor {
    /// Editor for `workspace` with nothing loaded yet
    ///
    /// # Errors
    /// Returns [`ConfigError::Invalid`] if the config fails
    /// [`EditorConfig::validate`]
    pub fn new(workspace: impl Into<String>, config: EditorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            builder: TreeBuilder::from_config(&config),
            config,
            state: EditorState::initial(workspace),
            issued: 0,
            installed: None,
        })
    }

    /// Current snapshot
    #[inline]
    #[must_use]
    pub fn state(&self) -> &EditorState {
        &self.state
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Ticket of the last installed response
    #[inline]
    #[must_use]
    pub fn installed(&self) -> Option<FetchTicket> {
        self.installed
    }

    /// Start a fetch; pass the ticket back with its completion
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.issued += 1;
        let ticket = FetchTicket(self.issued);
        tracing::debug!("Fetching workspace {} ({})", self.state.workspace(), ticket);
        ticket
    }

    /// Install a fetched response
    ///
    /// Builds the tree, re-resolves the current selection against it and
    /// replaces the state in one step. Raises the resource picker when the
    /// new forest is empty and the config asks for it.
    ///
    /// # Errors
    /// Returns [`crate::EditorError::Build`] if the response cannot be
    /// normalized; the state is unchanged.
    pub fn apply_response(
        &mut self,
        ticket: FetchTicket,
        response: &WorkspaceResponse,
    ) -> EditorResult<ApplyOutcome> {
        if let Some(stale) = self.check_stale(ticket) {
            return Ok(stale);
        }

        let tree = self.builder.build(response)?;
        let resolution = SelectionResolver::resolve_with_kind(self.state.selected_id(), &tree);
        let show_picker = if tree.is_empty() && self.config.open_picker_when_empty {
            true
        } else {
            self.state.show_resource_picker()
        };

        self.state = self.state.rebuilt(
            response.plane.clone(),
            tree,
            resolution.selected,
            show_picker,
        );
        self.installed = Some(ticket);

        tracing::info!(
            "Installed workspace {} ({}): {} roots, selection {}",
            self.state.workspace(),
            ticket,
            self.state.forest().len(),
            resolution.kind
        );
        Ok(ApplyOutcome::Applied {
            selection: resolution.kind,
        })
    }

    /// Decode a raw response body and install it
    ///
    /// # Errors
    /// Returns [`crate::EditorError::Decode`] for malformed bodies, otherwise
    /// as [`Self::apply_response`]; the state is unchanged on error.
    pub fn apply_json(&mut self, ticket: FetchTicket, body: &str) -> EditorResult<ApplyOutcome> {
        if let Some(stale) = self.check_stale(ticket) {
            return Ok(stale);
        }
        let response = WorkspaceResponse::from_json(body)?;
        self.apply_response(ticket, &response)
    }

    /// Report a failed fetch; the last good state stays installed
    pub fn apply_failure(&mut self, ticket: FetchTicket, reason: &dyn Display) {
        tracing::warn!(
            "Fetch {} for workspace {} failed, keeping current state: {}",
            ticket,
            self.state.workspace(),
            reason
        );
    }

    /// Select the node a user clicked on
    ///
    /// Direct lookup by prefix, no ancestor walk. Returns `false` and keeps
    /// the current selection if the identifier is malformed or not in the tree.
    pub fn select(&mut self, raw_id: &str) -> bool {
        let found = raw_id
            .parse::<NodeId>()
            .ok()
            .and_then(|id| self.state.index().get(&id));

        match found {
            Some(selected) => {
                self.state = self.state.with_selected(Some(selected));
                true
            }
            None => {
                tracing::warn!("Ignoring selection of unknown node {}", raw_id);
                false
            }
        }
    }

    /// Open the resource picker dialog
    pub fn open_resource_picker(&mut self) {
        self.state = self.state.with_resource_picker(true);
    }

    /// Close the resource picker dialog
    pub fn close_resource_picker(&mut self) {
        self.state = self.state.with_resource_picker(false);
    }

    fn check_stale(&self, ticket: FetchTicket) -> Option<ApplyOutcome> {
        let latest = self.installed.filter(|latest| *latest >= ticket)?;
        tracing::warn!(
            "Discarding stale response {} for workspace {}, {} already installed",
            ticket,
            self.state.workspace(),
            latest
        );
        Some(ApplyOutcome::Stale { ticket, latest })
    }
}
