use crate::application::dto::AnalyzeResponse;
use crate::visualization::domain::{
    DependencyNode, PopupEffect, PopupEvent, PopupState, RecentFiles,
};
use std::fmt;
use uuid::Uuid;

/// Identifies one submitted fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(Uuid);

impl RequestId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// All state behind the dependency view
///
/// Every change goes through one of the transition methods below; fields
/// are never mutated from outside.
#[derive(Debug, Default)]
pub struct DependencyViewState {
    dependencies: Option<DependencyNode>,
    loading: bool,
    error: Option<String>,
    popup: PopupState,
    recent_files: RecentFiles,
    active_request: Option<RequestId>,
}

impl DependencyViewState {
    pub fn new(recent_files: RecentFiles) -> Self {
        Self {
            recent_files,
            ..Self::default()
        }
    }

    pub fn dependencies(&self) -> Option<&DependencyNode> {
        self.dependencies.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn popup(&self) -> &PopupState {
        &self.popup
    }

    pub fn recent_files(&self) -> &RecentFiles {
        &self.recent_files
    }

    pub fn active_request(&self) -> Option<RequestId> {
        self.active_request
    }

    /// Marks a new fetch as in flight and makes it the active request
    pub fn begin_request(&mut self) -> RequestId {
        let id = RequestId::new();
        self.loading = true;
        self.error = None;
        self.active_request = Some(id);
        id
    }

    /// Applies the outcome of the fetch identified by `id`
    ///
    /// The outcome is applied even when `id` is no longer the active
    /// request, so the last response to resolve wins. A failure leaves the
    /// previous graph in place. Returns whether `id` was still active.
    pub fn complete_request(
        &mut self,
        id: RequestId,
        outcome: Result<AnalyzeResponse, String>,
    ) -> bool {
        let is_current = self.active_request == Some(id);
        if is_current {
            self.active_request = None;
            self.loading = false;
        }

        match outcome {
            Ok(response) => {
                self.dependencies = Some(response.tree);
                self.recent_files = response.recent_files;
                self.popup = PopupState::Closed;
            }
            Err(message) => self.error = Some(message),
        }

        is_current
    }

    /// Feeds a popup event through the popup state machine
    pub fn handle_popup(&mut self, event: PopupEvent) -> PopupEffect {
        let (next, effect) = std::mem::take(&mut self.popup).transition(event);
        self.popup = next;
        effect
    }

    pub fn clear_graph(&mut self) {
        self.dependencies = None;
    }
}
