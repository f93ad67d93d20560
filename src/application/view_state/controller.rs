use super::DependencyViewState;
use crate::application::dto::{AnalysisSource, AnalyzeRequest};
use crate::ports::inbound::DependencyAnalysisPort;
use crate::ports::outbound::ProgressReporter;
use crate::shared::Result;
use crate::visualization::domain::{Point, PopupEffect, PopupEvent, Scene, SearchDepth};
use crate::visualization::services::SceneBuilder;

/// DependencyViewController - drives the view state with user actions
///
/// Owns the view state and the analysis port. Rendering, clicks and the
/// popup's Analyze action all go through here so the state only ever
/// changes through its transition methods.
///
/// # Type Parameters
/// * `P` - DependencyAnalysisPort implementation
/// * `R` - ProgressReporter implementation
pub struct DependencyViewController<P, R> {
    analysis: P,
    reporter: R,
    scene_builder: SceneBuilder,
    depth: SearchDepth,
    state: DependencyViewState,
}

impl<P, R> DependencyViewController<P, R>
where
    P: DependencyAnalysisPort,
    R: ProgressReporter,
{
    pub fn new(analysis: P, reporter: R, scene_builder: SceneBuilder, depth: SearchDepth) -> Self {
        let state = DependencyViewState::new(analysis.recent_files());
        Self {
            analysis,
            reporter,
            scene_builder,
            depth,
            state,
        }
    }

    pub fn state(&self) -> &DependencyViewState {
        &self.state
    }

    pub fn depth(&self) -> SearchDepth {
        self.depth
    }

    /// Submits a new analysis and applies its outcome to the view state
    ///
    /// On failure the error message is kept in the state (the previous
    /// graph stays untouched) and the error is also returned.
    pub async fn submit(&mut self, source: AnalysisSource) -> Result<()> {
        let id = self.state.begin_request();
        let outcome = self
            .analysis
            .analyze(AnalyzeRequest::new(source, self.depth))
            .await;

        let (applied, result) = match outcome {
            Ok(response) => (Ok(response), Ok(())),
            Err(e) => (Err(e.to_string()), Err(e)),
        };

        if !self.state.complete_request(id, applied) {
            self.reporter.report_error(&format!(
                "⚠️  Warning: Applied response of stale request {}",
                id
            ));
        }

        result
    }

    /// Renders the current graph, `None` when nothing is displayed
    pub fn scene(&self) -> Option<Scene<'_>> {
        self.state
            .dependencies()
            .map(|tree| self.scene_builder.render(tree))
    }

    /// Handles a click at `point` in canvas coordinates
    ///
    /// Returns whether a node was hit (and the popup opened).
    pub fn click(&mut self, point: Point) -> bool {
        let mut clicked = None;
        let hit = match self.state.dependencies() {
            Some(tree) => self
                .scene_builder
                .render(tree)
                .dispatch_click(point, |node| clicked = Some(node.clone())),
            None => false,
        };

        if let Some(node) = clicked {
            self.state.handle_popup(PopupEvent::NodeClicked(node));
        }
        hit
    }

    /// Opens the popup for the first node named `name` (pre-order)
    pub fn select_by_name(&mut self, name: &str) -> bool {
        let node = self
            .state
            .dependencies()
            .and_then(|tree| tree.find(name))
            .cloned();

        match node {
            Some(node) => {
                self.state.handle_popup(PopupEvent::NodeClicked(node));
                true
            }
            None => false,
        }
    }

    pub fn close_popup(&mut self) {
        self.state.handle_popup(PopupEvent::CloseClicked);
    }

    pub fn backdrop_click(&mut self) {
        self.state.handle_popup(PopupEvent::BackdropClicked);
    }

    /// Runs the popup's Analyze action
    ///
    /// Closes the popup, clears the displayed graph and then searches for
    /// the selected package. Returns `Ok(false)` when no node was selected.
    pub async fn analyze_selected(&mut self) -> Result<bool> {
        match self.state.handle_popup(PopupEvent::AnalyzeClicked) {
            PopupEffect::Analyze { query } => {
                self.state.clear_graph();
                self.submit(AnalysisSource::Search(query)).await?;
                Ok(true)
            }
            PopupEffect::None => Ok(false),
        }
    }
}
