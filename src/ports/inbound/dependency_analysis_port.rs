use crate::application::dto::{AnalyzeRequest, AnalyzeResponse};
use crate::shared::Result;
use crate::visualization::domain::RecentFiles;
use async_trait::async_trait;

/// DependencyAnalysisPort - Inbound port for the dependency analysis use case
///
/// This port defines the interface that driving adapters (the CLI and the
/// interactive prompt) use to request a dependency tree.
///
/// Futures are not required to be `Send`: analysis runs on a single
/// logical thread and console reporters keep interior state.
#[async_trait(?Send)]
pub trait DependencyAnalysisPort {
    /// Resolves and validates the dependency tree for `request`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The manifest cannot be read or parsed
    /// - The search term is invalid
    /// - The dependency API fails or returns no tree
    /// - The returned tree fails validation
    async fn analyze(&self, request: AnalyzeRequest) -> Result<AnalyzeResponse>;

    /// Recently uploaded manifests for the current session
    fn recent_files(&self) -> RecentFiles;
}
