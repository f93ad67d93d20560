use crate::visualization::domain::{DependencyNode, RecentFiles};

/// AnalyzeResponse - Internal response DTO for the dependency analysis use case
///
/// Carries the validated tree along with the recent-files list as it stands
/// after the request.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzeResponse {
    pub tree: DependencyNode,
    pub recent_files: RecentFiles,
}

impl AnalyzeResponse {
    pub fn new(tree: DependencyNode, recent_files: RecentFiles) -> Self {
        Self { tree, recent_files }
    }
}
