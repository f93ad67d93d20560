use crate::visualization::domain::SearchDepth;
use std::path::PathBuf;

/// Where the tree to analyze comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisSource {
    /// A package.json on the local filesystem
    Upload(PathBuf),
    /// An npm package name typed by the user
    Search(String),
}

/// AnalyzeRequest - Internal request DTO for the dependency analysis use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzeRequest {
    pub source: AnalysisSource,
    pub depth: SearchDepth,
}

impl AnalyzeRequest {
    pub fn new(source: AnalysisSource, depth: SearchDepth) -> Self {
        Self { source, depth }
    }

    pub fn upload(path: impl Into<PathBuf>, depth: SearchDepth) -> Self {
        Self::new(AnalysisSource::Upload(path.into()), depth)
    }

    pub fn search(term: impl Into<String>, depth: SearchDepth) -> Self {
        Self::new(AnalysisSource::Search(term.into()), depth)
    }
}
