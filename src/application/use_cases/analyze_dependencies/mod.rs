use crate::application::dto::{AnalysisSource, AnalyzeRequest, AnalyzeResponse};
use crate::ports::inbound::DependencyAnalysisPort;
use crate::ports::outbound::{
    DependencyRepository, ManifestReader, ProgressReporter, RequestPayload, SessionStore,
};
use crate::shared::error::TodeError;
use crate::shared::Result;
use crate::visualization::domain::{DependencyNode, ParsedFile, RecentFiles, SearchDepth};
use crate::visualization::services::TreeValidator;
use async_trait::async_trait;
use chrono::Utc;
use std::path::Path;

/// Longest search term accepted, matching the npm package name limit
const MAX_SEARCH_TERM_LENGTH: usize = 214;

/// AnalyzeDependenciesUseCase - Core use case for resolving a dependency tree
///
/// This use case orchestrates reading an uploaded manifest (or validating a
/// search term), calling the dependency API and validating what comes back,
/// using generic dependency injection for all infrastructure dependencies.
///
/// # Type Parameters
/// * `MR` - ManifestReader implementation
/// * `DR` - DependencyRepository implementation
/// * `SS` - SessionStore implementation
/// * `PR` - ProgressReporter implementation
pub struct AnalyzeDependenciesUseCase<MR, DR, SS, PR> {
    manifest_reader: MR,
    dependency_repository: DR,
    session_store: SS,
    progress_reporter: PR,
}

impl<MR, DR, SS, PR> AnalyzeDependenciesUseCase<MR, DR, SS, PR>
where
    MR: ManifestReader,
    DR: DependencyRepository,
    SS: SessionStore,
    PR: ProgressReporter,
{
    /// Creates a new AnalyzeDependenciesUseCase with injected dependencies
    pub fn new(
        manifest_reader: MR,
        dependency_repository: DR,
        session_store: SS,
        progress_reporter: PR,
    ) -> Self {
        Self {
            manifest_reader,
            dependency_repository,
            session_store,
            progress_reporter,
        }
    }

    /// Executes the dependency analysis use case
    ///
    /// # Arguments
    /// * `request` - Source (upload or search) and requested depth
    ///
    /// # Returns
    /// AnalyzeResponse containing the validated tree and the recent files
    pub async fn execute(&self, request: AnalyzeRequest) -> Result<AnalyzeResponse> {
        // Step 1: Build the request payload
        let payload = self.build_payload(&request.source)?;

        // Step 2: Fetch the tree from the dependency API
        let tree = self.fetch_tree(&payload, request.depth).await?;

        // Step 3: Validate the tree before it reaches the renderer
        if let Err(e) = TreeValidator::validate(&tree, request.depth) {
            self.progress_reporter.report_error(&format!("❌ {}", e));
            return Err(e);
        }

        // Only manifests that produced a tree are listed
        if let AnalysisSource::Upload(path) = &request.source {
            self.remember_file(path);
        }

        self.progress_reporter.report_completion(&format!(
            "✅ Resolved {} package(s) for {}",
            tree.node_count(),
            tree.name
        ));

        Ok(AnalyzeResponse::new(tree, self.recent_files()))
    }

    /// Loads the recent-files list for this session
    ///
    /// A missing, unreadable or corrupt stored value is treated as an empty
    /// list; the latter two are reported as warnings.
    pub fn recent_files(&self) -> RecentFiles {
        let raw = match self.session_store.load(RecentFiles::SESSION_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return RecentFiles::new(),
            Err(e) => {
                self.progress_reporter.report_error(&format!(
                    "⚠️  Warning: Could not load recent files: {}",
                    e
                ));
                return RecentFiles::new();
            }
        };

        serde_json::from_str(&raw).unwrap_or_else(|e| {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Ignoring corrupt recent files list: {}",
                e
            ));
            RecentFiles::new()
        })
    }

    fn build_payload(&self, source: &AnalysisSource) -> Result<RequestPayload> {
        match source {
            AnalysisSource::Upload(path) => {
                let parsed = self.read_manifest(path)?;
                Ok(RequestPayload::Upload(parsed))
            }
            AnalysisSource::Search(term) => {
                let term = validate_search_term(term)?;
                self.progress_reporter
                    .report(&format!("🔎 Searching for package: {}", term));
                Ok(RequestPayload::Search(term))
            }
        }
    }

    /// Reads and parses the uploaded manifest, reporting progress
    fn read_manifest(&self, path: &Path) -> Result<ParsedFile> {
        self.progress_reporter.report(&format!(
            "📖 Loading package.json from: {}",
            path.display()
        ));

        let content = self.manifest_reader.read_manifest(path)?;
        let parsed = ParsedFile::parse(&content, path)?;

        self.progress_reporter.report(&format!(
            "✅ Detected {} declared dependenc{}",
            parsed.dependency_count(),
            if parsed.dependency_count() == 1 { "y" } else { "ies" }
        ));

        Ok(parsed)
    }

    /// Records an uploaded file in the session's recent-files list
    ///
    /// Storage failures are reported but never fail the analysis.
    fn remember_file(&self, path: &Path) {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let mut recent = self.recent_files();
        if !recent.add(file_name, Utc::now()) {
            return;
        }

        let saved = serde_json::to_string(&recent)
            .map_err(anyhow::Error::from)
            .and_then(|json| self.session_store.save(RecentFiles::SESSION_KEY, &json));
        if let Err(e) = saved {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Could not save recent files: {}",
                e
            ));
        }
    }

    async fn fetch_tree(
        &self,
        payload: &RequestPayload,
        depth: SearchDepth,
    ) -> Result<DependencyNode> {
        self.progress_reporter.report_activity(&format!(
            "🌐 Resolving dependencies of {} ({} level(s))...",
            payload.subject(),
            depth
        ));

        match self
            .dependency_repository
            .fetch_dependencies(payload, depth)
            .await
        {
            Ok(tree) => Ok(tree),
            Err(e) => {
                self.progress_reporter.report_error(&format!("❌ {}", e));
                Err(e)
            }
        }
    }
}

/// Trims a search term and checks it could be an npm package name
fn validate_search_term(term: &str) -> Result<String> {
    let trimmed = term.trim();
    let reason = if trimmed.is_empty() {
        Some("search term is empty".to_string())
    } else if trimmed.chars().count() > MAX_SEARCH_TERM_LENGTH {
        Some(format!(
            "search term exceeds {} characters",
            MAX_SEARCH_TERM_LENGTH
        ))
    } else if trimmed.chars().any(char::is_whitespace) {
        Some("package names cannot contain whitespace".to_string())
    } else {
        None
    };

    match reason {
        Some(reason) => Err(TodeError::InvalidSearchTerm {
            term: term.to_string(),
            reason,
        }
        .into()),
        None => Ok(trimmed.to_string()),
    }
}

#[async_trait(?Send)]
impl<MR, DR, SS, PR> DependencyAnalysisPort for AnalyzeDependenciesUseCase<MR, DR, SS, PR>
where
    MR: ManifestReader,
    DR: DependencyRepository,
    SS: SessionStore,
    PR: ProgressReporter,
{
    async fn analyze(&self, request: AnalyzeRequest) -> Result<AnalyzeResponse> {
        self.execute(request).await
    }

    fn recent_files(&self) -> RecentFiles {
        AnalyzeDependenciesUseCase::recent_files(self)
    }
}

#[cfg(test)]
mod tests;
