use crate::shared::Result;
use crate::visualization::domain::{DependencyNode, ParsedFile, SearchDepth};
use async_trait::async_trait;
use serde::Serialize;

/// What is sent to the dependency API
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RequestPayload {
    /// A parsed package.json whose declared dependencies are resolved
    Upload(ParsedFile),
    /// A single npm package name
    Search(String),
}

impl RequestPayload {
    /// Path segment selecting the API endpoint
    pub fn route(&self) -> &'static str {
        match self {
            RequestPayload::Upload(_) => "upload",
            RequestPayload::Search(_) => "search",
        }
    }

    /// Human-readable subject, used in progress messages
    pub fn subject(&self) -> &str {
        match self {
            RequestPayload::Upload(file) => &file.name,
            RequestPayload::Search(term) => term,
        }
    }
}

/// DependencyRepository port for resolving dependency trees
///
/// This port abstracts the remote dependency-resolution service. The
/// service itself is opaque: only the request and response shapes matter.
///
/// # Async Support
/// Implementations must be `Send + Sync` so the client can be shared with
/// the tokio runtime.
#[async_trait]
pub trait DependencyRepository: Send + Sync {
    /// Resolves the dependency tree for `payload` down to `depth` levels
    ///
    /// # Arguments
    /// * `payload` - Uploaded manifest or search term
    /// * `depth` - Number of dependency levels to resolve
    ///
    /// # Returns
    /// The root of the resolved dependency tree
    ///
    /// # Errors
    /// Returns `FetchFailed` with a user-visible message if:
    /// - The request cannot be sent (transport failure)
    /// - The API answers with a non-success status
    /// - The response carries no tree
    async fn fetch_dependencies(
        &self,
        payload: &RequestPayload,
        depth: SearchDepth,
    ) -> Result<DependencyNode>;
}
