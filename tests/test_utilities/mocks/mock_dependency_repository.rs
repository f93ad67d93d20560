use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tode::prelude::*;

/// Mock DependencyRepository that serves canned trees by subject
///
/// Uploads are keyed by the manifest's package name, searches by the term.
/// Unknown subjects fail the way the real API client does.
#[derive(Default, Clone)]
pub struct MockDependencyRepository {
    trees: HashMap<String, DependencyNode>,
    pub requests: Arc<Mutex<Vec<(String, String, u8)>>>,
}

impl MockDependencyRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tree(mut self, subject: &str, tree: DependencyNode) -> Self {
        self.trees.insert(subject.to_string(), tree);
        self
    }

    /// (route, subject, depth) of every request received so far
    pub fn get_requests(&self) -> Vec<(String, String, u8)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl DependencyRepository for MockDependencyRepository {
    async fn fetch_dependencies(
        &self,
        payload: &RequestPayload,
        depth: SearchDepth,
    ) -> Result<DependencyNode> {
        self.requests.lock().unwrap().push((
            payload.route().to_string(),
            payload.subject().to_string(),
            depth.value(),
        ));

        match self.trees.get(payload.subject()) {
            Some(tree) => Ok(tree.clone()),
            None => Err(TodeError::FetchFailed {
                message: "An error occurred while fetching dependencies (HTTP 500)".to_string(),
            }
            .into()),
        }
    }
}
