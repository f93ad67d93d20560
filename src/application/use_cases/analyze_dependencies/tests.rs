use super::*;
use crate::visualization::domain::PackageStatus;
use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::Mutex;

// Mock implementations for testing
struct MockManifestReader {
    content: Option<String>,
}

impl ManifestReader for MockManifestReader {
    fn read_manifest(&self, path: &Path) -> Result<String> {
        match &self.content {
            Some(content) => Ok(content.clone()),
            None => Err(TodeError::ManifestNotFound {
                path: path.to_path_buf(),
                suggestion: "check the path".to_string(),
            }
            .into()),
        }
    }
}

struct MockDependencyRepository {
    tree: Option<DependencyNode>,
    calls: Mutex<Vec<(RequestPayload, u8)>>,
}

impl MockDependencyRepository {
    fn returning(tree: DependencyNode) -> Self {
        Self {
            tree: Some(tree),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn failing() -> Self {
        Self {
            tree: None,
            calls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl DependencyRepository for MockDependencyRepository {
    async fn fetch_dependencies(
        &self,
        payload: &RequestPayload,
        depth: SearchDepth,
    ) -> Result<DependencyNode> {
        self.calls
            .lock()
            .unwrap()
            .push((payload.clone(), depth.value()));
        self.tree.clone().ok_or_else(|| {
            TodeError::FetchFailed {
                message: "An error occurred while fetching dependencies".to_string(),
            }
            .into()
        })
    }
}

#[derive(Default)]
struct MockSessionStore {
    values: RefCell<HashMap<String, String>>,
}

impl MockSessionStore {
    fn with(key: &str, value: &str) -> Self {
        let store = Self::default();
        store
            .values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }
}

impl SessionStore for MockSessionStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[derive(Default)]
struct MockProgressReporter {
    errors: RefCell<Vec<String>>,
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, _message: &str) {}
    fn report_activity(&self, _message: &str) {}
    fn report_error(&self, message: &str) {
        self.errors.borrow_mut().push(message.to_string());
    }
    fn report_completion(&self, _message: &str) {}
}

type TestUseCase = AnalyzeDependenciesUseCase<
    MockManifestReader,
    MockDependencyRepository,
    MockSessionStore,
    MockProgressReporter,
>;

const MANIFEST: &str = r#"{"name": "my-app", "version": "1.0.0", "dependencies": {"react": "^18.2.0"}}"#;

fn sample_tree() -> DependencyNode {
    DependencyNode::new("my-app", "1.0.0").with_dependency(
        DependencyNode::new("react", "18.2.0")
            .with_status(PackageStatus::Ok)
            .with_dependency(DependencyNode::new("loose-envify", "1.4.0")),
    )
}

fn use_case(
    manifest: Option<&str>,
    repository: MockDependencyRepository,
    store: MockSessionStore,
) -> TestUseCase {
    AnalyzeDependenciesUseCase::new(
        MockManifestReader {
            content: manifest.map(str::to_string),
        },
        repository,
        store,
        MockProgressReporter::default(),
    )
}

fn depth(n: u8) -> SearchDepth {
    SearchDepth::new(n).unwrap()
}

#[tokio::test]
async fn test_upload_sends_parsed_manifest() {
    let uc = use_case(
        Some(MANIFEST),
        MockDependencyRepository::returning(sample_tree()),
        MockSessionStore::default(),
    );

    let response = uc
        .execute(AnalyzeRequest::upload("/work/package.json", depth(3)))
        .await
        .unwrap();

    assert_eq!(response.tree, sample_tree());
    let calls = uc.dependency_repository.calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    match &calls[0] {
        (RequestPayload::Upload(parsed), 3) => {
            assert_eq!(parsed.name, "my-app");
            assert_eq!(parsed.dependencies.get("react").unwrap(), "^18.2.0");
        }
        other => panic!("unexpected call: {:?}", other),
    }
}

#[tokio::test]
async fn test_upload_records_recent_file() {
    let uc = use_case(
        Some(MANIFEST),
        MockDependencyRepository::returning(sample_tree()),
        MockSessionStore::default(),
    );

    let response = uc
        .execute(AnalyzeRequest::upload("/work/package.json", depth(3)))
        .await
        .unwrap();

    assert_eq!(response.recent_files.file_names(), vec!["package.json"]);
    let stored = uc
        .session_store
        .values
        .borrow()
        .get(RecentFiles::SESSION_KEY)
        .cloned()
        .unwrap();
    assert!(stored.starts_with('['));
    assert!(stored.contains("\"fileName\":\"package.json\""));
}

#[tokio::test]
async fn test_upload_same_file_twice_is_recorded_once() {
    let uc = use_case(
        Some(MANIFEST),
        MockDependencyRepository::returning(sample_tree()),
        MockSessionStore::default(),
    );

    for _ in 0..2 {
        uc.execute(AnalyzeRequest::upload("/a/package.json", depth(2)))
            .await
            .unwrap();
    }

    assert_eq!(uc.recent_files().len(), 1);
}

#[tokio::test]
async fn test_search_trims_term() {
    let uc = use_case(
        None,
        MockDependencyRepository::returning(sample_tree()),
        MockSessionStore::default(),
    );

    uc.execute(AnalyzeRequest::search("  react ", depth(3)))
        .await
        .unwrap();

    let calls = uc.dependency_repository.calls.lock().unwrap();
    assert_eq!(calls[0], (RequestPayload::Search("react".to_string()), 3));
}

#[tokio::test]
async fn test_search_does_not_touch_recent_files() {
    let uc = use_case(
        None,
        MockDependencyRepository::returning(sample_tree()),
        MockSessionStore::default(),
    );

    let response = uc
        .execute(AnalyzeRequest::search("react", depth(3)))
        .await
        .unwrap();

    assert!(response.recent_files.is_empty());
    assert!(uc.session_store.values.borrow().is_empty());
}

#[tokio::test]
async fn test_invalid_search_terms_are_rejected_before_fetch() {
    let uc = use_case(
        None,
        MockDependencyRepository::returning(sample_tree()),
        MockSessionStore::default(),
    );

    for term in ["", "   ", "two words"] {
        let err = uc
            .execute(AnalyzeRequest::search(term, depth(3)))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Invalid search term"));
    }

    let long = "a".repeat(MAX_SEARCH_TERM_LENGTH + 1);
    assert!(uc
        .execute(AnalyzeRequest::search(long, depth(3)))
        .await
        .is_err());

    assert!(uc.dependency_repository.calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_missing_manifest_aborts_before_fetch() {
    let uc = use_case(
        None,
        MockDependencyRepository::returning(sample_tree()),
        MockSessionStore::default(),
    );

    let err = uc
        .execute(AnalyzeRequest::upload("/nope/package.json", depth(3)))
        .await
        .unwrap_err();

    assert!(err.to_string().contains("package.json file not found"));
    assert!(uc.dependency_repository.calls.lock().unwrap().is_empty());
    assert!(uc.recent_files().is_empty());
}

#[tokio::test]
async fn test_malformed_manifest_is_reported() {
    let uc = use_case(
        Some("{ not json"),
        MockDependencyRepository::returning(sample_tree()),
        MockSessionStore::default(),
    );

    let err = uc
        .execute(AnalyzeRequest::upload("package.json", depth(3)))
        .await
        .unwrap_err();

    assert!(err.to_string().contains("Failed to parse package.json"));
    assert!(uc.recent_files().is_empty());
}

#[tokio::test]
async fn test_fetch_failure_is_propagated_and_reported() {
    let uc = use_case(
        None,
        MockDependencyRepository::failing(),
        MockSessionStore::default(),
    );

    let err = uc
        .execute(AnalyzeRequest::search("react", depth(3)))
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "An error occurred while fetching dependencies"
    );
    assert_eq!(uc.progress_reporter.errors.borrow().len(), 1);
}

#[tokio::test]
async fn test_upload_with_failed_fetch_is_not_recorded() {
    let uc = use_case(
        Some(MANIFEST),
        MockDependencyRepository::failing(),
        MockSessionStore::default(),
    );

    let result = uc
        .execute(AnalyzeRequest::upload("/work/package.json", depth(3)))
        .await;

    assert!(result.is_err());
    assert!(uc.recent_files().is_empty());
    assert!(uc
        .session_store
        .values
        .borrow()
        .get(RecentFiles::SESSION_KEY)
        .is_none());
}

#[tokio::test]
async fn test_upload_with_rejected_tree_is_not_recorded() {
    let uc = use_case(
        Some(MANIFEST),
        MockDependencyRepository::returning(sample_tree()),
        MockSessionStore::default(),
    );

    let result = uc
        .execute(AnalyzeRequest::upload("/work/package.json", depth(1)))
        .await;

    assert!(result.is_err());
    assert!(uc.recent_files().is_empty());
}

#[tokio::test]
async fn test_tree_deeper_than_requested_is_rejected() {
    let uc = use_case(
        None,
        MockDependencyRepository::returning(sample_tree()),
        MockSessionStore::default(),
    );

    let err = uc
        .execute(AnalyzeRequest::search("my-app", depth(1)))
        .await
        .unwrap_err();

    assert!(err.to_string().contains("Invalid dependency tree"));
}

#[test]
fn test_corrupt_recent_files_treated_as_empty() {
    let uc = use_case(
        None,
        MockDependencyRepository::failing(),
        MockSessionStore::with(RecentFiles::SESSION_KEY, "{not an array"),
    );

    assert!(uc.recent_files().is_empty());
    let errors = uc.progress_reporter.errors.borrow();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("corrupt"));
}

#[tokio::test]
async fn test_upload_after_corrupt_session_replaces_value() {
    let uc = use_case(
        Some(MANIFEST),
        MockDependencyRepository::returning(sample_tree()),
        MockSessionStore::with(RecentFiles::SESSION_KEY, "garbage"),
    );

    let response = uc
        .execute(AnalyzeRequest::upload("package.json", depth(3)))
        .await
        .unwrap();

    assert_eq!(response.recent_files.file_names(), vec!["package.json"]);
}

#[tokio::test]
async fn test_analyze_through_inbound_port() {
    let uc = use_case(
        None,
        MockDependencyRepository::returning(sample_tree()),
        MockSessionStore::default(),
    );
    let port: &dyn DependencyAnalysisPort = &uc;

    let response = port
        .analyze(AnalyzeRequest::search("my-app", depth(2)))
        .await
        .unwrap();

    assert_eq!(response.tree.node_count(), 3);
    assert!(port.recent_files().is_empty());
}
