use std::path::Path;
use tode::prelude::*;

/// Mock ManifestReader for testing
pub struct MockManifestReader {
    pub content: String,
    pub should_fail: bool,
}

impl MockManifestReader {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            content: String::new(),
            should_fail: true,
        }
    }
}

impl ManifestReader for MockManifestReader {
    fn read_manifest(&self, path: &Path) -> Result<String> {
        if self.should_fail {
            anyhow::bail!("Mock manifest read failure: {}", path.display());
        }
        Ok(self.content.clone())
    }
}
