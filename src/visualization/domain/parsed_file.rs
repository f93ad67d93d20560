use crate::shared::error::TodeError;
use crate::shared::Result;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The parts of a package.json the dependency API needs
///
/// Other manifest fields (scripts, devDependencies, ...) are ignored.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ParsedFile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub dependencies: IndexMap<String, String>,
}

impl ParsedFile {
    /// Parses manifest text read from `path`
    ///
    /// # Errors
    /// - `EmptyManifest` when the text is blank
    /// - `ManifestParseError` when the text is not a JSON object of the expected shape
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        if content.trim().is_empty() {
            return Err(TodeError::EmptyManifest {
                path: path.to_path_buf(),
            }
            .into());
        }

        serde_json::from_str(content).map_err(|e| {
            TodeError::ManifestParseError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }

    pub fn dependency_count(&self) -> usize {
        self.dependencies.len()
    }
}
