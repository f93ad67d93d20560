use crate::ports::outbound::ManifestReader;
use crate::shared::error::TodeError;
use crate::shared::security::{read_bounded_file, MAX_MANIFEST_SIZE};
use crate::shared::Result;
use std::path::Path;

/// FileSystemReader adapter for reading manifests from the file system
///
/// This adapter implements the ManifestReader port with the same
/// symlink, file type and size checks used everywhere else.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestReader for FileSystemReader {
    fn read_manifest(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(TodeError::ManifestNotFound {
                path: path.to_path_buf(),
                suggestion: format!(
                    "\"{}\" does not exist.\n   \
                     Please pass the path of a package.json file with the --upload option.",
                    path.display()
                ),
            }
            .into());
        }

        read_bounded_file(path, "package.json", MAX_MANIFEST_SIZE).map_err(|e| {
            TodeError::ManifestReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}
