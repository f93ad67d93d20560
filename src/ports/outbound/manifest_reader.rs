use crate::shared::Result;
use std::path::Path;

/// ManifestReader port for reading uploaded manifests
///
/// This port abstracts the file system operations needed to read a
/// package.json chosen by the user.
pub trait ManifestReader {
    /// Reads the manifest at `path`
    ///
    /// # Returns
    /// The raw content of the file as a string
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist
    /// - The path is a symlink or not a regular file
    /// - The file exceeds the maximum manifest size
    /// - The file cannot be read due to permissions or I/O errors
    fn read_manifest(&self, path: &Path) -> Result<String>;
}
