use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum size of an uploaded manifest (5 MB)
/// Real package.json files are a few kilobytes; anything larger is rejected
pub const MAX_MANIFEST_SIZE: u64 = 5 * 1024 * 1024;

/// Maximum size of a single session store entry (1 MB)
pub const MAX_SESSION_ENTRY_SIZE: u64 = 1024 * 1024;

/// Validates that a path is not a symbolic link
///
/// # Security
/// This function uses `symlink_metadata()` instead of `metadata()` to ensure
/// we check the symlink itself, not the target it points to.
///
/// # Arguments
/// * `path` - The path to validate
/// * `operation` - Description of the operation (e.g., "read", "write") for error messages
///
/// # Errors
/// Returns an error if the path is a symbolic link or if metadata cannot be read
pub fn validate_not_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to read metadata for {} operation on {}: {}",
            operation,
            path.display(),
            e
        )
    })?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, {} operations on symbolic links are not allowed.",
            path.display(),
            operation
        );
    }

    Ok(())
}

/// Validates file size is within acceptable limits
///
/// # Arguments
/// * `file_size` - The size of the file in bytes
/// * `path` - The path to the file (for error messages)
/// * `max_size` - Maximum allowed size in bytes
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            file_size,
            max_size
        );
    }
    Ok(())
}

/// Reads a regular file as UTF-8 after symlink, type and size checks
///
/// # Arguments
/// * `path` - File to read
/// * `file_description` - Human-readable name used in error messages (e.g., "package.json")
/// * `max_size` - Maximum allowed size in bytes
///
/// # Errors
/// Returns an error if:
/// - Metadata cannot be read (missing file, permissions)
/// - The path is a symbolic link or not a regular file
/// - The file exceeds `max_size`
/// - The content is not valid UTF-8
pub fn read_bounded_file(path: &Path, file_description: &str, max_size: u64) -> Result<String> {
    let metadata = fs::symlink_metadata(path).map_err(|e| {
        anyhow::anyhow!("Failed to read {} metadata: {}", file_description, e)
    })?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
            path.display()
        );
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    validate_file_size(metadata.len(), path, max_size)?;

    fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", file_description, e))
}
