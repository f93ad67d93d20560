use crate::ports::outbound::SessionStore;
use crate::shared::error::TodeError;
use crate::shared::security::{
    read_bounded_file, validate_file_size, validate_not_symlink, MAX_SESSION_ENTRY_SIZE,
};
use crate::shared::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding the session directory
pub const SESSION_DIR_ENV: &str = "TODE_SESSION_DIR";

/// FileSessionStore adapter keeping one JSON file per key
///
/// The default location lives in the system temp directory, so entries
/// go away with the user's session rather than persisting.
pub struct FileSessionStore {
    directory: PathBuf,
}

impl FileSessionStore {
    pub fn new(directory: PathBuf) -> Self {
        Self { directory }
    }

    /// Store in `$TODE_SESSION_DIR`, or `<temp dir>/tode-session`
    pub fn from_env() -> Self {
        let directory = std::env::var_os(SESSION_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| std::env::temp_dir().join("tode-session"));
        Self::new(directory)
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    fn entry_path(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(TodeError::Validation {
                message: format!("Invalid session key: {:?}", key),
            }
            .into());
        }
        Ok(self.directory.join(format!("{}.json", key)))
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let path = self.entry_path(key)?;
        if fs::symlink_metadata(&path).is_err() {
            return Ok(None);
        }
        read_bounded_file(&path, "session entry", MAX_SESSION_ENTRY_SIZE).map(Some)
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        let path = self.entry_path(key)?;
        validate_file_size(value.len() as u64, &path, MAX_SESSION_ENTRY_SIZE)?;

        fs::create_dir_all(&self.directory).map_err(|e| TodeError::FileWriteError {
            path: self.directory.clone(),
            details: e.to_string(),
        })?;

        if fs::symlink_metadata(&path).is_ok() {
            validate_not_symlink(&path, "write")?;
        }

        fs::write(&path, value).map_err(|e| TodeError::FileWriteError {
            path: path.clone(),
            details: e.to_string(),
        })?;
        Ok(())
    }
}
