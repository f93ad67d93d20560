use crate::shared::Result;

/// SessionStore port for session-scoped key/value storage
///
/// Values are opaque JSON strings. Nothing stored here is expected to
/// outlive the user's session.
pub trait SessionStore {
    /// Loads the value stored under `key`, `None` if nothing was saved yet
    ///
    /// # Errors
    /// Returns an error if the underlying storage cannot be read
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value
    ///
    /// # Errors
    /// Returns an error if the underlying storage cannot be written
    fn save(&self, key: &str, value: &str) -> Result<()>;
}
