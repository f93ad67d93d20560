use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A manifest the user analyzed during this session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentFile {
    pub file_name: String,
    pub analyzed_at: DateTime<Utc>,
}

/// Bounded list of recently analyzed manifests, oldest first
///
/// Holds at most [`RecentFiles::MAX_ENTRIES`] entries. Adding a file whose
/// name is already listed leaves the list untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecentFiles {
    entries: Vec<RecentFile>,
}

impl RecentFiles {
    pub const MAX_ENTRIES: usize = 5;
    pub const SESSION_KEY: &'static str = "recentFiles";

    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `file_name`, evicting the oldest entry when full
    ///
    /// Returns `false` when the file was already present.
    pub fn add(&mut self, file_name: impl Into<String>, analyzed_at: DateTime<Utc>) -> bool {
        let file_name = file_name.into();
        if self.contains(&file_name) {
            return false;
        }
        if self.entries.len() >= Self::MAX_ENTRIES {
            let overflow = self.entries.len() + 1 - Self::MAX_ENTRIES;
            self.entries.drain(..overflow);
        }
        self.entries.push(RecentFile {
            file_name,
            analyzed_at,
        });
        true
    }

    pub fn contains(&self, file_name: &str) -> bool {
        self.entries.iter().any(|e| e.file_name == file_name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RecentFile> {
        self.entries.iter()
    }

    pub fn file_names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.file_name.as_str()).collect()
    }
}
