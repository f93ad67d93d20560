use crate::ports::outbound::SessionStore;
use crate::shared::Result;
use std::cell::RefCell;
use std::collections::HashMap;

/// InMemorySessionStore adapter for a session that lives as long as the process
///
/// Used when no session directory should be touched, and in tests.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    entries: RefCell<HashMap<String, String>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl SessionStore for InMemorySessionStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
