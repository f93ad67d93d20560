/// In-process adapters with no external side effects
mod in_memory_session_store;

pub use in_memory_session_store::InMemorySessionStore;
