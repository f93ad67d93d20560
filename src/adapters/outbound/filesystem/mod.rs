/// Filesystem adapters for file I/O operations
mod file_reader;
mod file_writer;
mod session_store;

pub use file_reader::FileSystemReader;
pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use session_store::{FileSessionStore, SESSION_DIR_ENV};
