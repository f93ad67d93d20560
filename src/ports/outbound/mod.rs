/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, network, console, etc.).
pub mod dependency_repository;
pub mod manifest_reader;
pub mod output_presenter;
pub mod progress_reporter;
pub mod scene_formatter;
pub mod session_store;

pub use dependency_repository::{DependencyRepository, RequestPayload};
pub use manifest_reader::ManifestReader;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use scene_formatter::SceneFormatter;
pub use session_store::SessionStore;
