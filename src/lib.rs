//! tode - dependency tree visualizer for npm projects
//!
//! This library resolves the dependency tree of a `package.json` (or of a
//! single npm package) through a remote dependency API, lays it out as a
//! hierarchical diagram, flags nodes drawn on top of each other and renders
//! the result as SVG, JSON or Markdown. It follows hexagonal architecture.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`visualization`): Dependency tree model, layout,
//!   overlap detection and scene assembly
//! - **Application Layer** (`application`): Use cases, view state and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use tode::prelude::*;
//!
//! # async fn run() -> Result<()> {
//! // Create adapters
//! let use_case = AnalyzeDependenciesUseCase::new(
//!     FileSystemReader::new(),
//!     TodeApiClient::new("http://localhost:8080")?,
//!     InMemorySessionStore::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! // Execute
//! let request = AnalyzeRequest::search("react", SearchDepth::new(3)?);
//! let response = use_case.execute(request).await?;
//!
//! // Render
//! let scene = SceneBuilder::default().render(&response.tree);
//! let svg = SvgFormatter::new().format(&scene)?;
//! println!("{}", svg);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod ports;
pub mod shared;
pub mod visualization;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{PopupPresenter, StderrProgressReporter};
    pub use crate::adapters::outbound::filesystem::{
        FileSessionStore, FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter, SvgFormatter};
    pub use crate::adapters::outbound::memory::InMemorySessionStore;
    pub use crate::adapters::outbound::network::TodeApiClient;
    pub use crate::application::dto::{AnalysisSource, AnalyzeRequest, AnalyzeResponse, OutputFormat};
    pub use crate::application::use_cases::AnalyzeDependenciesUseCase;
    pub use crate::application::view_state::{DependencyViewController, DependencyViewState, RequestId};
    pub use crate::ports::inbound::DependencyAnalysisPort;
    pub use crate::ports::outbound::{
        DependencyRepository, ManifestReader, OutputPresenter, ProgressReporter, RequestPayload,
        SceneFormatter, SessionStore,
    };
    pub use crate::shared::error::{ExitCode, TodeError};
    pub use crate::shared::Result;
    pub use crate::visualization::domain::{
        CanvasConfig, DependencyNode, OverlapTable, PackageStatus, ParsedFile, Point, PopupEffect,
        PopupEvent, PopupState, RecentFiles, Scene, SearchDepth, TreeLayout,
    };
    pub use crate::visualization::policies::StatusPalette;
    pub use crate::visualization::services::{
        OverlapDetector, SceneBuilder, TreeLayoutEngine, TreeValidator,
    };
}
