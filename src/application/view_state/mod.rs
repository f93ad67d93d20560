/// View state for the dependency view
///
/// A single reducer owns the displayed graph, loading flag, error message,
/// popup selection and recent files. The controller feeds it user actions
/// and analysis results.
mod controller;
mod state;

pub use controller::DependencyViewController;
pub use state::{DependencyViewState, RequestId};
