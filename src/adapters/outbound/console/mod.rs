/// Console adapters for terminal output
mod popup_presenter;
mod progress_reporter;

pub use popup_presenter::PopupPresenter;
pub use progress_reporter::StderrProgressReporter;
