use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use std::cell::RefCell;
use std::time::Duration;

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// This adapter implements the ProgressReporter port, writing progress
/// information to stderr so it doesn't interfere with stdout output.
/// Uses an indicatif spinner while a request is in flight.
pub struct StderrProgressReporter {
    spinner: RefCell<Option<ProgressBar>>,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: RefCell::new(None),
        }
    }

    fn start_spinner(&self, message: &str) {
        let style = ProgressStyle::with_template("   {spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(style);
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(100));

        if let Some(previous) = self.spinner.borrow_mut().replace(spinner) {
            previous.finish_and_clear();
        }
    }

    fn finish_spinner(&self) {
        if let Some(spinner) = self.spinner.borrow_mut().take() {
            spinner.finish_and_clear();
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        match self.spinner.borrow().as_ref() {
            Some(spinner) => spinner.println(message),
            None => eprintln!("{}", message),
        }
    }

    fn report_activity(&self, message: &str) {
        self.start_spinner(message);
    }

    fn report_error(&self, message: &str) {
        self.finish_spinner();
        eprintln!("{}", message);
    }

    fn report_completion(&self, message: &str) {
        self.finish_spinner();
        eprintln!("{}", message);
    }
}
