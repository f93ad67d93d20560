use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts to distinguish argument errors from
/// failures that happened while analyzing or rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the dependency tree was rendered
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (API error, network error, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for dependency analysis and rendering.
#[derive(Debug, Error)]
pub enum TodeError {
    #[error("package.json file not found: {path}\n\n💡 Hint: {suggestion}")]
    ManifestNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to read package.json file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    ManifestReadError { path: PathBuf, details: String },

    #[error("Failed to parse package.json file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file contains valid JSON")]
    ManifestParseError { path: PathBuf, details: String },

    #[error("package.json file is empty: {path}\n\n💡 Hint: Upload a manifest that declares at least a name")]
    EmptyManifest { path: PathBuf },

    #[error("Invalid search term: {term:?}\nReason: {reason}")]
    InvalidSearchTerm { term: String, reason: String },

    #[error("Invalid search depth: {depth}\n\n💡 Hint: Search depth must be between {min} and {max}")]
    InvalidSearchDepth { depth: u8, min: u8, max: u8 },

    /// User-visible message for a failed dependency fetch
    #[error("{message}")]
    FetchFailed { message: String },

    #[error("Invalid dependency tree returned by the API\nReason: {reason}")]
    InvalidDependencyTree { reason: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },

    /// Validation error for configuration and builder inputs
    #[error("Validation error: {message}")]
    Validation { message: String },
}
