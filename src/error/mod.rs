//! Error types and handling for sapp
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`bundle`]: App name and bundle lookup errors
//! - [`config`]: Configuration errors
//! - [`fs`]: File system errors (directories, manifest, symlinks)

pub mod bundle;
pub mod config;
pub mod fs;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for sapp operations
#[derive(Error, Diagnostic, Debug)]
pub enum SappError {
    // Bundle errors
    #[error("Invalid app name '{name}': {reason}")]
    #[diagnostic(
        code(sapp::bundle::invalid_name),
        help("The app name is used as a single path segment, e.g. 'MyApp'")
    )]
    InvalidAppName { name: String, reason: String },

    #[error("{path} does not exist")]
    #[diagnostic(
        code(sapp::bundle::not_found),
        help("Run 'sapp init' to initialize the app first")
    )]
    BundleNotFound { path: String },

    #[error("{what} not found at {path}")]
    #[diagnostic(code(sapp::bundle::source_not_found))]
    SourceNotFound { what: String, path: String },

    // File system errors
    #[error("Failed to create directory {path}: {reason}")]
    #[diagnostic(
        code(sapp::fs::directory_creation_failed),
        help("Check permissions and that no regular file is in the way")
    )]
    DirectoryCreationFailed { path: String, reason: String },

    #[error("Failed to write manifest {path}: {reason}")]
    #[diagnostic(code(sapp::fs::manifest_write_failed))]
    ManifestWriteFailed { path: String, reason: String },

    #[error("Failed to create symlink {link} -> {target}: {reason}")]
    #[diagnostic(code(sapp::fs::symlink_failed))]
    SymlinkCreationFailed {
        link: String,
        target: String,
        reason: String,
    },

    #[error("Failed to remove {path}: {reason}")]
    #[diagnostic(code(sapp::fs::remove_failed))]
    RemoveFailed { path: String, reason: String },

    #[error("Destination {path} is not empty")]
    #[diagnostic(
        code(sapp::fs::destination_not_empty),
        help("Move the files out of the way first; sapp never deletes non-empty directories")
    )]
    DestinationNotEmpty { path: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(sapp::fs::io_error))]
    IoError { message: String },

    // Configuration errors
    #[error("Failed to read configuration file: {path}")]
    #[diagnostic(code(sapp::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(sapp::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    // Interactive input errors
    #[error("Failed to read app name: {message}")]
    #[diagnostic(
        code(sapp::prompt::failed),
        help("Pass --name <NAME> when not running in a terminal")
    )]
    PromptFailed { message: String },
}

impl SappError {
    /// Process exit code for this error
    ///
    /// Each failure class gets its own code so scripts can tell them apart.
    pub fn exit_code(&self) -> i32 {
        match self {
            SappError::IoError { .. } => 1,
            SappError::InvalidAppName { .. } | SappError::PromptFailed { .. } => 2,
            SappError::DirectoryCreationFailed { .. } => 3,
            SappError::ManifestWriteFailed { .. } => 4,
            SappError::SymlinkCreationFailed { .. } | SappError::RemoveFailed { .. } => 5,
            SappError::DestinationNotEmpty { .. } => 6,
            SappError::BundleNotFound { .. } | SappError::SourceNotFound { .. } => 7,
            SappError::ConfigReadFailed { .. } | SappError::ConfigParseFailed { .. } => 8,
        }
    }
}

impl From<serde_yaml::Error> for SappError {
    fn from(err: serde_yaml::Error) -> Self {
        SappError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<inquire::InquireError> for SappError {
    fn from(err: inquire::InquireError) -> Self {
        SappError::PromptFailed {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, SappError>;
