//! Bundle-related errors

use super::SappError;

/// Creates an invalid app name error
pub fn invalid_name(name: impl Into<String>, reason: impl Into<String>) -> SappError {
    SappError::InvalidAppName {
        name: name.into(),
        reason: reason.into(),
    }
}

/// Creates a bundle not found error
pub fn not_found(path: impl Into<String>) -> SappError {
    SappError::BundleNotFound { path: path.into() }
}

/// Creates a source not found error (binary or resources absent)
pub fn source_not_found(what: impl Into<String>, path: impl Into<String>) -> SappError {
    SappError::SourceNotFound {
        what: what.into(),
        path: path.into(),
    }
}
