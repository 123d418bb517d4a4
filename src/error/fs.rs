//! File system errors

use super::SappError;

pub fn directory_creation_failed(path: impl Into<String>, reason: impl ToString) -> SappError {
    SappError::DirectoryCreationFailed {
        path: path.into(),
        reason: reason.to_string(),
    }
}

pub fn manifest_write_failed(path: impl Into<String>, reason: impl ToString) -> SappError {
    SappError::ManifestWriteFailed {
        path: path.into(),
        reason: reason.to_string(),
    }
}

pub fn symlink_failed(
    link: impl Into<String>,
    target: impl Into<String>,
    reason: impl ToString,
) -> SappError {
    SappError::SymlinkCreationFailed {
        link: link.into(),
        target: target.into(),
        reason: reason.to_string(),
    }
}

pub fn remove_failed(path: impl Into<String>, reason: impl ToString) -> SappError {
    SappError::RemoveFailed {
        path: path.into(),
        reason: reason.to_string(),
    }
}

/// Creates the error that guards non-empty destinations from being replaced
pub fn destination_not_empty(path: impl Into<String>) -> SappError {
    SappError::DestinationNotEmpty { path: path.into() }
}

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> SappError {
    SappError::IoError {
        message: message.into(),
    }
}
