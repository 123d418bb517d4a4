//! Configuration errors

use super::SappError;

/// Creates a config read failed error
pub fn read_failed(path: impl Into<String>, reason: impl ToString) -> SappError {
    SappError::ConfigReadFailed {
        path: path.into(),
        reason: reason.to_string(),
    }
}

/// Creates a config parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl ToString) -> SappError {
    SappError::ConfigParseFailed {
        path: path.into(),
        reason: reason.to_string(),
    }
}
