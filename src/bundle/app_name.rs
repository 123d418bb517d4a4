//! Validated application name

use std::fmt;
use std::str::FromStr;

use crate::error::{self, Result, SappError};

/// Name of the app being bundled
///
/// Used verbatim as the `<name>.app` directory and executable name, and
/// lower-cased inside the bundle identifier. Must be a single, non-empty path
/// segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AppName(String);

impl AppName {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();

        if name.is_empty() {
            return Err(error::bundle::invalid_name(name, "App name cannot be empty"));
        }
        if name.trim().is_empty() {
            return Err(error::bundle::invalid_name(
                name,
                "App name cannot be only whitespace",
            ));
        }
        if name.contains(['/', '\\']) {
            return Err(error::bundle::invalid_name(
                name,
                "App name cannot contain a path separator",
            ));
        }
        if name == "." || name == ".." {
            return Err(error::bundle::invalid_name(
                name,
                "App name cannot be a relative path component",
            ));
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lower-cased form used as the last segment of the bundle identifier
    pub fn identifier_fragment(&self) -> String {
        self.0.to_lowercase()
    }
}

impl FromStr for AppName {
    type Err = SappError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for AppName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        for name in ["Foo", "my-app", "Tool 2", "ünïcode", "a.b"] {
            let app = AppName::new(name).unwrap();
            assert_eq!(app.as_str(), name);
        }
    }

    #[test]
    fn test_empty_name_rejected() {
        let err = AppName::new("").unwrap_err();
        assert!(matches!(err, SappError::InvalidAppName { .. }));
        assert!(err.to_string().contains("cannot be empty"));
    }

    #[test]
    fn test_whitespace_name_rejected() {
        assert!(AppName::new("   ").is_err());
    }

    #[test]
    fn test_path_like_names_rejected() {
        for name in ["a/b", "a\\b", ".", ".."] {
            assert!(AppName::new(name).is_err(), "{name} should be rejected");
        }
    }

    #[test]
    fn test_identifier_fragment_is_lowercase() {
        let app: AppName = "MyCoolApp".parse().unwrap();
        assert_eq!(app.identifier_fragment(), "mycoolapp");
        assert_eq!(app.to_string(), "MyCoolApp");
    }
}
