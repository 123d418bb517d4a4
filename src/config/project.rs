//! Project configuration (sapp.yaml) data structures

use std::path::PathBuf;

use serde::Deserialize;

use crate::error::Result;

/// Vendor segment used in `com.<vendor>.<app>` when nothing else is configured
pub const DEFAULT_VENDOR: &str = "leviouwendijk";

/// `CFBundleVersion` written when nothing else is configured
pub const DEFAULT_BUNDLE_VERSION: &str = "1.0";

/// Build output directory, relative to the project root
pub const DEFAULT_BUILD_DIR: &str = ".build/release";

/// Project configuration (sapp.yaml)
///
/// Every field is optional; missing fields fall back to the defaults above.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Vendor segment of the bundle identifier
    #[serde(default)]
    pub vendor: Option<String>,

    /// Value of `CFBundleVersion`
    #[serde(default)]
    pub version: Option<String>,

    /// Directory holding the release binary and resource bundle artifact
    #[serde(default)]
    pub build_dir: Option<PathBuf>,
}

impl ProjectConfig {
    /// Parse project configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty file deserializes to unit, not a map
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }
}

/// Effective settings after merging CLI overrides, sapp.yaml and defaults
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub vendor: String,
    pub version: String,
    pub build_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            vendor: DEFAULT_VENDOR.to_string(),
            version: DEFAULT_BUNDLE_VERSION.to_string(),
            build_dir: PathBuf::from(DEFAULT_BUILD_DIR),
        }
    }
}

impl Settings {
    /// Merge a loaded project config with an optional vendor override from the CLI
    pub fn resolve(project: ProjectConfig, vendor_override: Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            vendor: non_blank(vendor_override)
                .or_else(|| non_blank(project.vendor))
                .unwrap_or(defaults.vendor),
            version: project.version.unwrap_or(defaults.version),
            build_dir: project.build_dir.unwrap_or(defaults.build_dir),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let yaml = "vendor: acme\nversion: \"2.3\"\nbuild_dir: out/release\n";
        let config = ProjectConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.vendor.as_deref(), Some("acme"));
        assert_eq!(config.version.as_deref(), Some("2.3"));
        assert_eq!(config.build_dir, Some(PathBuf::from("out/release")));
    }

    #[test]
    fn test_parse_empty_config() {
        assert_eq!(ProjectConfig::from_yaml("").unwrap(), ProjectConfig::default());
        assert_eq!(
            ProjectConfig::from_yaml("  \n").unwrap(),
            ProjectConfig::default()
        );
    }

    #[test]
    fn test_parse_rejects_unknown_fields() {
        let result = ProjectConfig::from_yaml("vendr: typo\n");
        assert!(matches!(
            result,
            Err(crate::error::SappError::ConfigParseFailed { .. })
        ));
    }

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::resolve(ProjectConfig::default(), None);
        assert_eq!(settings.vendor, DEFAULT_VENDOR);
        assert_eq!(settings.version, "1.0");
        assert_eq!(settings.build_dir, PathBuf::from(".build/release"));
    }

    #[test]
    fn test_cli_vendor_overrides_file() {
        let project = ProjectConfig {
            vendor: Some("from-file".to_string()),
            ..ProjectConfig::default()
        };
        let settings = Settings::resolve(project, Some("from-cli".to_string()));
        assert_eq!(settings.vendor, "from-cli");
    }

    #[test]
    fn test_blank_vendor_falls_back_to_default() {
        let settings = Settings::resolve(ProjectConfig::default(), Some("  ".to_string()));
        assert_eq!(settings.vendor, DEFAULT_VENDOR);
    }

    #[test]
    fn test_blank_cli_vendor_keeps_file_vendor() {
        let project = ProjectConfig {
            vendor: Some("from-file".to_string()),
            ..ProjectConfig::default()
        };
        let settings = Settings::resolve(project, Some(String::new()));
        assert_eq!(settings.vendor, "from-file");
    }

    #[test]
    fn test_blank_file_vendor_falls_back_to_default() {
        let project = ProjectConfig {
            vendor: Some(" ".to_string()),
            ..ProjectConfig::default()
        };
        let settings = Settings::resolve(project, None);
        assert_eq!(settings.vendor, DEFAULT_VENDOR);
    }
}
