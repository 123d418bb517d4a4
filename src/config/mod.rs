//! Configuration file handling for sapp
//!
//! The only file is an optional `sapp.yaml` in the project root.

pub mod project;

use std::fs;
use std::path::Path;

use crate::error::{self, Result};

pub use project::{ProjectConfig, Settings};

/// Project config filename
pub const PROJECT_CONFIG_FILE: &str = "sapp.yaml";

/// Load project configuration from the project root
///
/// Returns the default config if sapp.yaml does not exist, as the file is optional.
pub fn load_project_config(root: &Path) -> Result<ProjectConfig> {
    let path = root.join(PROJECT_CONFIG_FILE);

    if !path.exists() {
        log::debug!("No {} in {}, using defaults", PROJECT_CONFIG_FILE, root.display());
        return Ok(ProjectConfig::default());
    }

    let content = fs::read_to_string(&path)
        .map_err(|e| error::config::read_failed(path.display().to_string(), e))?;

    ProjectConfig::from_yaml(&content).map_err(|e| match e {
        error::SappError::ConfigParseFailed { reason, .. } => {
            error::config::parse_failed(path.display().to_string(), reason)
        }
        other => other,
    })
}
