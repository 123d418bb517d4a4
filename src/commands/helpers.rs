//! Command helper utilities

use std::path::{Path, PathBuf};

use crate::bundle::{AppName, BundleLayout};
use crate::config::{self, Settings};
use crate::error::{self, Result};

use super::prompt;

/// Resolve the project root from an optional argument
///
/// If a root path is provided, use it. Otherwise, resolve to the current
/// directory. The result is absolute so symlink targets are too.
pub fn resolve_root(root: Option<PathBuf>) -> Result<PathBuf> {
    let root = match root {
        Some(path) => path,
        None => std::env::current_dir()
            .map_err(|e| error::fs::io_error(format!("Failed to get current directory: {e}")))?,
    };

    dunce::canonicalize(&root).map_err(|e| {
        error::fs::io_error(format!(
            "Failed to resolve project root {}: {e}",
            root.display()
        ))
    })
}

/// Load sapp.yaml from the root and apply the CLI vendor override
pub fn load_settings(root: &Path, vendor: Option<String>) -> Result<Settings> {
    let project = config::load_project_config(root)?;
    let settings = Settings::resolve(project, vendor);
    log::debug!("Effective settings: {settings:?}");
    Ok(settings)
}

/// Use the name from the command line, or ask for one
pub fn resolve_app_name(name: Option<String>) -> Result<AppName> {
    match name {
        Some(name) => AppName::new(name),
        None => prompt::prompt_app_name(),
    }
}

/// Everything a bundle command needs, resolved from the global CLI options
pub struct CommandContext {
    pub root: PathBuf,
    pub settings: Settings,
}

impl CommandContext {
    pub fn new(root: Option<PathBuf>, vendor: Option<String>) -> Result<Self> {
        let root = resolve_root(root)?;
        let settings = load_settings(&root, vendor)?;
        Ok(Self { root, settings })
    }

    pub fn layout(&self, name: AppName) -> BundleLayout {
        BundleLayout::new(&self.root, name, &self.settings.build_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SappError;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_root_is_absolute() {
        let temp = TempDir::new().unwrap();
        let root = resolve_root(Some(temp.path().to_path_buf())).unwrap();
        assert!(root.is_absolute());
        assert_eq!(root, dunce::canonicalize(temp.path()).unwrap());
    }

    #[test]
    fn test_resolve_missing_root_fails() {
        let temp = TempDir::new().unwrap();
        let result = resolve_root(Some(temp.path().join("missing")));
        assert!(matches!(result, Err(SappError::IoError { .. })));
    }

    #[test]
    fn test_resolve_app_name_from_argument() {
        let name = resolve_app_name(Some("Foo".to_string())).unwrap();
        assert_eq!(name.as_str(), "Foo");
        assert!(resolve_app_name(Some(String::new())).is_err());
    }

    #[test]
    fn test_context_layout_uses_configured_build_dir() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("sapp.yaml"), "build_dir: out\n").unwrap();

        let ctx = CommandContext::new(Some(temp.path().to_path_buf()), None).unwrap();
        let layout = ctx.layout(AppName::new("Foo").unwrap());

        assert_eq!(layout.binary(), ctx.root.join("out").join("Foo"));
    }
}
