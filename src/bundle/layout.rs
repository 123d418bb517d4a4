//! Paths that make up a bundle on disk

use std::path::{Path, PathBuf};

use super::AppName;

/// Every path sapp reads or writes for one app, rooted at an explicit project directory
///
/// ```text
/// <root>/<name>.app/
///   Contents/
///     info.plist
///     MacOS/<name>      -> <build_dir>/<name>
///     Resources         -> resolved resource source
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleLayout {
    name: AppName,
    root: PathBuf,
    build_dir: PathBuf,
    app_dir: PathBuf,
    contents: PathBuf,
}

impl BundleLayout {
    /// Compute the layout for `name` under `root`
    ///
    /// A relative `build_dir` is taken relative to `root`.
    pub fn new(root: impl Into<PathBuf>, name: AppName, build_dir: &Path) -> Self {
        let root = root.into();
        let build_dir = root.join(build_dir);
        let app_dir = root.join(format!("{name}.app"));
        let contents = app_dir.join("Contents");

        Self {
            name,
            root,
            build_dir,
            app_dir,
            contents,
        }
    }

    pub fn name(&self) -> &AppName {
        &self.name
    }

    /// `<root>/<name>.app`
    pub fn app_dir(&self) -> &Path {
        &self.app_dir
    }

    pub fn build_dir(&self) -> &Path {
        &self.build_dir
    }

    pub fn contents_dir(&self) -> &Path {
        &self.contents
    }

    pub fn macos_dir(&self) -> PathBuf {
        self.contents.join("MacOS")
    }

    pub fn resources_dir(&self) -> PathBuf {
        self.contents.join("Resources")
    }

    pub fn info_plist(&self) -> PathBuf {
        self.contents.join("info.plist")
    }

    /// Where the executable symlink lives inside the bundle
    pub fn executable_link(&self) -> PathBuf {
        self.macos_dir().join(self.name.as_str())
    }

    /// Expected release binary in the build output directory
    pub fn binary(&self) -> PathBuf {
        self.build_dir.join(self.name.as_str())
    }

    /// Prebuilt resource bundle artifact, `<build_dir>/<name>_<name>.bundle`
    pub fn build_resource_bundle(&self) -> PathBuf {
        self.build_dir
            .join(format!("{0}_{0}.bundle", self.name.as_str()))
    }

    /// `<root>/Sources/<name>/Resources`
    pub fn app_sources_resources(&self) -> PathBuf {
        self.root
            .join("Sources")
            .join(self.name.as_str())
            .join("Resources")
    }

    /// `<root>/Sources/Resources`
    pub fn shared_sources_resources(&self) -> PathBuf {
        self.root.join("Sources").join("Resources")
    }
}
