//! Bundle skeleton generation

use std::fs;

use super::manifest::InfoPlist;
use super::status::{SkeletonReport, StepStatus};
use super::{BundleLayout, linker};
use crate::common::fs::{create_symlink, remove_file_or_link, remove_link_if_present};
use crate::config::Settings;
use crate::error::{self, Result};

/// Builds the `.app` skeleton for one layout
pub struct BundleBuilder<'a> {
    layout: &'a BundleLayout,
    settings: &'a Settings,
}

impl<'a> BundleBuilder<'a> {
    pub fn new(layout: &'a BundleLayout, settings: &'a Settings) -> Self {
        Self { layout, settings }
    }

    /// Create directories, link resources, write info.plist and link the binary
    ///
    /// Directory and manifest failures abort with an error. Resource and
    /// binary link problems are recorded in the report instead.
    pub fn generate_skeleton(&self) -> Result<SkeletonReport> {
        log::info!("Generating skeleton at {}", self.layout.app_dir().display());

        let directories = self.create_directory_structure()?;
        let resources = self.link_resources();
        let manifest = self.write_manifest()?;
        let binary = self.link_binary();

        Ok(SkeletonReport {
            directories,
            resources,
            manifest,
            binary,
        })
    }

    fn create_directory_structure(&self) -> Result<StepStatus> {
        let macos_dir = self.layout.macos_dir();

        fs::create_dir_all(&macos_dir).map_err(|e| {
            error::fs::directory_creation_failed(macos_dir.display().to_string(), e)
        })?;

        Ok(StepStatus::Done(format!(
            "Created app directory structure at {}",
            self.layout.app_dir().display()
        )))
    }

    fn link_resources(&self) -> StepStatus {
        match linker::relink_resources(self.layout) {
            Ok(status) => status,
            Err(e) => {
                log::warn!("Resource linking failed: {e}");
                StepStatus::Failed(e)
            }
        }
    }

    fn write_manifest(&self) -> Result<StepStatus> {
        let plist = InfoPlist::for_app(
            self.layout.name(),
            &self.settings.vendor,
            &self.settings.version,
        );
        let path = self.layout.info_plist();
        plist.write_to(&path)?;

        Ok(StepStatus::Done(format!(
            "Created info.plist ({})",
            plist.identifier
        )))
    }

    fn link_binary(&self) -> StepStatus {
        let binary = self.layout.binary();
        let link = self.layout.executable_link();

        if !binary.exists() {
            // A link left from an earlier run would now dangle
            match remove_link_if_present(&link) {
                Ok(true) => log::info!("Removed stale link {}", link.display()),
                Ok(false) => {}
                Err(e) => return StepStatus::Failed(e),
            }
            return StepStatus::Skipped(error::bundle::source_not_found(
                "Binary",
                binary.display().to_string(),
            ));
        }

        if let Err(e) = remove_file_or_link(&link) {
            log::warn!("Could not clear {}: {e}", link.display());
            return StepStatus::Failed(e);
        }

        match create_symlink(&binary, &link) {
            Ok(()) => StepStatus::Done(format!(
                "Created symlink: {} -> {}",
                link.display(),
                binary.display()
            )),
            Err(e) => {
                log::warn!("Binary linking failed: {e}");
                StepStatus::Failed(e)
            }
        }
    }
}
