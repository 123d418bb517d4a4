//! Resource linking
//!
//! Points `Contents/Resources` at the resolved resource source. The same
//! sequence runs on its own (`sapp sym resources`) and as part of skeleton
//! generation.

use super::status::StepStatus;
use super::{BundleLayout, resolve_resource_source};
use crate::common::fs::{Cleared, create_symlink, safe_clear};
use crate::error::{self, Result};

/// Resolve the resource source and (re)link it into the bundle
///
/// Returns `Skipped` if no source exists. `DestinationNotEmpty` and
/// remove/link failures are returned as errors; content that is not a link
/// or an empty directory is never removed.
pub fn relink_resources(layout: &BundleLayout) -> Result<StepStatus> {
    let Some(source) = resolve_resource_source(layout) else {
        return Ok(StepStatus::Skipped(error::bundle::source_not_found(
            "Resources",
            format!(
                "{}, {} or {}",
                layout.build_resource_bundle().display(),
                layout.app_sources_resources().display(),
                layout.shared_sources_resources().display()
            ),
        )));
    };

    let target = layout.resources_dir();

    match safe_clear(&target)? {
        Cleared::Absent => {}
        Cleared::Link => log::info!("Replacing existing link {}", target.display()),
        Cleared::EmptyDir => log::info!("Removed empty directory {}", target.display()),
    }

    create_symlink(&source.path, &target)?;

    Ok(StepStatus::Done(format!(
        "Created symlink: {} -> {} ({})",
        target.display(),
        source.path.display(),
        source.origin
    )))
}

/// Relink resources for an app that has already been initialized
///
/// Fails with `BundleNotFound` if `<name>.app` does not exist yet.
pub fn relink_bundle_resources(layout: &BundleLayout) -> Result<StepStatus> {
    if !layout.app_dir().is_dir() {
        return Err(error::bundle::not_found(
            layout.app_dir().display().to_string(),
        ));
    }

    relink_resources(layout)
}
