//! Resource source discovery

use std::fmt;
use std::path::PathBuf;

use super::BundleLayout;

/// Where a resource source was found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceOrigin {
    /// `<build_dir>/<name>_<name>.bundle`, produced by the package build
    BuildBundle,
    /// `Sources/<name>/Resources`
    AppSources,
    /// `Sources/Resources`
    SharedSources,
}

impl fmt::Display for ResourceOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ResourceOrigin::BuildBundle => "build resource bundle",
            ResourceOrigin::AppSources => "app sources",
            ResourceOrigin::SharedSources => "shared sources",
        })
    }
}

/// A resource directory to link into `Contents/Resources`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceSource {
    pub origin: ResourceOrigin,
    pub path: PathBuf,
}

/// Candidate resource locations, highest priority first
pub fn resource_candidates(layout: &BundleLayout) -> [ResourceSource; 3] {
    [
        ResourceSource {
            origin: ResourceOrigin::BuildBundle,
            path: layout.build_resource_bundle(),
        },
        ResourceSource {
            origin: ResourceOrigin::AppSources,
            path: layout.app_sources_resources(),
        },
        ResourceSource {
            origin: ResourceOrigin::SharedSources,
            path: layout.shared_sources_resources(),
        },
    ]
}

/// Return the first candidate that exists on disk
pub fn resolve_resource_source(layout: &BundleLayout) -> Option<ResourceSource> {
    resource_candidates(layout).into_iter().find(|candidate| {
        let exists = candidate.path.exists();
        log::debug!(
            "Probing {} at {}: {}",
            candidate.origin,
            candidate.path.display(),
            if exists { "found" } else { "missing" }
        );
        exists
    })
}
