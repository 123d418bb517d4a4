//! App bundle domain
//!
//! - [`AppName`] and [`BundleLayout`] describe what goes where
//! - [`builder`] generates the skeleton
//! - [`linker`] and [`resources`] find and link resource directories
//! - [`manifest`] renders and writes info.plist

pub mod app_name;
pub mod builder;
pub mod layout;
pub mod linker;
pub mod manifest;
pub mod resources;
pub mod status;

pub use app_name::AppName;
pub use builder::BundleBuilder;
pub use layout::BundleLayout;
pub use resources::resolve_resource_source;
pub use status::{SkeletonReport, Step, StepStatus};
