//! Outcome values for bundle steps
//!
//! Fatal errors travel as `Err`; everything else ends up in a [`StepStatus`]
//! so the command layer decides how to present it.

use std::fmt;

use crate::error::SappError;

/// Result of one non-fatal step
#[derive(Debug)]
pub enum StepStatus {
    /// The step did its work; the message describes what changed
    Done(String),
    /// Nothing to do, usually because a source is missing
    Skipped(SappError),
    /// The step failed but the bundle is still structurally valid
    Failed(SappError),
}

impl StepStatus {
    #[cfg(test)]
    pub fn is_done(&self) -> bool {
        matches!(self, StepStatus::Done(_))
    }

    #[cfg(test)]
    pub fn is_skipped(&self) -> bool {
        matches!(self, StepStatus::Skipped(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, StepStatus::Failed(_))
    }
}

impl fmt::Display for StepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepStatus::Done(message) => f.write_str(message),
            StepStatus::Skipped(reason) => write!(f, "{reason}. Skipping."),
            StepStatus::Failed(err) => write!(f, "{err}"),
        }
    }
}

/// Steps of skeleton generation, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Directories,
    Resources,
    Manifest,
    Binary,
}

impl Step {
    pub fn label(self) -> &'static str {
        match self {
            Step::Directories => "directories",
            Step::Resources => "resources",
            Step::Manifest => "info.plist",
            Step::Binary => "binary",
        }
    }
}

/// Everything `generate_skeleton` did, one status per step
#[derive(Debug)]
pub struct SkeletonReport {
    pub directories: StepStatus,
    pub resources: StepStatus,
    pub manifest: StepStatus,
    pub binary: StepStatus,
}

impl SkeletonReport {
    pub fn steps(&self) -> [(Step, &StepStatus); 4] {
        [
            (Step::Directories, &self.directories),
            (Step::Resources, &self.resources),
            (Step::Manifest, &self.manifest),
            (Step::Binary, &self.binary),
        ]
    }

    /// True if any non-fatal step failed
    pub fn has_failures(&self) -> bool {
        self.steps().iter().any(|(_, status)| status.is_failed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error;

    #[test]
    fn test_display() {
        assert_eq!(StepStatus::Done("Created x".into()).to_string(), "Created x");
        assert_eq!(
            StepStatus::Skipped(error::bundle::source_not_found("Binary", "/b/Foo")).to_string(),
            "Binary not found at /b/Foo. Skipping."
        );
    }

    #[test]
    fn test_has_failures() {
        let mut report = SkeletonReport {
            directories: StepStatus::Done(String::new()),
            resources: StepStatus::Skipped(error::bundle::source_not_found("Resources", "x")),
            manifest: StepStatus::Done(String::new()),
            binary: StepStatus::Done(String::new()),
        };
        assert!(!report.has_failures());

        report.binary = StepStatus::Failed(error::fs::symlink_failed("a", "b", "denied"));
        assert!(report.has_failures());
        assert_eq!(report.steps()[3].0, Step::Binary);
    }
}
