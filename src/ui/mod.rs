//! Terminal presentation of step outcomes
//!
//! Every outcome gets exactly one line on stdout. Colors come from `console`
//! and are dropped automatically when stdout is not a terminal.

use console::Style;

use crate::bundle::{SkeletonReport, Step, StepStatus};

/// Print a single step outcome
pub fn print_status(step: Step, status: &StepStatus) {
    let (marker, style) = match status {
        StepStatus::Done(_) => ("✓", Style::new().green()),
        StepStatus::Skipped(_) => ("-", Style::new().yellow()),
        StepStatus::Failed(_) => ("✗", Style::new().red()),
    };

    println!(
        "{} {} {}",
        style.apply_to(marker),
        Style::new().bold().apply_to(format!("{}:", step.label())),
        status
    );
}

/// Print every step of a skeleton report in order
pub fn print_report(report: &SkeletonReport) {
    for (step, status) in report.steps() {
        print_status(step, status);
    }
}

pub fn print_success(message: &str, app_name: &str) {
    println!(
        "{}{}",
        Style::new().green().apply_to(message),
        Style::new().bold().apply_to(app_name)
    );
}

pub fn print_warning(message: &str) {
    println!("{}", Style::new().yellow().apply_to(message));
}
