//! Init command implementation
//!
//! Generates `<Name>.app` in the project root.

use crate::bundle::BundleBuilder;
use crate::cli::InitArgs;
use crate::error::Result;
use crate::ui;

use super::helpers::{CommandContext, resolve_app_name};

pub fn run(ctx: &CommandContext, args: InitArgs) -> Result<()> {
    let name = resolve_app_name(args.name)?;
    let layout = ctx.layout(name);

    let report = BundleBuilder::new(&layout, &ctx.settings).generate_skeleton()?;
    ui::print_report(&report);

    if report.has_failures() {
        ui::print_warning("Some links could not be created; the bundle is incomplete.");
    }
    ui::print_success(
        "App skeleton generated successfully for ",
        layout.name().as_str(),
    );

    Ok(())
}
